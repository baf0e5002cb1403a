//! Routes serving the client intake page.

use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::domain::deep_link::BrowserHandoff;
use crate::dto::intake::IntakePageData;
use crate::forms::FormError;
use crate::forms::intake::{ClientDetailsForm, IntakeForm};
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, intake as intake_service};

#[get("/")]
/// Show an empty intake form.
pub async fn show_intake_form(
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = intake_service::load_intake_page(&server_config.whatsapp_number);

    let mut context = base_context();
    context.insert("page", &data);

    render_template(&tera, "intake/index.html", &context)
}

#[post("/")]
/// Validate the posted details; re-render with errors or hand the deep link
/// to the browser.
pub async fn submit_intake_form(
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ClientDetailsForm>,
) -> impl Responder {
    let handoff = BrowserHandoff::new();
    let mut intake = IntakeForm::with_values(server_config.whatsapp_number.clone(), form);

    match intake_service::submit_intake(&mut intake, &handoff) {
        Ok(_) => {
            let Some(url) = handoff.take_url() else {
                log::error!("Intake form accepted but no link was handed off");
                return HttpResponse::InternalServerError().finish();
            };
            let mut context = base_context();
            context.insert("url", &url);

            render_template(&tera, "intake/sent.html", &context)
        }
        Err(ServiceError::Form(FormError::Validation(_))) => {
            let mut context = base_context();
            context.insert("page", &IntakePageData::from(&intake));

            render_template(&tera, "intake/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to submit intake form: {err}");
            HttpResponse::BadRequest().finish()
        }
    }
}
