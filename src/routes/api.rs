use actix_web::{HttpResponse, Responder, post, web};

use crate::domain::deep_link::BrowserHandoff;
use crate::dto::intake::{IntakeAccepted, IntakeRejected};
use crate::forms::FormError;
use crate::forms::intake::{ClientDetailsForm, IntakeForm};
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, intake as intake_service};

#[post("/v1/intake")]
/// JSON variant of the intake submit; the caller opens the returned link.
pub async fn api_v1_intake(
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<ClientDetailsForm>,
) -> impl Responder {
    let handoff = BrowserHandoff::new();
    let mut intake = IntakeForm::with_values(server_config.whatsapp_number.clone(), form);

    match intake_service::submit_intake(&mut intake, &handoff) {
        Ok(link) => HttpResponse::Ok().json(IntakeAccepted::from(link)),
        Err(ServiceError::Form(FormError::Validation(errors))) => {
            HttpResponse::UnprocessableEntity().json(IntakeRejected { errors })
        }
        Err(err) => {
            log::error!("Failed to submit intake payload: {err}");
            HttpResponse::BadRequest().finish()
        }
    }
}
