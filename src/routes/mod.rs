//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::BUSINESS_NAME;

pub mod api;
pub mod intake;

/// Context entries every page needs.
pub fn base_context() -> Context {
    let mut context = Context::new();
    context.insert("business_name", BUSINESS_NAME);
    context
}

/// Renders `template` or logs the failure and answers 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
