#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_intake;
#[cfg(feature = "server")]
use crate::routes::intake::{show_intake_form, submit_intake_form};

pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

pub const BUSINESS_NAME: &str = "Shilaabo Car Hire";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving the intake form on {}:{}, sending to WhatsApp {}",
        bind_address.0,
        bind_address.1,
        server_config.whatsapp_number
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(web::scope("/api").service(api_v1_intake))
            .service(show_intake_form)
            .service(submit_intake_form)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
