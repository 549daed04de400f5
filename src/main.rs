use actix_files::Files;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::dispatch_service::DispatchService;
use crate::services::emailjs_client::EmailJsClient;
use crate::services::page_service::PageService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Configuración inválida: {:#}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ));
        }
    };

    let page_service = match PageService::new() {
        Ok(svc) => svc,
        Err(e) => {
            log::error!("No se pudo inicializar PageService: {:#}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    // Las credenciales viajan explícitas hasta el despachador.
    log::info!(
        "EmailJS en {} (service_id={})",
        config.emailjs.api_base_url,
        config.emailjs.service_id
    );
    let dispatch_service = DispatchService::new(EmailJsClient::new(config.emailjs.clone()));

    let server = config.server.clone();
    log::info!("Levantando servidor en {}:{}", server.host, server.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(page_service.clone()))
            .app_data(web::Data::new(dispatch_service.clone()))
            .configure(app::init_app)
            .service(Files::new("/static", &server.static_dir))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
