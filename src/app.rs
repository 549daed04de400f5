//! app.rs
use crate::handlers::{page_handler, service_request_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(page_handler::index_endpoint))
            .route(web::post().to(page_handler::submit_form_endpoint)),
    )
    .route(
        "/health",
        web::get().to(service_request_handler::health_endpoint),
    )
    .service(
        web::scope("/api")
            .route(
                "/service-requests",
                web::post().to(service_request_handler::submit_service_request_endpoint),
            )
            .route(
                "/services",
                web::get().to(service_request_handler::list_services_endpoint),
            ),
    );
}
