use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::{
    models::{
        page_model::{FAILURE_NOTICE, SUCCESS_NOTICE},
        service_request_model::{ServiceCatalogResponse, ServiceRequest, SubmissionResponse},
    },
    services::dispatch_service::DispatchService,
};

/// POST /api/service-requests
pub async fn submit_service_request_endpoint(
    body: web::Json<ServiceRequest>,
    dispatch_service: web::Data<DispatchService>,
) -> HttpResponse {
    let req = body.into_inner();
    let request_id = Uuid::new_v4().to_string();

    match dispatch_service.dispatch(&request_id, &req).await {
        Ok(()) => HttpResponse::Ok().json(SubmissionResponse {
            success: true,
            request_id,
            message: SUCCESS_NOTICE.to_string(),
        }),
        // El detalle de la falla ya quedó en el log del despachador.
        Err(_) => HttpResponse::BadGateway().json(SubmissionResponse {
            success: false,
            request_id,
            message: FAILURE_NOTICE.to_string(),
        }),
    }
}

/// GET /api/services
pub async fn list_services_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(ServiceCatalogResponse::from_catalog())
}

/// GET /health
pub async fn health_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
