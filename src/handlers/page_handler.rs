//! handlers/page_handler.rs
//! Página única: GET muestra el formulario, POST lo procesa y vuelve a
//! renderizar la página con el aviso correspondiente.

use actix_web::{http::StatusCode, web, HttpResponse};
use log::error;
use uuid::Uuid;

use crate::{
    models::page_model::{Notice, PageView},
    services::{
        dispatch_service::DispatchService, form_collector::collect_service_request,
        page_service::PageService,
    },
};

/// GET /
pub async fn index_endpoint(page_service: web::Data<PageService>) -> HttpResponse {
    render_page(&page_service, StatusCode::OK, &PageView::blank(None))
}

/// POST /
/// Éxito: confirmación y formulario vacío. Falla: aviso de error y el
/// formulario conserva lo que el usuario había escrito.
pub async fn submit_form_endpoint(
    form: web::Form<Vec<(String, String)>>,
    page_service: web::Data<PageService>,
    dispatch_service: web::Data<DispatchService>,
) -> HttpResponse {
    let req = collect_service_request(form.into_inner());

    let request_id = Uuid::new_v4().to_string();
    log::info!(
        "(submit_form_endpoint) Solicitud recibida request_id={} servicios='{}'",
        request_id,
        req.joined_services()
    );

    match dispatch_service.dispatch(&request_id, &req).await {
        Ok(()) => render_page(
            &page_service,
            StatusCode::OK,
            &PageView::blank(Some(Notice::success())),
        ),
        // El despachador ya dejó el detalle en el log.
        Err(_) => render_page(
            &page_service,
            StatusCode::BAD_GATEWAY,
            &PageView::retained(&req, Some(Notice::failure())),
        ),
    }
}

fn render_page(page_service: &PageService, status: StatusCode, view: &PageView) -> HttpResponse {
    match page_service.render(view) {
        Ok(html) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Error renderizando la página: {:?}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}
