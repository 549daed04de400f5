//! services/form_collector.rs
//! Arma un `ServiceRequest` a partir de los pares del formulario.
//!
//! El handler recibe el cuerpo como `web::Form<Vec<(String, String)>>`, que
//! conserva cada `services` repetido y el orden de envío.
//! No se valida nada: los atributos `required`/`type="email"` del HTML ya
//! bloquean el envío en el navegador. Un campo ausente queda vacío.

use crate::models::service_request_model::ServiceRequest;

pub const SERVICES_FIELD: &str = "services";

pub fn collect_service_request(pairs: Vec<(String, String)>) -> ServiceRequest {
    let mut req = ServiceRequest::default();
    for (key, value) in pairs {
        match key.as_str() {
            "user_name" => req.name = value,
            "user_email" => req.email = value,
            "whatsapp" => req.whatsapp = value,
            "message" => req.message = value,
            SERVICES_FIELD => req.services.push(value),
            other => log::debug!("(collect_service_request) Campo ignorado: '{}'", other),
        }
    }
    req
}
