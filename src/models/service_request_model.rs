//! models/service_request_model.rs
//! Solicitud de servicio armada a partir del formulario y los payloads que
//! derivan de ella.

use serde::{Deserialize, Serialize};

/// Catálogo fijo de servicios, en el orden en que se muestran.
pub const SERVICE_CATALOG: [&str; 10] = [
    "Income Tax",
    "Capital Gains Tax",
    "Dividend Tax",
    "GST (Goods and Services Tax)",
    "TDS (Tax Deducted at Source)",
    "TDS Return Filing",
    "Income Tax Return (ITR-3 or ITR-4)",
    "Advance Tax",
    "GST Return",
    "Professional Tax (some states)",
];

pub const SERVICES_SEPARATOR: &str = ", ";

/// Datos de un envío del formulario. Vive solo mientras dura el despacho.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(rename = "user_name")]
    pub name: String,
    #[serde(rename = "user_email")]
    pub email: String,
    pub whatsapp: String,
    /// En el orden en que llegaron del formulario.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub message: String,
}

impl ServiceRequest {
    /// Servicios unidos con ", " (vacío si no hay ninguno).
    pub fn joined_services(&self) -> String {
        self.services.join(SERVICES_SEPARATOR)
    }

    pub fn is_service_selected(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Campos crudos del formulario para la notificación al administrador.
    pub fn admin_form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("user_name".to_string(), self.name.clone()),
            ("user_email".to_string(), self.email.clone()),
            ("whatsapp".to_string(), self.whatsapp.clone()),
            ("services".to_string(), self.joined_services()),
            ("message".to_string(), self.message.clone()),
        ]
    }

    pub fn autoreply_params(&self) -> AutoReplyParams {
        AutoReplyParams {
            user_name: self.name.clone(),
            user_email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            services: self.joined_services(),
            message: self.message.clone(),
        }
    }
}

/// Mapeo explícito de campos para la plantilla de respuesta automática.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoReplyParams {
    pub user_name: String,
    pub user_email: String,
    pub whatsapp: String,
    pub services: String,
    pub message: String,
}

/// Respuesta del endpoint JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub request_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCatalogResponse {
    pub services: Vec<String>,
}

impl ServiceCatalogResponse {
    pub fn from_catalog() -> Self {
        ServiceCatalogResponse {
            services: SERVICE_CATALOG.iter().map(|s| s.to_string()).collect(),
        }
    }
}
