//! models/page_model.rs
//! Estructuras que alimentan la plantilla de la página.

use serde::Serialize;

use crate::models::service_request_model::{ServiceRequest, SERVICE_CATALOG};

pub const SUCCESS_NOTICE: &str = "Your request has been submitted!";
pub const FAILURE_NOTICE: &str = "Failed to send request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success() -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: SUCCESS_NOTICE.to_string(),
        }
    }

    pub fn failure() -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: FAILURE_NOTICE.to_string(),
        }
    }
}

/// Un checkbox del grupo `services`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOption {
    pub label: String,
    pub checked: bool,
}

/// Valores con los que se rellena el formulario al renderizar.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormState {
    pub user_name: String,
    pub user_email: String,
    pub whatsapp: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub notice: Option<Notice>,
    pub form: FormState,
    pub services: Vec<ServiceOption>,
}

impl PageView {
    /// Formulario vacío, todos los checkboxes desmarcados.
    pub fn blank(notice: Option<Notice>) -> Self {
        PageView {
            notice,
            form: FormState::default(),
            services: SERVICE_CATALOG
                .iter()
                .map(|label| ServiceOption {
                    label: label.to_string(),
                    checked: false,
                })
                .collect(),
        }
    }

    /// Formulario con lo que el usuario había enviado, para reintentar.
    pub fn retained(req: &ServiceRequest, notice: Option<Notice>) -> Self {
        PageView {
            notice,
            form: FormState {
                user_name: req.name.clone(),
                user_email: req.email.clone(),
                whatsapp: req.whatsapp.clone(),
                message: req.message.clone(),
            },
            services: SERVICE_CATALOG
                .iter()
                .map(|label| ServiceOption {
                    label: label.to_string(),
                    checked: req.is_service_selected(label),
                })
                .collect(),
        }
    }
}
