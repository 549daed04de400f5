//! tests/mod.rs
//! Pruebas del crate. EmailJS se simula con `httpmock`.

mod dispatch_tests;

use crate::config::app_config::EmailJsConfig;

pub const ADMIN_TEMPLATE: &str = "template_admin";
pub const AUTOREPLY_TEMPLATE: &str = "template_autoreply";

pub const SEND_PATH: &str = "/api/v1.0/email/send";
pub const SEND_FORM_PATH: &str = "/api/v1.0/email/send-form";

/// Config apuntando al servidor simulado.
pub fn test_emailjs_config(base_url: String) -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_test".to_string(),
        admin_template_id: ADMIN_TEMPLATE.to_string(),
        autoreply_template_id: AUTOREPLY_TEMPLATE.to_string(),
        public_key: "public_key_test".to_string(),
        private_key: None,
        api_base_url: base_url,
    }
}

/// Pares del cuerpo urlencoded, tal como los entrega `web::Form`.
pub fn form_pairs(body: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(body).unwrap()
}

/// El caso de Asha Rao, tal cual lo enviaría el navegador.
pub fn asha_form_body() -> String {
    let pairs = [
        ("user_name", "Asha Rao"),
        ("user_email", "asha@example.com"),
        ("whatsapp", "+91 9876543210"),
        ("services", "GST (Goods and Services Tax)"),
        ("services", "Advance Tax"),
        ("message", "Need quarterly filing help"),
    ];
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
