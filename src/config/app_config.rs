//! config/app_config.rs
//! Configuración de la aplicación: servidor HTTP y credenciales de EmailJS.
//!
//! Solo `main` lee el entorno; el resto de la app recibe estas estructuras ya
//! construidas.

use std::env;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

/// Credenciales e identificadores del proveedor de correo (EmailJS).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    /// Plantilla de la notificación al administrador.
    pub admin_template_id: String,
    /// Plantilla de la respuesta automática al solicitante.
    pub autoreply_template_id: String,
    /// Se envía como `user_id`.
    pub public_key: String,
    /// Se envía como `accessToken` cuando existe.
    pub private_key: Option<String>,
    pub api_base_url: String,
}

impl EmailJsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(EmailJsConfig {
            service_id: required_var("EMAILJS_SERVICE_ID")?,
            admin_template_id: required_var("EMAILJS_TEMPLATE_ID")?,
            autoreply_template_id: required_var("EMAILJS_AUTOREPLY_TEMPLATE_ID")?,
            public_key: required_var("EMAILJS_PUBLIC_KEY")?,
            private_key: optional_var("EMAILJS_PRIVATE_KEY"),
            api_base_url: optional_var("EMAILJS_API_URL")
                .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5022,
            static_dir: "./static".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = ServerConfig::default();
        let port = match optional_var("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow!("SERVER_PORT inválido '{}': {}", raw, e))?,
            None => defaults.port,
        };

        Ok(ServerConfig {
            host: optional_var("SERVER_HOST").unwrap_or(defaults.host),
            port,
            static_dir: optional_var("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub emailjs: EmailJsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            server: ServerConfig::from_env()?,
            emailjs: EmailJsConfig::from_env()?,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    optional_var(name).ok_or_else(|| anyhow!("No se definió {}", name))
}

/// Las variables vacías cuentan como no definidas.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
