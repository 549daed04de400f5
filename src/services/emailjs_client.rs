//! services/emailjs_client.rs
//! Cliente HTTP para la API REST de EmailJS.

use anyhow::{anyhow, Context, Result};
use reqwest::{multipart, Client, Response};
use serde::Serialize;

use crate::config::app_config::EmailJsConfig;

const SEND_PATH: &str = "/api/v1.0/email/send";
const SEND_FORM_PATH: &str = "/api/v1.0/email/send-form";

#[derive(Serialize)]
struct SendPayload<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Clone)]
pub struct EmailJsClient {
    config: EmailJsConfig,
    http_client: Client,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// Envía los campos crudos de un formulario contra una plantilla
    /// (equivalente a `sendForm`): multipart/form-data.
    pub async fn send_form(&self, template_id: &str, fields: &[(String, String)]) -> Result<()> {
        let url = self.endpoint(SEND_FORM_PATH);
        log::debug!(
            "(send_form) POST {} template_id={} campos={}",
            url,
            template_id,
            fields.len()
        );

        let mut form = multipart::Form::new()
            .text("service_id", self.config.service_id.clone())
            .text("template_id", template_id.to_string())
            .text("user_id", self.config.public_key.clone());
        if let Some(token) = &self.config.private_key {
            form = form.text("accessToken", token.clone());
        }
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }

        let resp = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("(send_form) Fallo al hacer POST a EmailJS")?;

        check_response(resp, "send_form").await
    }

    /// Envía un mapeo explícito de parámetros contra una plantilla
    /// (equivalente a `send`): JSON.
    pub async fn send<P: Serialize>(&self, template_id: &str, params: &P) -> Result<()> {
        let url = self.endpoint(SEND_PATH);
        log::debug!("(send) POST {} template_id={}", url, template_id);

        let payload = SendPayload {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            template_params: params,
            access_token: self.config.private_key.as_deref(),
        };

        let resp = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("(send) Fallo al hacer POST a EmailJS")?;

        check_response(resp, "send").await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }
}

/// Cualquier respuesta no 2xx es un rechazo del proveedor.
async fn check_response(resp: Response, op: &str) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        log::debug!("({}) EmailJS respondió {}", op, status);
        return Ok(());
    }

    let body_txt = resp.text().await.unwrap_or_default();
    log::debug!(
        "({}) La respuesta NO es exitosa. status={} body_txt='{}'",
        op,
        status,
        body_txt
    );
    Err(anyhow!("EmailJS rechazó la petición ({}): {}", status, body_txt))
}
