//! services/dispatch_service.rs
//! Despacho de una solicitud: notificación al administrador y, solo si esa
//! sale bien, respuesta automática al solicitante.

use std::fmt;

use anyhow::Result;

use crate::{
    models::service_request_model::ServiceRequest, services::emailjs_client::EmailJsClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStep {
    AdminNotification,
    AutoReply,
}

impl DispatchStep {
    pub const ORDER: [DispatchStep; 2] = [DispatchStep::AdminNotification, DispatchStep::AutoReply];

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStep::AdminNotification => "admin_notification",
            DispatchStep::AutoReply => "auto_reply",
        }
    }
}

/// Falla del despacho. Hacia el usuario es un único error genérico; el paso
/// solo sirve para el log.
#[derive(Debug)]
pub struct DispatchFailure {
    pub step: DispatchStep,
    pub error: anyhow::Error,
}

impl fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Falló el paso '{}': {:#}", self.step.as_str(), self.error)
    }
}

impl std::error::Error for DispatchFailure {}

#[derive(Clone)]
pub struct DispatchService {
    emailjs: EmailJsClient,
}

impl DispatchService {
    pub fn new(emailjs: EmailJsClient) -> Self {
        Self { emailjs }
    }

    /// Ejecuta los dos pasos en orden y corta en el primero que falle.
    /// Sin reintentos.
    pub async fn dispatch(
        &self,
        request_id: &str,
        req: &ServiceRequest,
    ) -> std::result::Result<(), DispatchFailure> {
        log::info!(
            "(dispatch) Iniciando despacho request_id={} servicios={}",
            request_id,
            req.services.len()
        );

        for step in DispatchStep::ORDER {
            log::info!(
                "(dispatch) request_id={} -> paso '{}'...",
                request_id,
                step.as_str()
            );
            if let Err(error) = self.run_step(step, req).await {
                log::error!(
                    "(dispatch) request_id={} paso '{}' falló: {:?}",
                    request_id,
                    step.as_str(),
                    error
                );
                return Err(DispatchFailure { step, error });
            }
        }

        log::info!("(dispatch) request_id={} despachado con éxito.", request_id);
        Ok(())
    }

    async fn run_step(&self, step: DispatchStep, req: &ServiceRequest) -> Result<()> {
        let config = self.emailjs.config();
        match step {
            DispatchStep::AdminNotification => {
                self.emailjs
                    .send_form(&config.admin_template_id, &req.admin_form_fields())
                    .await
            }
            DispatchStep::AutoReply => {
                self.emailjs
                    .send(&config.autoreply_template_id, &req.autoreply_params())
                    .await
            }
        }
    }
}
