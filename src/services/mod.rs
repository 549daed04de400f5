//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod dispatch_service;
pub mod emailjs_client;
pub mod form_collector;
pub mod page_service;
