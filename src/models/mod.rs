//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod page_model;
pub mod service_request_model;
