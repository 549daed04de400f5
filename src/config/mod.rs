//! config/mod.rs
//! Configuración cargada una sola vez al arrancar.

pub mod app_config;
