//! Almacenamiento local - sólo configuración

pub mod config;
