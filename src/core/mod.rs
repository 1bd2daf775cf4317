//! Núcleo - modelo de datos y lógica de calificación

pub mod models;
pub mod report;
pub mod scenario;
pub mod teacher;
