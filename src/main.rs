//! Sistema de calificaciones
//!
//! Ejecuta el escenario de demostración: los docentes asignan calificaciones,
//! los rechazos se informan y al final se imprime el reporte por estudiante.

pub mod core;
pub mod storage;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::report::ReportGenerator;
use crate::core::scenario::Scenario;
use crate::storage::config::ConfigManager;

fn main() -> Result<()> {
    // Inicializar el registro
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("iniciando sistema de calificaciones");

    let config_manager = ConfigManager::new(ConfigManager::default_path());
    let config = config_manager.load()?;
    tracing::info!("configuración cargada desde {}", config_manager.path().display());

    let mut scenario = Scenario::demo();
    for outcome in scenario.run() {
        if config.should_announce(&outcome) {
            println!("{}", outcome);
        }
    }

    let generator = ReportGenerator::new();
    println!();
    print!("{}", generator.render(scenario.students()));

    if let Some(path) = &config.json_export_path {
        generator.write_json(scenario.students(), path)?;
    }

    Ok(())
}
