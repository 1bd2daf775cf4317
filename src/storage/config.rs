//! Manejo del archivo de configuración

use crate::core::teacher::AssignmentOutcome;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuración de la aplicación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mostrar los mensajes de asignación exitosa (los rechazos siempre se muestran)
    pub announce_assignments: bool,
    /// Si está presente, también se escribe el reporte en JSON en esta ruta
    pub json_export_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            announce_assignments: true,
            json_export_path: None,
        }
    }
}

impl AppConfig {
    /// Indica si el mensaje de una asignación debe mostrarse al usuario
    pub fn should_announce(&self, outcome: &AssignmentOutcome) -> bool {
        !outcome.is_assigned() || self.announce_assignments
    }
}

/// Gestor de configuración
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Ruta por defecto dentro del directorio de configuración de la plataforma
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("mx", "utc", "calificaciones")
            .map(|d| d.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Carga la configuración; sin archivo se usan los valores por defecto
    pub fn load(&self) -> Result<AppConfig> {
        if self.config_path.exists() {
            let content = std::fs::read_to_string(&self.config_path)
                .with_context(|| format!("no se pudo leer {}", self.config_path.display()))?;
            let config = serde_json::from_str(&content).with_context(|| {
                format!("configuración inválida en {}", self.config_path.display())
            })?;
            Ok(config)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Restablece los valores por defecto
    pub fn reset(&self) -> Result<()> {
        self.save(&AppConfig::default())
    }
}
