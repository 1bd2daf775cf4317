//! Reporte final
//!
//! Recorre los estudiantes en el orden recibido, sin ordenar ni filtrar, y
//! produce un bloque por estudiante.

use crate::core::models::{Student, SubjectAverage};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Título del reporte
pub const REPORT_TITLE: &str = "--- REPORTE FINAL DE CALIFICACIONES ---";
/// Separador entre bloques
pub const SEPARATOR: &str = "---------------------------------------";

/// Estatus de aprobación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassStatus {
    Approved,
    NotApproved,
}

impl PassStatus {
    pub fn from_passing(passing: bool) -> Self {
        if passing {
            PassStatus::Approved
        } else {
            PassStatus::NotApproved
        }
    }
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassStatus::Approved => write!(f, "APROBADO"),
            PassStatus::NotApproved => write!(f, "NO APROBADO"),
        }
    }
}

/// Datos de un bloque del reporte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub id: String,
    pub average: f64,
    pub status: PassStatus,
    /// Ausente si el estudiante no tiene calificaciones
    pub lowest_subject: Option<SubjectAverage>,
}

impl StudentSummary {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            id: student.id.clone(),
            average: student.overall_average(),
            status: PassStatus::from_passing(student.is_passing()),
            lowest_subject: student.lowest_average_subject(),
        }
    }
}

/// Generador del reporte
#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Resúmenes en el mismo orden que la entrada
    pub fn summarize(&self, students: &[Student]) -> Vec<StudentSummary> {
        students.iter().map(StudentSummary::from_student).collect()
    }

    /// Texto completo: encabezado de dos líneas y un bloque por estudiante
    pub fn render(&self, students: &[Student]) -> String {
        let mut out = format!("{}\n{}\n", REPORT_TITLE, SEPARATOR);

        for summary in self.summarize(students) {
            out.push_str(&format!(
                "Nombre: {}, Matrícula: {}, Promedio: {:.2}, Estatus: {}\n",
                summary.name, summary.id, summary.average, summary.status
            ));
            if let Some(lowest) = &summary.lowest_subject {
                out.push_str(&format!(
                    "  Materia con promedio más bajo: {} ({:.2})\n",
                    lowest.subject_name, lowest.average
                ));
            }
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        tracing::info!("reporte generado para {} estudiantes", students.len());
        out
    }

    /// Resúmenes en JSON
    pub fn render_json(&self, students: &[Student]) -> Result<String> {
        let summaries = self.summarize(students);
        serde_json::to_string_pretty(&summaries).context("no se pudo serializar el reporte")
    }

    /// Escribe los resúmenes en JSON a un archivo
    pub fn write_json(&self, students: &[Student], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.render_json(students)?;
        std::fs::write(path, content)
            .with_context(|| format!("no se pudo escribir {}", path.display()))?;
        tracing::info!("reporte JSON escrito en {}", path.display());
        Ok(())
    }
}
