//! Docente
//!
//! El docente es el único actor que construye calificaciones y las anexa al
//! historial de un estudiante. Un valor fuera de rango se atrapa aquí mismo y
//! nunca sale de este módulo como error.

use crate::core::models::{Grade, GradeError, Student, Subject};
use std::rc::Rc;

/// Docente evaluador
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    /// Nombre con el que firma las calificaciones
    pub name: String,
    /// Número de empleado
    pub employee_id: String,
}

/// Resultado de un intento de asignación
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    /// La calificación quedó anexada al estudiante
    Assigned {
        student_name: String,
        subject_name: String,
        teacher_name: String,
        value: f64,
    },
    /// El valor fue rechazado; el estudiante no cambió
    Rejected {
        value: f64,
        error: GradeError,
    },
}

impl AssignmentOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignmentOutcome::Assigned { .. })
    }

    /// Mensaje para el usuario; el valor conserva su decimal ("9.0", no "9")
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for AssignmentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentOutcome::Assigned {
                student_name,
                subject_name,
                teacher_name,
                value,
            } => write!(
                f,
                "Calificación de {:?} asignada a {} en {} por {}.",
                value, student_name, subject_name, teacher_name
            ),
            AssignmentOutcome::Rejected { error, .. } => {
                write!(f, "Error al asignar calificación: {}", error)
            }
        }
    }
}

impl Teacher {
    /// Crea un docente
    pub fn new(name: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
        }
    }

    /// Asigna una calificación a un estudiante
    ///
    /// Valida el rango, firma la calificación con el nombre del docente y la
    /// anexa. Si la validación falla el historial del estudiante no se toca y
    /// el rechazo se devuelve como resultado, no como error.
    pub fn assign_grade(
        &self,
        student: &mut Student,
        subject: &Rc<Subject>,
        value: f64,
    ) -> AssignmentOutcome {
        match Grade::new(Rc::clone(subject), value, self.name.as_str()) {
            Ok(grade) => {
                student.add_grade(grade);
                tracing::debug!(
                    "{} asignó {} a {} en {}",
                    self.name,
                    value,
                    student.id,
                    subject.code
                );
                AssignmentOutcome::Assigned {
                    student_name: student.name.clone(),
                    subject_name: subject.name.clone(),
                    teacher_name: self.name.clone(),
                    value,
                }
            }
            Err(error) => {
                tracing::warn!(
                    "calificación rechazada: {} para {} en {} ({})",
                    value,
                    student.id,
                    subject.code,
                    error
                );
                AssignmentOutcome::Rejected { value, error }
            }
        }
    }
}
