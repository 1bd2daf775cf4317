//! Modelo de datos central
//!
//! Materias, calificaciones y estudiantes. Las calificaciones se validan al
//! construirse y los estudiantes sólo crecen por anexión.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

/// Calificación mínima aceptada (inclusiva)
pub const MIN_GRADE: f64 = 0.0;
/// Calificación máxima aceptada (inclusiva)
pub const MAX_GRADE: f64 = 10.0;
/// Promedio general mínimo para aprobar (inclusivo)
pub const PASS_THRESHOLD: f64 = 6.0;

/// Error de validación al construir una calificación
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// El valor cae fuera de [0, 10] (o no es un número)
    #[error("La calificación debe estar en un rango de 0 a 10.")]
    OutOfRange { value: f64 },
}

/// Materia - identificada por su clave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Nombre para mostrar
    pub name: String,
    /// Clave única (ej. "CI001")
    pub code: String,
}

impl Subject {
    /// Crea una materia compartible entre calificaciones
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            code: code.into(),
        })
    }
}

/// Calificación - una evaluación de un estudiante en una materia
///
/// Inmutable una vez creada; los campos sólo se exponen por lectura.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    subject: Rc<Subject>,
    value: f64,
    date: NaiveDate,
    evaluator_name: String,
}

impl Grade {
    /// Crea una calificación con la fecha local de hoy
    pub fn new(
        subject: Rc<Subject>,
        value: f64,
        evaluator_name: impl Into<String>,
    ) -> Result<Self, GradeError> {
        Self::with_date(subject, value, evaluator_name, Local::now().date_naive())
    }

    /// Crea una calificación con una fecha explícita
    pub fn with_date(
        subject: Rc<Subject>,
        value: f64,
        evaluator_name: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, GradeError> {
        // NaN no pertenece al rango, así que también se rechaza aquí
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradeError::OutOfRange { value });
        }

        Ok(Self {
            subject,
            value,
            date,
            evaluator_name: evaluator_name.into(),
        })
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn evaluator_name(&self) -> &str {
        &self.evaluator_name
    }
}

/// Promedio de una materia dentro del historial de un estudiante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAverage {
    /// Nombre de la materia
    pub subject_name: String,
    /// Promedio de sus calificaciones
    pub average: f64,
}

/// Estudiante - dueño exclusivo de sus calificaciones
#[derive(Debug, Clone)]
pub struct Student {
    /// Nombre completo
    pub name: String,
    /// Matrícula única
    pub id: String,
    /// Calificaciones en orden de asignación
    grades: Vec<Grade>,
}

impl Student {
    /// Crea un estudiante sin calificaciones
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            grades: Vec::new(),
        }
    }

    /// Anexa una calificación al final del historial
    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Promedio general; 0.0 si no hay calificaciones
    pub fn overall_average(&self) -> f64 {
        mean(self.grades.iter().map(Grade::value))
    }

    /// Promedio de una materia por clave; 0.0 si no hay calificaciones de ella
    pub fn subject_average(&self, subject_code: &str) -> f64 {
        mean(
            self.grades
                .iter()
                .filter(|g| g.subject.code == subject_code)
                .map(Grade::value),
        )
    }

    /// Aprobado si el promedio general alcanza el umbral
    pub fn is_passing(&self) -> bool {
        self.overall_average() >= PASS_THRESHOLD
    }

    /// Materia con el promedio más bajo, agrupando por nombre de materia
    ///
    /// Ante empates gana la primera materia vista en orden de asignación.
    /// Devuelve `None` si el estudiante no tiene calificaciones.
    pub fn lowest_average_subject(&self) -> Option<SubjectAverage> {
        // (nombre, suma, cantidad) en orden de primera aparición
        let mut groups: Vec<(&str, f64, usize)> = Vec::new();
        for grade in &self.grades {
            let name = grade.subject.name.as_str();
            match groups.iter_mut().find(|(n, _, _)| *n == name) {
                Some((_, sum, count)) => {
                    *sum += grade.value;
                    *count += 1;
                }
                None => groups.push((name, grade.value, 1)),
            }
        }

        let mut lowest: Option<SubjectAverage> = None;
        for (name, sum, count) in groups {
            let average = sum / count as f64;
            let is_lower = match &lowest {
                Some(current) => average < current.average,
                None => true,
            };
            if is_lower {
                lowest = Some(SubjectAverage {
                    subject_name: name.to_string(),
                    average,
                });
            }
        }

        lowest
    }
}

/// Media aritmética con política explícita de colección vacía
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn student_with(grades: &[(&Rc<Subject>, f64)]) -> Student {
        let mut student = Student::new("Ana Torres", "UTC24001");
        for (subject, value) in grades {
            let grade =
                Grade::with_date((*subject).clone(), *value, "Docente", fixed_date()).unwrap();
            student.add_grade(grade);
        }
        student
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_grade_accepts_inclusive_bounds() {
        let subject = Subject::new("Cálculo Integral", "CI001");
        for value in [0.0, 0.1, 5.0, 6.0, 9.99, 10.0] {
            let grade = Grade::new(Rc::clone(&subject), value, "Bruno Luciano").unwrap();
            assert_eq!(grade.value(), value);
            assert_eq!(grade.evaluator_name(), "Bruno Luciano");
            assert_eq!(grade.subject().code, "CI001");
        }
    }

    #[test]
    fn test_grade_rejects_out_of_range() {
        let subject = Subject::new("Cálculo Integral", "CI001");
        for value in [-0.01, -5.0, 10.01, 10.5, f64::NAN, f64::INFINITY] {
            let result = Grade::new(Rc::clone(&subject), value, "Bruno Luciano");
            assert!(matches!(result, Err(GradeError::OutOfRange { .. })));
        }
    }

    #[test]
    fn test_grade_error_message_states_range() {
        let subject = Subject::new("Base de Datos", "BD003");
        let err = Grade::new(subject, 11.0, "Gilberto Garcia").unwrap_err();
        assert_eq!(
            err.to_string(),
            "La calificación debe estar en un rango de 0 a 10."
        );
    }

    #[test]
    fn test_grade_keeps_explicit_date() {
        let subject = Subject::new("Base de Datos", "BD003");
        let grade = Grade::with_date(subject, 7.0, "Gilberto Garcia", fixed_date()).unwrap();
        assert_eq!(grade.date(), fixed_date());
    }

    #[test]
    fn test_empty_student_aggregates() {
        let student = Student::new("Joshua Miss", "UTC240018");
        assert_eq!(student.overall_average(), 0.0);
        assert_eq!(student.subject_average("CI001"), 0.0);
        assert!(!student.is_passing());
        assert!(student.lowest_average_subject().is_none());
    }

    #[test]
    fn test_overall_average_is_order_independent() {
        let a = Subject::new("A", "A1");
        let b = Subject::new("B", "B1");
        let forward = student_with(&[(&a, 8.0), (&b, 5.5), (&a, 9.0)]);
        let backward = student_with(&[(&a, 9.0), (&b, 5.5), (&a, 8.0)]);

        assert!(approx_eq(forward.overall_average(), 22.5 / 3.0));
        assert!(approx_eq(forward.overall_average(), backward.overall_average()));
    }

    #[test]
    fn test_subject_average_filters_by_code() {
        let calculus = Subject::new("Cálculo Integral", "CI001");
        let programming = Subject::new("Programación Orientada a Objetos", "POO002");
        let student = student_with(&[(&calculus, 8.5), (&programming, 9.0)]);

        assert!(approx_eq(student.subject_average("CI001"), 8.5));
        assert!(approx_eq(student.subject_average("POO002"), 9.0));
        assert_eq!(student.subject_average("BD003"), 0.0);
    }

    #[test]
    fn test_pass_threshold_is_inclusive() {
        let subject = Subject::new("A", "A1");
        assert!(student_with(&[(&subject, 6.0)]).is_passing());
        assert!(student_with(&[(&subject, 10.0)]).is_passing());
        assert!(!student_with(&[(&subject, 5.99)]).is_passing());
        assert!(!student_with(&[(&subject, 0.0)]).is_passing());
    }

    #[test]
    fn test_lowest_average_subject() {
        let a = Subject::new("A", "A1");
        let b = Subject::new("B", "B1");
        let c = Subject::new("C", "C1");
        let student = student_with(&[(&a, 8.0), (&b, 5.0), (&a, 9.0), (&c, 7.0), (&b, 5.0)]);

        let lowest = student.lowest_average_subject().unwrap();
        assert_eq!(lowest.subject_name, "B");
        assert!(approx_eq(lowest.average, 5.0));
    }

    #[test]
    fn test_lowest_average_tie_keeps_first_seen() {
        let a = Subject::new("A", "A1");
        let b = Subject::new("B", "B1");
        let c = Subject::new("C", "C1");
        let student = student_with(&[(&c, 9.0), (&b, 6.0), (&a, 6.0), (&b, 6.0)]);

        let lowest = student.lowest_average_subject().unwrap();
        assert_eq!(lowest.subject_name, "B");
    }

    #[test]
    fn test_lowest_average_groups_by_name() {
        // Dos claves distintas con el mismo nombre cuentan como una sola materia
        let first = Subject::new("Proyecto Integrador", "PI005");
        let second = Subject::new("Proyecto Integrador", "PI105");
        let other = Subject::new("Base de Datos", "BD003");
        let student = student_with(&[(&first, 4.0), (&other, 6.0), (&second, 9.0)]);

        let lowest = student.lowest_average_subject().unwrap();
        assert_eq!(lowest.subject_name, "Base de Datos");
        assert!(approx_eq(lowest.average, 6.0));
    }

    #[test]
    fn test_grades_keep_insertion_order() {
        let a = Subject::new("A", "A1");
        let b = Subject::new("B", "B1");
        let student = student_with(&[(&b, 3.0), (&a, 4.0)]);

        let values: Vec<f64> = student.grades().iter().map(Grade::value).collect();
        assert_eq!(values, vec![3.0, 4.0]);
        assert_eq!(student.grade_count(), 2);
    }
}
