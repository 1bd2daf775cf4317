//! Escenario de demostración
//!
//! Materias, docentes y estudiantes fijos del ciclo escolar de ejemplo. Sólo
//! se usan entidades definidas aquí mismo.

use crate::core::models::{Student, Subject};
use crate::core::teacher::{AssignmentOutcome, Teacher};
use std::rc::Rc;

/// Escenario completo
///
/// Las entidades viven en arreglos de tamaño fijo y `run` las desestructura
/// en nombres; una referencia a un docente o estudiante inexistente no compila.
pub struct Scenario {
    subjects: [Rc<Subject>; 6],
    teachers: [Teacher; 5],
    students: [Student; 8],
}

impl Scenario {
    /// Construye las entidades del escenario sin calificaciones
    pub fn demo() -> Self {
        let subjects = [
            Subject::new("Cálculo Integral", "CI001"),
            Subject::new("Programación Orientada a Objetos", "POO002"),
            Subject::new("Base de Datos", "BD003"),
            Subject::new("Desarrollo del Pensamiento", "DP004"),
            Subject::new("Proyecto Integrador", "PI005"),
            Subject::new("Tópicos de Calidad", "TC006"),
        ];

        let teachers = [
            Teacher::new("Bruno Luciano", "UTC001"),
            Teacher::new("Ing. Fidel Arias", "UTC002"),
            Teacher::new("Gilberto Garcia", "UTC003"),
            Teacher::new("Alatiel Gomez", "UTC004"),
            Teacher::new("Sindy Gasca", "UTC005"),
        ];

        let students = [
            Student::new("Luis Cruz", "UTC24007"),
            Student::new("Dori Mendez", "UTC240012"),
            Student::new("Gnesi Gomez", "UTC24005"),
            Student::new("Gadiel Muños", "UTC24008"),
            Student::new("Jassiel Perez", "UTC240014"),
            Student::new("Zuleima Martinez", "UTC240022"),
            Student::new("Joshua Miss", "UTC240018"),
            Student::new("Juan Jose Damian", "UTC240017"),
        ];

        Self {
            subjects,
            teachers,
            students,
        }
    }

    /// Ejecuta todas las asignaciones y devuelve sus resultados en orden
    pub fn run(&mut self) -> Vec<AssignmentOutcome> {
        let [calculus, oop, databases, thinking, capstone, quality] = &self.subjects;
        let [bruno, fidel, gilberto, alatiel, sindy] = &self.teachers;
        let [luis, dori, gnesi, ..] = &mut self.students;

        let outcomes = vec![
            bruno.assign_grade(luis, calculus, 8.5),
            bruno.assign_grade(luis, oop, 9.0),
            fidel.assign_grade(luis, databases, 7.2),
            bruno.assign_grade(luis, thinking, 6.0),
            fidel.assign_grade(luis, capstone, 9.5),
            bruno.assign_grade(luis, quality, 7.8),
            bruno.assign_grade(dori, calculus, 5.0),
            fidel.assign_grade(dori, oop, 8.0),
            gilberto.assign_grade(dori, databases, 6.5),
            alatiel.assign_grade(dori, thinking, 7.0),
            sindy.assign_grade(dori, capstone, 5.5),
            sindy.assign_grade(dori, quality, 6.0),
            bruno.assign_grade(gnesi, calculus, 9.0),
            fidel.assign_grade(gnesi, oop, 10.5),
            gilberto.assign_grade(gnesi, databases, 4.0),
        ];

        let rejected = outcomes.iter().filter(|o| !o.is_assigned()).count();
        tracing::info!(
            "escenario ejecutado: {} asignaciones, {} rechazadas",
            outcomes.len(),
            rejected
        );
        outcomes
    }

    pub fn subjects(&self) -> &[Rc<Subject>] {
        &self.subjects
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Estudiantes en el orden en que aparecen en el reporte
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}
