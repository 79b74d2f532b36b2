// src/resources/enrollments.rs
//! Enrollments API: <https://canvas.instructure.com/doc/api/enrollments.html>

use crate::api::{ApiResponse, CanvasClient, Transport};
use crate::error::CanvasError;
use crate::types::ParamSet;
use std::fmt::{self, Display};

/// What an enrollment id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentScope {
    Course,
    #[default]
    Section,
}

impl EnrollmentScope {
    /// Collection segment of the path, e.g. `sections`.
    pub fn collection(&self) -> &'static str {
        match self {
            EnrollmentScope::Course => "courses",
            EnrollmentScope::Section => "sections",
        }
    }
}

impl fmt::Display for EnrollmentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

pub struct Enrollments<'a, T> {
    client: &'a CanvasClient<T>,
}

impl<'a, T: Transport> Enrollments<'a, T> {
    pub fn new(client: &'a CanvasClient<T>) -> Self {
        Self { client }
    }

    /// Enrolls a user in a course or section; fields go in `enrollment[...]`.
    pub fn create(
        &self,
        id: impl Display,
        scope: EnrollmentScope,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.post(&format!("{}/{}/enrollments", scope, id), params)
    }

    pub fn list(
        &self,
        id: impl Display,
        scope: EnrollmentScope,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("{}/{}/enrollments", scope, id), params)
    }

    /// Concludes an enrollment. `task` defaults to `conclude`; `delete`,
    /// `inactivate` and `deactivate` are the alternatives.
    pub fn delete(
        &self,
        course_id: impl Display,
        enrollment_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.delete(
            &format!("courses/{}/enrollments/{}", course_id, enrollment_id),
            params.with_default("task", "conclude"),
        )
    }
}
