// src/resources/courses.rs
//! Courses API: <https://canvas.instructure.com/doc/api/courses.html>

use crate::api::{ApiResponse, CanvasClient, Transport};
use crate::error::CanvasError;
use crate::types::ParamSet;
use std::fmt::Display;

/// Course operations over a shared client.
pub struct Courses<'a, T> {
    client: &'a CanvasClient<T>,
}

impl<'a, T: Transport> Courses<'a, T> {
    pub fn new(client: &'a CanvasClient<T>) -> Self {
        Self { client }
    }

    /// Creates a course under an account; fields go in `course[...]`.
    pub fn create(
        &self,
        account_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client
            .post(&format!("accounts/{}/courses", account_id), params)
    }

    pub fn get(&self, course_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("courses/{}", course_id), params)
    }

    pub fn edit(&self, course_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.put(&format!("courses/{}", course_id), params)
    }

    /// Deletes or concludes a course. `event` defaults to `conclude`; pass
    /// `event=delete` to remove it.
    pub fn delete(
        &self,
        course_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.delete(
            &format!("courses/{}", course_id),
            params.with_default("event", "conclude"),
        )
    }

    /// Courses a user is enrolled in.
    pub fn for_user(
        &self,
        user_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("users/{}/courses", user_id), params)
    }

    /// Users enrolled in a course.
    pub fn users(&self, course_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("courses/{}/users", course_id), params)
    }
}
