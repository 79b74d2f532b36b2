// src/resources/sections.rs
//! Sections API: <https://canvas.instructure.com/doc/api/sections.html>

use crate::api::{ApiResponse, CanvasClient, Transport};
use crate::error::CanvasError;
use crate::types::ParamSet;
use std::fmt::Display;

pub struct Sections<'a, T> {
    client: &'a CanvasClient<T>,
}

impl<'a, T: Transport> Sections<'a, T> {
    pub fn new(client: &'a CanvasClient<T>) -> Self {
        Self { client }
    }

    /// Creates a section in a course; fields go in `course_section[...]`.
    pub fn create(
        &self,
        course_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client
            .post(&format!("courses/{}/sections", course_id), params)
    }

    pub fn get(&self, section_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("sections/{}", section_id), params)
    }

    pub fn edit(&self, section_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.put(&format!("sections/{}", section_id), params)
    }

    pub fn delete(
        &self,
        section_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client.delete(&format!("sections/{}", section_id), params)
    }

    pub fn for_course(
        &self,
        course_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client
            .get(&format!("courses/{}/sections", course_id), params)
    }
}
