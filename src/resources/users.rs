// src/resources/users.rs
//! Users API: <https://canvas.instructure.com/doc/api/users.html>

use crate::api::{ApiResponse, CanvasClient, Transport};
use crate::error::CanvasError;
use crate::types::ParamSet;
use std::fmt::Display;

pub struct Users<'a, T> {
    client: &'a CanvasClient<T>,
}

impl<'a, T: Transport> Users<'a, T> {
    pub fn new(client: &'a CanvasClient<T>) -> Self {
        Self { client }
    }

    /// Creates a user under an account; fields go in `user[...]` and
    /// `pseudonym[...]`.
    pub fn create(
        &self,
        account_id: impl Display,
        params: ParamSet,
    ) -> Result<ApiResponse, CanvasError> {
        self.client
            .post(&format!("accounts/{}/users", account_id), params)
    }

    pub fn get(&self, user_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.get(&format!("users/{}", user_id), params)
    }

    pub fn edit(&self, user_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client.put(&format!("users/{}", user_id), params)
    }

    /// Users of an account, optionally narrowed with `search_term`.
    pub fn list(&self, account_id: impl Display, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.client
            .get(&format!("accounts/{}/users", account_id), params)
    }
}
