// src/resources/mod.rs
//! Helpers for the Canvas resource families.
//!
//! Each helper borrows one [`CanvasClient`] and maps its operations onto a
//! verb and a path template; the client does everything else. Parameters
//! are passed explicitly per call.
//!
//! ```no_run
//! use canvas_api::{CanvasClient, ClientConfig, ParamSet};
//!
//! let client = CanvasClient::connect(&ClientConfig::from_env()?)?;
//! let course = client.courses().create(
//!     1,
//!     ParamSet::new().with_group("course", [("name", "New Test Course"), ("course_code", "NTC123")]),
//! )?;
//! # Ok::<(), canvas_api::CanvasError>(())
//! ```

mod courses;
mod enrollments;
mod sections;
mod users;

pub use courses::Courses;
pub use enrollments::{EnrollmentScope, Enrollments};
pub use sections::Sections;
pub use users::Users;

use crate::api::{CanvasClient, Transport};

impl<T: Transport> CanvasClient<T> {
    pub fn courses(&self) -> Courses<'_, T> {
        Courses::new(self)
    }

    pub fn sections(&self) -> Sections<'_, T> {
        Sections::new(self)
    }

    pub fn users(&self) -> Users<'_, T> {
        Users::new(self)
    }

    pub fn enrollments(&self) -> Enrollments<'_, T> {
        Enrollments::new(self)
    }
}
