//! Service layer for business logic and orchestration.
//!
//! This module contains the services that sit between storage and the HTTP
//! layer: the availability matrix assembly and the session store.

pub mod matrix;

pub mod session;

pub use matrix::{AvailabilityMatrix, AvailabilityMatrixBuilder, MatrixCell, MatrixRow};
pub use session::SessionStore;
