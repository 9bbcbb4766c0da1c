//! Domain models.

pub mod patient;
