//! Fixtures for exercising the tournament platform API in end-to-end tests.

pub mod organizations;
pub mod phases;
