//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod astronauts;
pub mod health;
pub mod images;
pub mod planets;
