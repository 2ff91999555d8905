//! Module for the dashboard API.
//!
//! This module defines the public interface and structure for the summary
//! figures the console's landing page displays.

pub mod handlers;
pub mod routes;
