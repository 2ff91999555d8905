//! Module for the circuit inventory API.
//!
//! This module defines the public interface and structure for listing and
//! inspecting the carrier circuits tied to physical locations.

pub mod handlers;
pub mod routes;
