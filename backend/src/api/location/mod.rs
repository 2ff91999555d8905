//! Module for the location inventory API.
//!
//! This module defines the public interface and structure for listing,
//! inspecting, creating, and editing the physical locations that circuits
//! terminate at.

pub mod handlers;
pub mod routes;
