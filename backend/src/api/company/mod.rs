//! Module for the company inventory API.
//!
//! This module defines the public interface and structure for listing,
//! inspecting, and creating the companies that own physical locations.

pub mod handlers;
pub mod routes;
