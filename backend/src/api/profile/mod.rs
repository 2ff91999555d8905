//! Module for the operator profile API.
//!
//! This module defines the public interface and structure for reading and
//! editing the caller's own profile and, for admins, managing every
//! operator's role.

pub mod handlers;
pub mod routes;
