//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between different parts of the application,
//! such as aggregating inventory data for the dashboard.

pub mod data_aggregator;
