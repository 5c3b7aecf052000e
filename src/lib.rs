//! Benefits Gateway - Protocol Conversion Service
//!
//! This crate translates GraphQL-style requests into REST calls against the
//! claims-processing service and maps REST responses back into
//! GraphQL-shaped payloads.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
