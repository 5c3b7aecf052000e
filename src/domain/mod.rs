//! Domain layer containing the protocol conversion logic.
//!
//! # Module Organization
//!
//! - `convert` - Mapping tables, value transforms, operation routing, and
//!   GraphQL operation extraction

pub mod convert;
