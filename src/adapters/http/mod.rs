//! HTTP adapter layer.

pub mod convert;
