//! get-images - Lambda function returning the ImageMetadata table as JSON
//!
//! This library crate exposes the handler internals for integration testing.

pub mod config;
pub mod encode;
pub mod error;
pub mod handler;
pub mod response;
