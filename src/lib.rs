//! Fleep notify: CI step delivering a message to a Fleep webhook.
//!
//! A library for reading the step inputs, resolving the Fleep payload
//! and delivering it with a single HTTP request.

pub mod config;
pub mod payload;
pub mod webhook;
