//! Webhook layer for delivering messages to Fleep.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot delivery and response checking ([`FleepWebhook`], [`interpret`])

mod client;
mod error;
mod http;
mod sender;


pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{ACCEPTED_BODY, FleepWebhook, interpret};
