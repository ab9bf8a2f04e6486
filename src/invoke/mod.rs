//! Invocation layer for posting messages to function endpoints.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Retrying dispatch ([`Dispatcher`])
//! - Structured failure reporting ([`FailurePayload`], [`DispatchError`])

mod client;
mod dispatcher;
mod error;
mod http;
mod payload;


pub use client::ReqwestClient;
pub use dispatcher::{Dispatcher, IsRetryable};
pub use error::{DispatchError, HttpError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use payload::{
    EMPTY_RESPONSE_MESSAGE, FAILURE_STATUS_MESSAGE, FailurePayload, NO_RESPONSE_STATUS,
};
