//! Extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's stock `Json`, `Query` and `Path` extractors reject with plain-text
//! responses; these wrappers route the rejection through `AppError` so every
//! failure uses the `{"error": ...}` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed or mistyped bodies become 400 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string. Rejections become 400 JSON responses.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters. An id that does not parse is treated as an unknown
/// resource and becomes a 404 response.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
