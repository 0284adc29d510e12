//! Request extractors that reject with the API's JSON error body

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::extract::Query` rejecting with `AppError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// `axum::Json` rejecting with `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
