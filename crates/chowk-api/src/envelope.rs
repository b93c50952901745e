//! Response envelopes.

use axum::http::StatusCode;
use axum::Json;
use chowk_commerce::search::Pagination;
use serde::Serialize;
use std::fmt::Display;

/// A paginated list response: `{ success, data, pagination }`.
#[derive(Debug, Serialize)]
pub struct ListEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ListEnvelope<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}

/// A counted list response without pagination: `{ success, data, count }`.
#[derive(Debug, Serialize)]
pub struct CountEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> CountEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// A single-item response: `{ success, data }`.
#[derive(Debug, Serialize)]
pub struct ItemEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ItemEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A combined-search response: a paginated list plus follow-up
/// suggestions derived from what was found.
#[derive(Debug, Serialize)]
pub struct SearchEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
    pub suggestions: Vec<String>,
}

impl<T> SearchEnvelope<T> {
    pub fn new(data: Vec<T>, pagination: Pagination, suggestions: Vec<String>) -> Self {
        Self {
            success: true,
            data,
            pagination,
            suggestions,
        }
    }
}

/// A failure response: `{ success: false, message, error? }`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handler error type: status code plus failure envelope.
pub type ApiError = (StatusCode, Json<ErrorEnvelope>);

/// The upstream catalog could not be queried. Distinct from an empty
/// success envelope so callers can render a retry affordance.
pub fn upstream_error(context: &str, e: impl Display) -> ApiError {
    tracing::error!(context, error = %e, "catalog source unavailable");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope {
            success: false,
            message: format!("Error fetching {context}"),
            error: Some(e.to_string()),
        }),
    )
}

/// Resource not found.
pub fn not_found(message: impl Into<String>) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope {
            success: false,
            message: message.into(),
            error: None,
        }),
    )
}

/// Request cannot be served without the given parameter.
pub fn missing_param(name: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorEnvelope {
            success: false,
            message: format!("Missing required parameter: {name}"),
            error: None,
        }),
    )
}
