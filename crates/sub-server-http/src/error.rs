// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP error handling and response formatting.

use std::fmt;

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use cqlbridge_client::BridgeError;
use cqlbridge_schema::SchemaError;
use serde::{Deserialize, Serialize};
use tonic::Code;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Human-readable error message.
	pub description: String,
	/// HTTP status code, repeated in the body.
	pub code: u16,
}

impl ErrorResponse {
	pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
		Self {
			description: description.into(),
			code: status.as_u16(),
		}
	}
}

/// Application error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
	/// Missing or unusable auth token.
	Unauthorized(String),
	/// Invalid path parameters or request body.
	BadRequest(String),
	/// Request body could not be translated for the bridge.
	Schema(SchemaError),
	/// Bridge call failed.
	Bridge(BridgeError),
	Internal(String),
}

impl From<BridgeError> for AppError {
	fn from(e: BridgeError) -> Self {
		AppError::Bridge(e)
	}
}

impl From<SchemaError> for AppError {
	fn from(e: SchemaError) -> Self {
		AppError::Schema(e)
	}
}

impl fmt::Display for AppError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
			AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
			AppError::Schema(e) => write!(f, "Invalid table definition: {}", e),
			AppError::Bridge(e) => write!(f, "Bridge error: {}", e),
			AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
		}
	}
}

impl std::error::Error for AppError {}

fn status_for_code(code: Code) -> StatusCode {
	match code {
		Code::NotFound => StatusCode::NOT_FOUND,
		Code::InvalidArgument | Code::AlreadyExists => StatusCode::BAD_REQUEST,
		Code::Unauthenticated => StatusCode::UNAUTHORIZED,
		Code::PermissionDenied => StatusCode::FORBIDDEN,
		Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
		Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
		_ => StatusCode::INTERNAL_SERVER_ERROR,
	}
}

impl AppError {
	/// Status and client-facing description. Server-side failures are
	/// described generically.
	fn status_and_description(&self) -> (StatusCode, String) {
		match self {
			AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
			AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
			AppError::Schema(e) => (StatusCode::BAD_REQUEST, e.to_string()),
			AppError::Bridge(e) => match e {
				BridgeError::KeyspaceNotFound { .. } | BridgeError::TableNotFound { .. } => {
					(StatusCode::NOT_FOUND, e.to_string())
				}
				BridgeError::InvalidToken { .. } => (StatusCode::UNAUTHORIZED, e.to_string()),
				BridgeError::Schema(inner) => (StatusCode::BAD_REQUEST, inner.to_string()),
				BridgeError::Status(status) => {
					let code = status_for_code(status.code());
					if code.is_server_error() {
						(code, "Bridge call failed".to_string())
					} else {
						(code, status.message().to_string())
					}
				}
				BridgeError::Transport(_) => (StatusCode::BAD_GATEWAY, "Bridge unreachable".to_string()),
			},
			AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let (status, description) = self.status_and_description();
		if status.is_server_error() {
			tracing::error!("{}", self);
		} else {
			tracing::debug!("{}", self);
		}
		(status, Json(ErrorResponse::new(status, description))).into_response()
	}
}
