// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlbridge_schema::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
	#[error("Keyspace '{keyspace}' not found")]
	KeyspaceNotFound {
		keyspace: String,
	},

	#[error("Table '{table}' not found in keyspace '{keyspace}'")]
	TableNotFound {
		keyspace: String,
		table: String,
	},

	#[error("Bridge call failed with {}: {}", .0.code(), .0.message())]
	Status(#[from] tonic::Status),

	#[error("Bridge transport failure: {0}")]
	Transport(#[from] tonic::transport::Error),

	#[error("Invalid auth token: {reason}")]
	InvalidToken {
		reason: String,
	},

	#[error(transparent)]
	Schema(#[from] SchemaError),
}

impl BridgeError {
	pub fn code(&self) -> &'static str {
		match self {
			BridgeError::KeyspaceNotFound { .. } => "BRIDGE_001",
			BridgeError::TableNotFound { .. } => "BRIDGE_002",
			BridgeError::Status(_) => "BRIDGE_003",
			BridgeError::Transport(_) => "BRIDGE_004",
			BridgeError::InvalidToken { .. } => "BRIDGE_005",
			BridgeError::Schema(_) => "BRIDGE_006",
		}
	}

	pub fn is_not_found(&self) -> bool {
		match self {
			BridgeError::KeyspaceNotFound { .. } | BridgeError::TableNotFound { .. } => true,
			BridgeError::Status(status) => status.code() == tonic::Code::NotFound,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		let err = BridgeError::TableNotFound {
			keyspace: "ks".to_string(),
			table: "t".to_string(),
		};
		assert_eq!(err.to_string(), "Table 't' not found in keyspace 'ks'");
		assert_eq!(err.code(), "BRIDGE_002");
	}

	#[test]
	fn test_not_found_status() {
		assert!(BridgeError::from(tonic::Status::not_found("nope")).is_not_found());
		assert!(!BridgeError::from(tonic::Status::invalid_argument("bad")).is_not_found());
	}
}
