// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlbridge_type::TypeError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	/// Bad or missing input.
	#[error("{message}")]
	Validation {
		message: String,
	},

	#[error("Invalid type for column '{column}': {source}")]
	Type {
		column: String,
		source: TypeError,
	},
}

impl SchemaError {
	pub fn validation(message: impl Into<String>) -> Self {
		SchemaError::Validation {
			message: message.into(),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			SchemaError::Validation { .. } => "SCHEMA_001",
			SchemaError::Type { .. } => "SCHEMA_002",
		}
	}
}
