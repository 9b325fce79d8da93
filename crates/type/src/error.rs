// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Failure to translate between a logical type name and its structured form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("Unrecognized CQL type '{name}'")]
	UnknownType {
		name: String,
	},

	#[error("Malformed type definition '{input}': {reason}")]
	Malformed {
		input: String,
		reason: String,
	},

	#[error("Type '{name}' takes {expected} type parameter(s), got {actual}")]
	ParameterCount {
		name: String,
		expected: &'static str,
		actual: usize,
	},

	#[error("Type '{name}' cannot be frozen, only collections and tuples can")]
	FrozenPrimitive {
		name: String,
	},

	#[error("Type specification is missing")]
	MissingSpec,

	#[error("Unsupported basic type code {code}")]
	UnsupportedBasic {
		code: i32,
	},

	#[error("Type nested too deeply, at most {limit} levels are allowed")]
	TooDeep {
		limit: usize,
	},
}

impl TypeError {
	pub fn code(&self) -> &'static str {
		match self {
			TypeError::UnknownType { .. } => "TYPE_001",
			TypeError::Malformed { .. } => "TYPE_002",
			TypeError::ParameterCount { .. } => "TYPE_003",
			TypeError::FrozenPrimitive { .. } => "TYPE_004",
			TypeError::MissingSpec => "TYPE_005",
			TypeError::UnsupportedBasic { .. } => "TYPE_006",
			TypeError::TooDeep { .. } => "TYPE_007",
		}
	}
}
