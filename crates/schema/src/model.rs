// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! REST-facing table model, serialized with the REST v2 field names.

use serde::{Deserialize, Serialize};

/// A table as returned by the schema endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
	pub name: String,
	pub keyspace: String,
	pub column_definitions: Vec<ColumnDefinition>,
	pub primary_key: PrimaryKey,
	pub table_options: TableOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
	pub name: String,
	/// CQL type, e.g. `text` or `map<text, int>`.
	pub type_definition: String,
	/// Only meaningful for columns outside the primary key.
	#[serde(rename = "static", default)]
	pub is_static: bool,
}

impl ColumnDefinition {
	pub fn new(name: impl Into<String>, type_definition: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			type_definition: type_definition.into(),
			is_static: false,
		}
	}

	pub fn new_static(name: impl Into<String>, type_definition: impl Into<String>) -> Self {
		Self {
			is_static: true,
			..Self::new(name, type_definition)
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKey {
	#[serde(default)]
	pub partition_key: Vec<String>,
	#[serde(default)]
	pub clustering_key: Vec<String>,
}

impl PrimaryKey {
	pub fn has_partition_key(&self, column: &str) -> bool {
		self.partition_key.iter().any(|c| c == column)
	}

	pub fn has_clustering_key(&self, column: &str) -> bool {
		self.clustering_key.iter().any(|c| c == column)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
	/// Default TTL in seconds. `None` when unknown; a table read back from the
	/// bridge never carries it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_time_to_live: Option<i32>,
	#[serde(default)]
	pub clustering_expression: Vec<ClusteringExpression>,
}

/// Clustering direction of one clustering key column.
///
/// `order` is kept as sent by the client; it is validated when the request is
/// translated for the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringExpression {
	pub column: String,
	pub order: String,
}

impl ClusteringExpression {
	pub const ASC: &'static str = "ASC";
	pub const DESC: &'static str = "DESC";

	pub fn ascending(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			order: Self::ASC.to_string(),
		}
	}

	pub fn descending(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			order: Self::DESC.to_string(),
		}
	}

	pub fn is_ascending(&self) -> bool {
		self.order.eq_ignore_ascii_case(Self::ASC)
	}

	pub fn is_descending(&self) -> bool {
		self.order.eq_ignore_ascii_case(Self::DESC)
	}
}

/// Body of a create (POST) or update (PUT) table request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAddRequest {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub if_not_exists: bool,
	#[serde(default)]
	pub column_definitions: Vec<ColumnDefinition>,
	#[serde(default)]
	pub primary_key: PrimaryKey,
	#[serde(default)]
	pub table_options: TableOptions,
}

/// Wrapping envelope used unless the client asks for the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestResponse<T> {
	pub data: T,
}

impl<T> RestResponse<T> {
	pub fn new(data: T) -> Self {
		Self {
			data,
		}
	}
}
