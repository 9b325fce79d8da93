// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Translation between the REST table model and the bridge table definition.

use std::collections::HashMap;

use cqlbridge_proto::{ColumnOrderBy, ColumnSpec, CqlTable};
use cqlbridge_type::{logical_name_from_type_spec, type_spec_from_logical_name};

use crate::{
	error::SchemaError,
	model::{ClusteringExpression, ColumnDefinition, PrimaryKey, Table, TableAddRequest, TableOptions},
};

/// The bridge column group a column definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	PartitionKey,
	ClusteringKey,
	Static,
	Regular,
}

/// Classifies a column. Checked in order: partition key, clustering key,
/// static flag. Anything else is a regular column, including columns the
/// primary key does not know about.
pub fn classify(column: &ColumnDefinition, primary_key: &PrimaryKey) -> ColumnKind {
	if primary_key.has_partition_key(&column.name) {
		ColumnKind::PartitionKey
	} else if primary_key.has_clustering_key(&column.name) {
		ColumnKind::ClusteringKey
	} else if column.is_static {
		ColumnKind::Static
	} else {
		ColumnKind::Regular
	}
}

/// Builds the bridge table definition for a create request.
///
/// Partition key columns keep the order of the column definitions, so the
/// caller must list them in key component order. Clustering expressions may
/// only name clustering key columns; keys without one are ascending.
pub fn to_bridge_definition(request: &TableAddRequest) -> Result<CqlTable, SchemaError> {
	let classified = request
		.column_definitions
		.iter()
		.map(|definition| Ok((classify(definition, &request.primary_key), column_spec(definition)?)))
		.collect::<Result<Vec<_>, SchemaError>>()?;

	let of_kind = |kind: ColumnKind| -> Vec<ColumnSpec> {
		classified.iter().filter(|(k, _)| *k == kind).map(|(_, column)| column.clone()).collect()
	};

	let mut clustering_orders = request
		.table_options
		.clustering_expression
		.iter()
		.map(|expr| {
			if !request.primary_key.has_clustering_key(&expr.column) {
				return Err(SchemaError::validation(format!(
					"Clustering expression column '{}' is not a clustering key",
					expr.column
				)));
			}
			Ok((expr.column.clone(), column_order(expr)? as i32))
		})
		.collect::<Result<HashMap<_, _>, SchemaError>>()?;
	for column in &request.primary_key.clustering_key {
		clustering_orders.entry(column.clone()).or_insert(ColumnOrderBy::Asc as i32);
	}

	Ok(CqlTable {
		name: request.name.clone(),
		partition_key_columns: of_kind(ColumnKind::PartitionKey),
		clustering_key_columns: of_kind(ColumnKind::ClusteringKey),
		static_columns: of_kind(ColumnKind::Static),
		columns: of_kind(ColumnKind::Regular),
		clustering_orders,
	})
}

/// Builds the REST view of a bridge table definition.
///
/// The default TTL is left unset: the bridge's schema reply does not carry
/// it. Clustering expressions come out in map iteration order.
pub fn to_rest_table(table: &CqlTable, keyspace: &str) -> Result<Table, SchemaError> {
	let groups = [
		(&table.partition_key_columns, false),
		(&table.clustering_key_columns, false),
		(&table.static_columns, true),
		(&table.columns, false),
	];

	let column_definitions = groups
		.iter()
		.flat_map(|(columns, is_static)| columns.iter().map(move |column| column_definition(column, *is_static)))
		.collect::<Result<Vec<_>, SchemaError>>()?;

	let primary_key = PrimaryKey {
		partition_key: table.partition_key_columns.iter().map(|c| c.name.clone()).collect(),
		clustering_key: table.clustering_key_columns.iter().map(|c| c.name.clone()).collect(),
	};

	let clustering_expression = table
		.clustering_orders
		.iter()
		.filter_map(|(column, order)| match ColumnOrderBy::try_from(*order) {
			Ok(ColumnOrderBy::Asc) => Some(ClusteringExpression::ascending(column)),
			Ok(ColumnOrderBy::Desc) => Some(ClusteringExpression::descending(column)),
			Err(_) => None,
		})
		.collect();

	Ok(Table {
		name: table.name.clone(),
		keyspace: keyspace.to_string(),
		column_definitions,
		primary_key,
		table_options: TableOptions {
			default_time_to_live: None,
			clustering_expression,
		},
	})
}

fn column_spec(definition: &ColumnDefinition) -> Result<ColumnSpec, SchemaError> {
	let spec = type_spec_from_logical_name(&definition.type_definition).map_err(|source| SchemaError::Type {
		column: definition.name.clone(),
		source,
	})?;
	Ok(ColumnSpec::new(&definition.name, spec))
}

fn column_definition(column: &ColumnSpec, is_static: bool) -> Result<ColumnDefinition, SchemaError> {
	let type_error = |source| SchemaError::Type {
		column: column.name.clone(),
		source,
	};
	let spec = column.r#type.as_ref().ok_or(type_error(cqlbridge_type::TypeError::MissingSpec))?;
	let type_definition = logical_name_from_type_spec(spec, true).map_err(type_error)?;
	Ok(ColumnDefinition {
		name: column.name.clone(),
		type_definition,
		is_static,
	})
}

fn column_order(expr: &ClusteringExpression) -> Result<ColumnOrderBy, SchemaError> {
	if expr.is_ascending() {
		Ok(ColumnOrderBy::Asc)
	} else if expr.is_descending() {
		Ok(ColumnOrderBy::Desc)
	} else {
		Err(SchemaError::validation(format!("Unrecognized ordering value '{}'", expr.order)))
	}
}

#[cfg(test)]
mod tests {
	use cqlbridge_proto::{
		TypeSpec,
		type_spec::{Basic, List, Spec},
	};
	use cqlbridge_type::TypeError;

	use super::*;

	fn primary_key(partition: &[&str], clustering: &[&str]) -> PrimaryKey {
		PrimaryKey {
			partition_key: partition.iter().map(|s| s.to_string()).collect(),
			clustering_key: clustering.iter().map(|s| s.to_string()).collect(),
		}
	}

	fn request(columns: Vec<ColumnDefinition>, pk: PrimaryKey, clustering: Vec<ClusteringExpression>) -> TableAddRequest {
		TableAddRequest {
			name: "test".to_string(),
			if_not_exists: false,
			column_definitions: columns,
			primary_key: pk,
			table_options: TableOptions {
				default_time_to_live: Some(3600),
				clustering_expression: clustering,
			},
		}
	}

	fn names(columns: &[ColumnSpec]) -> Vec<&str> {
		columns.iter().map(|c| c.name.as_str()).collect()
	}

	#[test]
	fn test_classify_partition_key() {
		let pk = primary_key(&["k"], &["v"]);
		assert_eq!(classify(&ColumnDefinition::new("k", "text"), &pk), ColumnKind::PartitionKey);
	}

	#[test]
	fn test_classify_clustering_key() {
		let pk = primary_key(&["k"], &["v"]);
		assert_eq!(classify(&ColumnDefinition::new("v", "int"), &pk), ColumnKind::ClusteringKey);
	}

	#[test]
	fn test_classify_static() {
		let pk = primary_key(&["k"], &["v"]);
		assert_eq!(classify(&ColumnDefinition::new_static("s", "int"), &pk), ColumnKind::Static);
	}

	#[test]
	fn test_classify_regular() {
		let pk = primary_key(&["k"], &["v"]);
		assert_eq!(classify(&ColumnDefinition::new("r", "int"), &pk), ColumnKind::Regular);
	}

	#[test]
	fn test_classify_key_wins_over_static_flag() {
		let pk = primary_key(&["k"], &["v"]);
		assert_eq!(classify(&ColumnDefinition::new_static("k", "text"), &pk), ColumnKind::PartitionKey);
		assert_eq!(classify(&ColumnDefinition::new_static("v", "int"), &pk), ColumnKind::ClusteringKey);
	}

	#[test]
	fn test_classify_unknown_defaults_to_regular() {
		assert_eq!(classify(&ColumnDefinition::new("x", "int"), &PrimaryKey::default()), ColumnKind::Regular);
	}

	#[test]
	fn test_example_table() {
		let req = request(
			vec![ColumnDefinition::new("k", "text"), ColumnDefinition::new("v", "int")],
			primary_key(&["k"], &["v"]),
			vec![],
		);
		let table = to_bridge_definition(&req).unwrap();

		assert_eq!(table.name, "test");
		assert_eq!(table.partition_key_columns, vec![ColumnSpec::new("k", TypeSpec::basic(Basic::Text))]);
		assert_eq!(table.clustering_key_columns, vec![ColumnSpec::new("v", TypeSpec::basic(Basic::Int))]);
		assert!(table.columns.is_empty());
		assert!(table.static_columns.is_empty());
		assert_eq!(table.clustering_orders.len(), 1);
		assert_eq!(table.clustering_order("v"), Some(ColumnOrderBy::Asc));

		let rest = to_rest_table(&table, "ks").unwrap();
		assert_eq!(rest.name, "test");
		assert_eq!(rest.keyspace, "ks");
		assert_eq!(rest.column_definitions, req.column_definitions);
		assert_eq!(rest.primary_key, req.primary_key);
	}

	#[test]
	fn test_all_four_groups_round_trip() {
		let req = request(
			vec![
				ColumnDefinition::new("p2", "uuid"),
				ColumnDefinition::new("c1", "timestamp"),
				ColumnDefinition::new("p1", "text"),
				ColumnDefinition::new_static("s", "frozen<list<int>>"),
				ColumnDefinition::new("r", "map<text, int>"),
				ColumnDefinition::new("c2", "int"),
			],
			primary_key(&["p1", "p2"], &["c1", "c2"]),
			vec![ClusteringExpression::descending("c1"), ClusteringExpression::ascending("c2")],
		);
		let table = to_bridge_definition(&req).unwrap();

		assert_eq!(names(&table.partition_key_columns), vec!["p2", "p1"]);
		assert_eq!(names(&table.clustering_key_columns), vec!["c1", "c2"]);
		assert_eq!(names(&table.static_columns), vec!["s"]);
		assert_eq!(names(&table.columns), vec!["r"]);

		let rest = to_rest_table(&table, "ks").unwrap();

		let mut expected = req.column_definitions.clone();
		let mut actual = rest.column_definitions.clone();
		expected.sort_by(|a, b| a.name.cmp(&b.name));
		actual.sort_by(|a, b| a.name.cmp(&b.name));
		assert_eq!(actual, expected);

		let mut partition = rest.primary_key.partition_key.clone();
		partition.sort();
		assert_eq!(partition, vec!["p1", "p2"]);
		assert_eq!(rest.primary_key.clustering_key, vec!["c1", "c2"]);
	}

	#[test]
	fn test_rest_column_order_follows_groups() {
		let req = request(
			vec![
				ColumnDefinition::new("r", "int"),
				ColumnDefinition::new_static("s", "int"),
				ColumnDefinition::new("v", "int"),
				ColumnDefinition::new("k", "text"),
			],
			primary_key(&["k"], &["v"]),
			vec![],
		);
		let rest = to_rest_table(&to_bridge_definition(&req).unwrap(), "ks").unwrap();
		let order: Vec<&str> = rest.column_definitions.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(order, vec!["k", "v", "s", "r"]);
	}

	#[test]
	fn test_clustering_directions_round_trip() {
		let req = request(
			vec![
				ColumnDefinition::new("k", "text"),
				ColumnDefinition::new("a", "int"),
				ColumnDefinition::new("b", "int"),
				ColumnDefinition::new("c", "int"),
			],
			primary_key(&["k"], &["a", "b", "c"]),
			vec![
				ClusteringExpression::ascending("a"),
				ClusteringExpression::descending("b"),
				ClusteringExpression {
					column: "c".to_string(),
					order: "desc".to_string(),
				},
			],
		);
		let table = to_bridge_definition(&req).unwrap();
		assert_eq!(table.clustering_order("a"), Some(ColumnOrderBy::Asc));
		assert_eq!(table.clustering_order("b"), Some(ColumnOrderBy::Desc));
		assert_eq!(table.clustering_order("c"), Some(ColumnOrderBy::Desc));

		let rest = to_rest_table(&table, "ks").unwrap();
		let mut expressions = rest.table_options.clustering_expression.clone();
		expressions.sort_by(|x, y| x.column.cmp(&y.column));
		assert_eq!(
			expressions,
			vec![
				ClusteringExpression::ascending("a"),
				ClusteringExpression::descending("b"),
				ClusteringExpression::descending("c"),
			]
		);
	}

	#[test]
	fn test_unrecognized_ordering_fails() {
		let req = request(
			vec![ColumnDefinition::new("k", "text"), ColumnDefinition::new("v", "int")],
			primary_key(&["k"], &["v"]),
			vec![ClusteringExpression {
				column: "v".to_string(),
				order: "sideways".to_string(),
			}],
		);
		let err = to_bridge_definition(&req).unwrap_err();
		assert_eq!(err, SchemaError::validation("Unrecognized ordering value 'sideways'"));
		assert_eq!(err.code(), "SCHEMA_001");
	}

	#[test]
	fn test_clustering_expression_on_non_clustering_column_fails() {
		let columns = vec![
			ColumnDefinition::new("k", "text"),
			ColumnDefinition::new("v", "int"),
			ColumnDefinition::new("r", "int"),
		];

		let without_clustering_keys =
			request(columns.clone(), primary_key(&["k"], &[]), vec![ClusteringExpression::descending("r")]);
		let err = to_bridge_definition(&without_clustering_keys).unwrap_err();
		assert_eq!(err, SchemaError::validation("Clustering expression column 'r' is not a clustering key"));

		let with_clustering_keys = request(
			columns,
			primary_key(&["k"], &["v"]),
			vec![ClusteringExpression::descending("v"), ClusteringExpression::ascending("r")],
		);
		let err = to_bridge_definition(&with_clustering_keys).unwrap_err();
		assert_eq!(err, SchemaError::validation("Clustering expression column 'r' is not a clustering key"));
	}

	#[test]
	fn test_missing_clustering_orders_default_to_ascending() {
		let req = request(
			vec![ColumnDefinition::new("k", "text"), ColumnDefinition::new("a", "int"), ColumnDefinition::new("b", "int")],
			primary_key(&["k"], &["a", "b"]),
			vec![ClusteringExpression::descending("b")],
		);
		let table = to_bridge_definition(&req).unwrap();
		let mut keys: Vec<&String> = table.clustering_orders.keys().collect();
		keys.sort();
		assert_eq!(keys, vec!["a", "b"]);
		assert_eq!(table.clustering_order("a"), Some(ColumnOrderBy::Asc));
		assert_eq!(table.clustering_order("b"), Some(ColumnOrderBy::Desc));
	}

	#[test]
	fn test_invalid_column_type_fails() {
		let req = request(vec![ColumnDefinition::new("k", "txt")], primary_key(&["k"], &[]), vec![]);
		let err = to_bridge_definition(&req).unwrap_err();
		let SchemaError::Type { column, source } = err else {
			panic!("expected type error");
		};
		assert_eq!(column, "k");
		assert!(matches!(source, TypeError::UnknownType { .. }));
	}

	#[test]
	fn test_ttl_is_not_restored() {
		let req = request(vec![ColumnDefinition::new("k", "text")], primary_key(&["k"], &[]), vec![]);
		let rest = to_rest_table(&to_bridge_definition(&req).unwrap(), "ks").unwrap();
		assert_eq!(rest.table_options.default_time_to_live, None);
	}

	#[test]
	fn test_rest_table_renders_frozen() {
		let table = CqlTable {
			name: "t".to_string(),
			partition_key_columns: vec![ColumnSpec::new("k", TypeSpec::basic(Basic::Varchar))],
			columns: vec![ColumnSpec::new(
				"l",
				TypeSpec {
					spec: Some(Spec::List(Box::new(List {
						element: Some(Box::new(TypeSpec::basic(Basic::Int))),
						frozen: true,
					}))),
				},
			)],
			..Default::default()
		};
		let rest = to_rest_table(&table, "ks").unwrap();
		assert_eq!(rest.column_definitions[0].type_definition, "text");
		assert_eq!(rest.column_definitions[1].type_definition, "frozen<list<int>>");
	}

	#[test]
	fn test_rest_table_with_missing_type() {
		let table = CqlTable {
			name: "t".to_string(),
			columns: vec![ColumnSpec {
				r#type: None,
				name: "broken".to_string(),
			}],
			..Default::default()
		};
		let err = to_rest_table(&table, "ks").unwrap_err();
		assert!(matches!(err, SchemaError::Type { ref column, source: TypeError::MissingSpec } if column == "broken"));
	}

	#[test]
	fn test_unknown_bridge_order_is_skipped() {
		let mut table = CqlTable {
			name: "t".to_string(),
			..Default::default()
		};
		table.clustering_orders.insert("v".to_string(), 7);
		let rest = to_rest_table(&table, "ks").unwrap();
		assert!(rest.table_options.clustering_expression.is_empty());
	}
}
