// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cqlbridge_proto::{Query, QueryParameters};

use crate::{cql, error::SchemaError, model::TableOptions};

/// Builds the query that changes a table's default TTL.
///
/// Only the TTL can change after creation. A clustering order in the options
/// is rejected even when a TTL is supplied as well.
pub fn alter_default_ttl(keyspace: &str, table: &str, options: &TableOptions) -> Result<Query, SchemaError> {
	if !options.clustering_expression.is_empty() {
		return Err(SchemaError::validation("Cannot update the clustering order of a table"));
	}

	let Some(ttl) = options.default_time_to_live else {
		return Err(SchemaError::validation("No update provided for defaultTTL"));
	};

	Ok(Query::new(cql::alter_table_default_ttl(keyspace, table, ttl)).with_parameters(QueryParameters::local_quorum()))
}
