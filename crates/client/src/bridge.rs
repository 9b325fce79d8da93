// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use async_trait::async_trait;
use cqlbridge_proto::{Batch, CqlTable, CqlTableCreate, Query, Response};

use crate::Result;

/// Operations the REST layer issues against the bridge.
#[async_trait]
pub trait Bridge: Send + Sync {
	async fn execute_query(&self, query: Query) -> Result<Response>;

	async fn execute_batch(&self, batch: Batch) -> Result<Response>;

	/// Fails with `TableNotFound` or `KeyspaceNotFound` when either is absent.
	async fn find_table(&self, keyspace: &str, table: &str) -> Result<CqlTable>;

	async fn find_all_tables(&self, keyspace: &str) -> Result<Vec<CqlTable>>;

	async fn create_table(&self, request: CqlTableCreate) -> Result<()>;
}

/// Hands out a bridge acting on behalf of the given token.
pub trait BridgeFactory: Send + Sync {
	fn create(&self, token: &str) -> Result<Arc<dyn Bridge>>;
}
