// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory stand-in for the bridge.
//!
//! Tables live in a map per keyspace. Schema statements issued through
//! `execute_query` are recognised by prefix only: `DROP TABLE` removes a
//! table, honouring `IF EXISTS`, and `ALTER TABLE` checks that the table
//! exists. Every query, batch and token is recorded for later inspection.

use std::{
	collections::{BTreeMap, HashMap},
	sync::Arc,
};

use async_trait::async_trait;
use cqlbridge_client::{Bridge, BridgeError, BridgeFactory, Result};
use cqlbridge_proto::{Batch, CqlTable, CqlTableCreate, Query, Response, SchemaChange, response};
use cqlbridge_schema::SchemaError;
use parking_lot::Mutex;
use tonic::Status;

#[derive(Debug, Default)]
struct State {
	keyspaces: HashMap<String, BTreeMap<String, CqlTable>>,
	queries: Vec<Query>,
	batches: Vec<Batch>,
	tokens: Vec<String>,
	fail_next: Option<Status>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBridge {
	state: Arc<Mutex<State>>,
}

impl MemoryBridge {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_keyspace(self, keyspace: &str) -> Self {
		self.state.lock().keyspaces.entry(keyspace.to_string()).or_default();
		self
	}

	pub fn with_table(self, keyspace: &str, table: CqlTable) -> Self {
		self.state.lock().keyspaces.entry(keyspace.to_string()).or_default().insert(table.name.clone(), table);
		self
	}

	/// Makes the next call fail with `status`.
	pub fn fail_next(&self, status: Status) {
		self.state.lock().fail_next = Some(status);
	}

	pub fn table(&self, keyspace: &str, table: &str) -> Option<CqlTable> {
		self.state.lock().keyspaces.get(keyspace).and_then(|tables| tables.get(table)).cloned()
	}

	pub fn queries(&self) -> Vec<Query> {
		self.state.lock().queries.clone()
	}

	pub fn batches(&self) -> Vec<Batch> {
		self.state.lock().batches.clone()
	}

	pub fn tokens(&self) -> Vec<String> {
		self.state.lock().tokens.clone()
	}

	fn check_failure(state: &mut State) -> Result<()> {
		match state.fail_next.take() {
			Some(status) => Err(BridgeError::Status(status)),
			None => Ok(()),
		}
	}
}

fn schema_change() -> Response {
	Response {
		result: Some(response::Result::SchemaChange(SchemaChange::default())),
		warnings: Vec::new(),
	}
}

/// Splits `ks.table`, dropping identifier quotes.
fn qualified_name(name: &str) -> Option<(String, String)> {
	let (keyspace, table) = name.split_once('.')?;
	let unquote = |s: &str| s.trim().trim_matches('"').replace("\"\"", "\"");
	Some((unquote(keyspace), unquote(table)))
}

fn table_name_after(cql: &str, prefix: &str) -> Option<(bool, String, String)> {
	let rest = cql.strip_prefix(prefix)?;
	let (if_exists, rest) = match rest.strip_prefix("IF EXISTS ") {
		Some(rest) => (true, rest),
		None => (false, rest),
	};
	let name = rest.split_whitespace().next()?;
	let (keyspace, table) = qualified_name(name)?;
	Some((if_exists, keyspace, table))
}

#[async_trait]
impl Bridge for MemoryBridge {
	async fn execute_query(&self, query: Query) -> Result<Response> {
		let mut state = self.state.lock();
		state.queries.push(query.clone());
		Self::check_failure(&mut state)?;

		if let Some((if_exists, keyspace, table)) = table_name_after(&query.cql, "DROP TABLE ") {
			let removed = state.keyspaces.get_mut(&keyspace).and_then(|tables| tables.remove(&table));
			if removed.is_none() && !if_exists {
				return Err(Status::invalid_argument(format!("Table '{keyspace}.{table}' does not exist")).into());
			}
			return Ok(schema_change());
		}

		if let Some((_, keyspace, table)) = table_name_after(&query.cql, "ALTER TABLE ") {
			let exists = state.keyspaces.get(&keyspace).is_some_and(|tables| tables.contains_key(&table));
			if !exists {
				return Err(Status::invalid_argument(format!("Table '{keyspace}.{table}' does not exist")).into());
			}
			return Ok(schema_change());
		}

		Ok(Response::default())
	}

	async fn execute_batch(&self, batch: Batch) -> Result<Response> {
		let mut state = self.state.lock();
		state.batches.push(batch);
		Self::check_failure(&mut state)?;
		Ok(Response::default())
	}

	async fn find_table(&self, keyspace: &str, table: &str) -> Result<CqlTable> {
		let mut state = self.state.lock();
		Self::check_failure(&mut state)?;
		let tables = state.keyspaces.get(keyspace).ok_or_else(|| BridgeError::KeyspaceNotFound {
			keyspace: keyspace.to_string(),
		})?;
		tables.get(table).cloned().ok_or_else(|| BridgeError::TableNotFound {
			keyspace: keyspace.to_string(),
			table: table.to_string(),
		})
	}

	async fn find_all_tables(&self, keyspace: &str) -> Result<Vec<CqlTable>> {
		let mut state = self.state.lock();
		Self::check_failure(&mut state)?;
		let tables = state.keyspaces.get(keyspace).ok_or_else(|| BridgeError::KeyspaceNotFound {
			keyspace: keyspace.to_string(),
		})?;
		Ok(tables.values().cloned().collect())
	}

	async fn create_table(&self, request: CqlTableCreate) -> Result<()> {
		let mut state = self.state.lock();
		Self::check_failure(&mut state)?;
		let table = request.table.ok_or_else(|| SchemaError::validation("Missing table definition"))?;
		let Some(tables) = state.keyspaces.get_mut(&request.keyspace_name) else {
			return Err(BridgeError::KeyspaceNotFound {
				keyspace: request.keyspace_name,
			});
		};
		if tables.contains_key(&table.name) {
			if request.if_not_exists {
				return Ok(());
			}
			return Err(Status::already_exists(format!("Table '{}' already exists", table.name)).into());
		}
		tables.insert(table.name.clone(), table);
		Ok(())
	}
}

impl BridgeFactory for MemoryBridge {
	fn create(&self, token: &str) -> Result<Arc<dyn Bridge>> {
		self.state.lock().tokens.push(token.to_string());
		Ok(Arc::new(self.clone()))
	}
}
