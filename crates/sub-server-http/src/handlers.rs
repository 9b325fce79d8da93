// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP endpoint handlers for table management.
//!
//! - `GET /health`
//! - `GET|POST /v2/schemas/keyspaces/{keyspace}/tables`
//! - `GET|PUT|DELETE /v2/schemas/keyspaces/{keyspace}/tables/{table}`

use std::sync::Arc;

use axum::{
	Json,
	extract::{Path, Query, State},
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
};
use cqlbridge_client::{Bridge, BridgeError};
use cqlbridge_proto::{CqlTable, CqlTableCreate};
use cqlbridge_schema::{RestResponse, Table, TableAddRequest, alter_default_ttl, cql, to_bridge_definition, to_rest_table};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub const TOKEN_HEADER: &str = "x-cassandra-token";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
}

/// Body of successful create and update calls.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameResponse {
	pub name: String,
}

/// `?raw=true` returns the payload without the `data` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct RawParam {
	#[serde(default)]
	pub raw: bool,
}

/// Health check endpoint. Does not require a token.
pub async fn health() -> impl IntoResponse {
	(
		StatusCode::OK,
		Json(HealthResponse {
			status: "ok",
		}),
	)
}

pub async fn list_tables(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(keyspace): Path<String>,
	Query(params): Query<RawParam>,
) -> Result<Response, AppError> {
	require_keyspace(&keyspace)?;
	let bridge = bridge(&state, &headers)?;

	let tables = bridge
		.find_all_tables(&keyspace)
		.await?
		.iter()
		.map(|table| rest_table(table, &keyspace))
		.collect::<Result<Vec<_>, _>>()?;

	Ok(payload(tables, params.raw))
}

/// Fetches one table. A missing table is a 404 here, unlike in update.
pub async fn get_table(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path((keyspace, table)): Path<(String, String)>,
	Query(params): Query<RawParam>,
) -> Result<Response, AppError> {
	require_keyspace_and_table(&keyspace, &table)?;
	let bridge = bridge(&state, &headers)?;

	let definition = bridge.find_table(&keyspace, &table).await?;
	Ok(payload(rest_table(&definition, &keyspace)?, params.raw))
}

pub async fn create_table(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(keyspace): Path<String>,
	Json(request): Json<TableAddRequest>,
) -> Result<Response, AppError> {
	require_keyspace_and_table(&keyspace, &request.name)?;
	let bridge = bridge(&state, &headers)?;

	let table = to_bridge_definition(&request)?;
	debug!(keyspace = %keyspace, table = %request.name, "creating table");
	bridge
		.create_table(CqlTableCreate {
			keyspace_name: keyspace,
			table: Some(table),
			if_not_exists: request.if_not_exists,
		})
		.await?;

	Ok((
		StatusCode::CREATED,
		Json(NameResponse {
			name: request.name,
		}),
	)
		.into_response())
}

/// Changes the default TTL of an existing table. Nothing else about a table
/// can be updated.
pub async fn update_table(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path((keyspace, table)): Path<(String, String)>,
	Json(request): Json<TableAddRequest>,
) -> Result<Response, AppError> {
	require_keyspace_and_table(&keyspace, &table)?;
	let bridge = bridge(&state, &headers)?;

	load_table(bridge.as_ref(), &keyspace, &table).await?;
	let query = alter_default_ttl(&keyspace, &table, &request.table_options)?;
	debug!(keyspace = %keyspace, table = %table, "altering table");
	bridge.execute_query(query).await?;

	Ok((
		StatusCode::OK,
		Json(NameResponse {
			name: table,
		}),
	)
		.into_response())
}

/// Drops a table. Dropping a table that does not exist succeeds.
pub async fn delete_table(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path((keyspace, table)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
	require_keyspace_and_table(&keyspace, &table)?;
	let bridge = bridge(&state, &headers)?;

	debug!(keyspace = %keyspace, table = %table, "dropping table");
	bridge.execute_query(cqlbridge_proto::Query::new(cql::drop_table(&keyspace, &table, true))).await?;
	Ok(StatusCode::NO_CONTENT)
}

fn bridge(state: &AppState, headers: &HeaderMap) -> Result<Arc<dyn Bridge>, AppError> {
	let token = headers
		.get(TOKEN_HEADER)
		.ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?
		.to_str()
		.map_err(|_| AppError::Unauthorized("Malformed token".to_string()))?;
	Ok(state.bridge(token)?)
}

/// Loads a table that the request needs to exist. A missing table or
/// keyspace is the caller's mistake, so it is reported as a bad request.
async fn load_table(bridge: &dyn Bridge, keyspace: &str, table: &str) -> Result<CqlTable, AppError> {
	bridge.find_table(keyspace, table).await.map_err(|e| match e {
		BridgeError::KeyspaceNotFound { .. } | BridgeError::TableNotFound { .. } => AppError::BadRequest(e.to_string()),
		e => AppError::Bridge(e),
	})
}

/// A definition the bridge sent back that cannot be rendered is a server
/// side fault.
fn rest_table(table: &CqlTable, keyspace: &str) -> Result<Table, AppError> {
	to_rest_table(table, keyspace).map_err(|e| AppError::Internal(format!("table '{}': {}", table.name, e)))
}

fn payload<T: Serialize>(data: T, raw: bool) -> Response {
	if raw {
		Json(data).into_response()
	} else {
		Json(RestResponse::new(data)).into_response()
	}
}

fn require_keyspace(keyspace: &str) -> Result<(), AppError> {
	if keyspace.trim().is_empty() {
		return Err(AppError::BadRequest("keyspaceName must be provided".to_string()));
	}
	Ok(())
}

fn require_keyspace_and_table(keyspace: &str, table: &str) -> Result<(), AppError> {
	require_keyspace(keyspace)?;
	if table.trim().is_empty() {
		return Err(AppError::BadRequest("table name must be provided".to_string()));
	}
	Ok(())
}
