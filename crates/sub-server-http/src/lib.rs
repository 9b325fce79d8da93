// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! REST table-management server.
//!
//! Translates the REST v2 schema endpoints into bridge calls. Every schema
//! endpoint forwards the caller's `X-Cassandra-Token` header to the bridge.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check (no token required)
//! - `GET /v2/schemas/keyspaces/{keyspace}/tables` - List tables
//! - `POST /v2/schemas/keyspaces/{keyspace}/tables` - Create a table
//! - `GET /v2/schemas/keyspaces/{keyspace}/tables/{table}` - Describe a table
//! - `PUT /v2/schemas/keyspaces/{keyspace}/tables/{table}` - Change the default TTL
//! - `DELETE /v2/schemas/keyspaces/{keyspace}/tables/{table}` - Drop a table

pub mod error;
pub mod factory;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod subsystem;

pub use error::{AppError, ErrorResponse};
pub use factory::{HttpConfig, HttpSubsystemFactory};
pub use handlers::{NameResponse, TOKEN_HEADER};
pub use routes::router;
pub use state::AppState;
pub use subsystem::HttpSubsystem;
