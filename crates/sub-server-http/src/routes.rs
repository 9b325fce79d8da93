// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

pub fn router(state: AppState, request_timeout: Duration) -> Router {
	let tables = Router::new()
		.route("/v2/schemas/keyspaces/{keyspace}/tables", get(handlers::list_tables).post(handlers::create_table))
		.route(
			"/v2/schemas/keyspaces/{keyspace}/tables/{table}",
			get(handlers::get_table).put(handlers::update_table).delete(handlers::delete_table),
		)
		.with_state(state);

	Router::new()
		.route("/health", get(handlers::health))
		.merge(tables)
		.layer(TimeoutLayer::new(request_timeout))
		.layer(TraceLayer::new_for_http())
}
