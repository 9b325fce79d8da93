// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use cqlbridge_client::{Bridge, BridgeFactory, Result};

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
	bridges: Arc<dyn BridgeFactory>,
}

impl AppState {
	pub fn new(bridges: impl BridgeFactory + 'static) -> Self {
		Self {
			bridges: Arc::new(bridges),
		}
	}

	/// A bridge acting on behalf of the request's token.
	pub fn bridge(&self, token: &str) -> Result<Arc<dyn Bridge>> {
		self.bridges.create(token)
	}
}
