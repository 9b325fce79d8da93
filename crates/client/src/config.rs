// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// Where the bridge lives and how long a single call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
	pub host: String,
	pub port: u16,
	/// Token for callers that use one fixed identity, such as the example
	/// client. The REST layer supplies a token per request instead.
	pub token: Option<String>,
	pub deadline: Duration,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			host: "localhost".to_string(),
			port: DEFAULT_PORT,
			token: None,
			deadline: DEFAULT_DEADLINE,
		}
	}
}

impl BridgeConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();
		self
	}

	pub fn port(mut self, port: u16) -> Self {
		self.port = port;
		self
	}

	pub fn token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}

	pub fn deadline(mut self, deadline: Duration) -> Self {
		self.deadline = deadline;
		self
	}

	pub fn endpoint(&self) -> String {
		format!("http://{}:{}", self.host, self.port)
	}
}
