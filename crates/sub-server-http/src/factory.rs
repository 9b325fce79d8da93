// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use cqlbridge_sub_api::{Result, Subsystem, SubsystemFactory};

use crate::{state::AppState, subsystem::HttpSubsystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
	/// Address and port to bind to, e.g. `0.0.0.0:8082`.
	pub bind_addr: String,
	pub request_timeout: Duration,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			bind_addr: "0.0.0.0:8082".to_string(),
			request_timeout: Duration::from_secs(30),
		}
	}
}

impl HttpConfig {
	pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
		self.bind_addr = addr.into();
		self
	}

	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}
}

pub struct HttpSubsystemFactory {
	config: HttpConfig,
	state: AppState,
}

impl HttpSubsystemFactory {
	pub fn new(config: HttpConfig, state: AppState) -> Self {
		Self {
			config,
			state,
		}
	}
}

impl SubsystemFactory for HttpSubsystemFactory {
	fn create(self: Box<Self>) -> Result<Box<dyn Subsystem>> {
		Ok(Box::new(HttpSubsystem::new(self.config, self.state)))
	}
}
