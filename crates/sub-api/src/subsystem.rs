// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::any::Any;

use async_trait::async_trait;

use crate::Result;

/// Health of a running subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
	Healthy,
	Degraded {
		description: String,
	},
	Failed {
		description: String,
	},
}

impl HealthStatus {
	pub fn is_healthy(&self) -> bool {
		matches!(self, HealthStatus::Healthy)
	}

	pub fn is_failed(&self) -> bool {
		matches!(self, HealthStatus::Failed { .. })
	}
}

/// A component with an explicit start/shutdown lifecycle.
///
/// `start` must be idempotent. `shutdown` on a subsystem that never started
/// is a no-op.
#[async_trait]
pub trait Subsystem: Send + Sync + Any {
	fn name(&self) -> &'static str;

	async fn start(&mut self) -> Result<()>;

	async fn shutdown(&mut self) -> Result<()>;

	fn is_running(&self) -> bool;

	fn health_status(&self) -> HealthStatus;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Builds a subsystem from its configuration.
pub trait SubsystemFactory: Send {
	fn create(self: Box<Self>) -> Result<Box<dyn Subsystem>>;
}
