// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::any::Any;

use async_trait::async_trait;
use cqlbridge_sub_api::{HealthStatus, Result, Subsystem, SubsystemError};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::builder::{LogFormat, TracingBuilder};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global tracing subscriber on start.
///
/// The subscriber cannot be removed again, so shutdown only marks the
/// subsystem stopped.
pub struct TracingSubsystem {
	builder: TracingBuilder,
	installed: bool,
	running: bool,
}

impl TracingSubsystem {
	pub fn new(builder: TracingBuilder) -> Self {
		Self {
			builder,
			installed: false,
			running: false,
		}
	}

	pub fn builder(&self) -> &TracingBuilder {
		&self.builder
	}

	/// `RUST_LOG` wins over the configured level.
	fn filter(&self) -> Result<EnvFilter> {
		if let Ok(filter) = EnvFilter::try_from_default_env() {
			return Ok(filter);
		}
		let directives = self.builder.filter_directives();
		EnvFilter::try_new(&directives).map_err(|e| SubsystemError::Start {
			subsystem: "Tracing",
			reason: format!("invalid filter '{directives}': {e}"),
		})
	}

	fn console_layer(&self) -> BoxedLayer {
		let target = self.builder.target();
		match self.builder.format() {
			LogFormat::Pretty => fmt::layer().pretty().with_target(target).boxed(),
			LogFormat::Compact => fmt::layer().compact().with_target(target).boxed(),
			LogFormat::Json => fmt::layer().json().with_target(target).boxed(),
		}
	}
}

#[async_trait]
impl Subsystem for TracingSubsystem {
	fn name(&self) -> &'static str {
		"Tracing"
	}

	async fn start(&mut self) -> Result<()> {
		if !self.installed {
			let filter = self.filter()?;
			tracing_subscriber::registry().with(self.console_layer()).with(filter).try_init().map_err(|e| {
				SubsystemError::Start {
					subsystem: "Tracing",
					reason: e.to_string(),
				}
			})?;
			self.installed = true;
		}
		self.running = true;
		Ok(())
	}

	async fn shutdown(&mut self) -> Result<()> {
		self.running = false;
		Ok(())
	}

	fn is_running(&self) -> bool {
		self.running
	}

	fn health_status(&self) -> HealthStatus {
		if self.running {
			HealthStatus::Healthy
		} else {
			HealthStatus::Failed {
				description: "Not running".to_string(),
			}
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_level_rejected() {
		let subsystem = TracingBuilder::new().with_level("info,cqlbridge=loud").build();
		if std::env::var_os("RUST_LOG").is_none() {
			assert!(matches!(subsystem.filter(), Err(SubsystemError::Start { .. })));
		}
	}

	#[tokio::test]
	async fn test_start_installs_once() {
		let mut subsystem = TracingBuilder::new().with_format(LogFormat::Json).build();
		subsystem.start().await.unwrap();
		assert!(subsystem.is_running());

		// a second start does not try to install again
		subsystem.start().await.unwrap();
		tracing::info!("tracing installed");

		subsystem.shutdown().await.unwrap();
		assert!(!subsystem.is_running());
		assert!(subsystem.health_status().is_failed());
	}
}
