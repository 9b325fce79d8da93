// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP server subsystem: startup, health and graceful shutdown of the REST
//! server.

use std::{
	any::Any,
	net::SocketAddr,
	sync::{
		Arc, RwLock,
		atomic::{AtomicBool, Ordering},
	},
	time::Duration,
};

use async_trait::async_trait;
use cqlbridge_sub_api::{HealthStatus, Result, Subsystem, SubsystemError};
use tokio::{net::TcpListener, sync::oneshot};

use crate::{factory::HttpConfig, routes::router, state::AppState};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpSubsystem {
	config: HttpConfig,
	/// Actual bound address (available after start).
	actual_addr: RwLock<Option<SocketAddr>>,
	state: AppState,
	running: Arc<AtomicBool>,
	shutdown_tx: Option<oneshot::Sender<()>>,
	shutdown_complete_rx: Option<oneshot::Receiver<()>>,
}

impl HttpSubsystem {
	pub fn new(config: HttpConfig, state: AppState) -> Self {
		Self {
			config,
			actual_addr: RwLock::new(None),
			state,
			running: Arc::new(AtomicBool::new(false)),
			shutdown_tx: None,
			shutdown_complete_rx: None,
		}
	}

	pub fn bind_addr(&self) -> &str {
		&self.config.bind_addr
	}

	/// Get the actual bound address (available after start).
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.actual_addr.read().ok().and_then(|addr| *addr)
	}

	pub fn port(&self) -> Option<u16> {
		self.local_addr().map(|a| a.port())
	}
}

#[async_trait]
impl Subsystem for HttpSubsystem {
	fn name(&self) -> &'static str {
		"Http"
	}

	async fn start(&mut self) -> Result<()> {
		if self.shutdown_tx.is_some() {
			return Ok(());
		}

		let addr = self.config.bind_addr.clone();
		let listener = TcpListener::bind(&addr).await.map_err(|source| SubsystemError::Bind {
			addr: addr.clone(),
			source,
		})?;
		let actual_addr = listener.local_addr().map_err(SubsystemError::AddressUnavailable)?;
		if let Ok(mut slot) = self.actual_addr.write() {
			*slot = Some(actual_addr);
		}
		tracing::info!("HTTP server bound to {}", actual_addr);

		let (shutdown_tx, shutdown_rx) = oneshot::channel();
		let (complete_tx, complete_rx) = oneshot::channel();

		let app = router(self.state.clone(), self.config.request_timeout);
		let running = self.running.clone();
		running.store(true, Ordering::SeqCst);

		tokio::spawn(async move {
			let server = axum::serve(listener, app).with_graceful_shutdown(async {
				shutdown_rx.await.ok();
				tracing::info!("HTTP server received shutdown signal");
			});

			if let Err(e) = server.await {
				tracing::error!("HTTP server error: {}", e);
			}

			running.store(false, Ordering::SeqCst);
			let _ = complete_tx.send(());
			tracing::info!("HTTP server stopped");
		});

		self.shutdown_tx = Some(shutdown_tx);
		self.shutdown_complete_rx = Some(complete_rx);
		Ok(())
	}

	async fn shutdown(&mut self) -> Result<()> {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(());
		}

		if let Some(rx) = self.shutdown_complete_rx.take() {
			match tokio::time::timeout(SHUTDOWN_TIMEOUT, rx).await {
				Ok(_) => tracing::debug!("HTTP server shutdown completed"),
				Err(_) => tracing::warn!("HTTP server shutdown timed out"),
			}
		}
		Ok(())
	}

	fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	fn health_status(&self) -> HealthStatus {
		if self.running.load(Ordering::SeqCst) {
			HealthStatus::Healthy
		} else if self.shutdown_tx.is_some() {
			HealthStatus::Degraded {
				description: "Server task exited".to_string(),
			}
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
	use cqlbridge_sub_api::SubsystemFactory;
	use cqlbridge_testing::{MemoryBridge, free_local_socket, wait_for};

	use super::*;
	use crate::factory::HttpSubsystemFactory;

	#[tokio::test]
	async fn test_serves_until_shutdown() {
		let config = HttpConfig::default().bind_addr("127.0.0.1:0");
		let mut http = HttpSubsystem::new(config, AppState::new(MemoryBridge::new()));
		assert!(http.health_status().is_failed());

		http.start().await.unwrap();
		assert!(http.is_running());
		assert!(http.health_status().is_healthy());

		let url = format!("http://127.0.0.1:{}/health", http.port().unwrap());
		let response = reqwest::get(&url).await.unwrap();
		assert_eq!(response.status(), reqwest::StatusCode::OK);

		http.shutdown().await.unwrap();
		assert!(!http.is_running());
	}

	#[tokio::test]
	async fn test_start_is_idempotent() {
		let config = HttpConfig::default().bind_addr("127.0.0.1:0");
		let mut http = HttpSubsystem::new(config, AppState::new(MemoryBridge::new()));
		http.start().await.unwrap();
		let port = http.port();
		http.start().await.unwrap();
		assert_eq!(http.port(), port);
		http.shutdown().await.unwrap();
	}

	#[tokio::test]
	async fn test_bind_failure() {
		let addr = free_local_socket().unwrap();
		let _taken = std::net::TcpListener::bind(addr).unwrap();
		let mut http = HttpSubsystem::new(
			HttpConfig::default().bind_addr(addr.to_string()),
			AppState::new(MemoryBridge::new()),
		);
		let err = http.start().await.unwrap_err();
		assert!(matches!(err, SubsystemError::Bind { .. }));
	}

	#[tokio::test]
	async fn test_factory_builds_http_subsystem() {
		let factory = HttpSubsystemFactory::new(
			HttpConfig::default().bind_addr("127.0.0.1:0"),
			AppState::new(MemoryBridge::new()),
		);
		let mut subsystem = Box::new(factory).create().unwrap();
		assert_eq!(subsystem.name(), "Http");

		subsystem.start().await.unwrap();
		let http = subsystem.as_any().downcast_ref::<HttpSubsystem>().unwrap();
		assert!(http.local_addr().is_some());

		subsystem.shutdown().await.unwrap();
		wait_for(|| !subsystem.is_running(), "server should stop").await;
	}
}
