// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! REST table-management server in front of the CQL bridge.

use std::{io, time::Duration};

use clap::Parser;
use cqlbridge_client::{BridgeConfig, BridgeError, GrpcBridgeFactory};
use cqlbridge_sub_api::{SubsystemError, SubsystemFactory};
use cqlbridge_sub_server_http::{AppState, HttpConfig, HttpSubsystemFactory};
use cqlbridge_sub_tracing::{LogFormat, TracingSubsystemFactory};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cqlbridge-server", version, about = "REST schema API backed by the CQL bridge")]
struct Args {
	/// Bridge host
	#[arg(long, env = "CQLBRIDGE_BRIDGE_HOST", default_value = "localhost")]
	bridge_host: String,

	/// Bridge gRPC port
	#[arg(long, env = "CQLBRIDGE_BRIDGE_PORT", default_value_t = 8090)]
	bridge_port: u16,

	/// Deadline of a single bridge call, in seconds
	#[arg(long, env = "CQLBRIDGE_BRIDGE_DEADLINE_SECS", default_value_t = 10)]
	bridge_deadline_secs: u64,

	/// Address the REST server listens on
	#[arg(long, env = "CQLBRIDGE_BIND_ADDR", default_value = "0.0.0.0:8082")]
	bind_addr: String,

	/// Timeout of a single REST request, in seconds
	#[arg(long, env = "CQLBRIDGE_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
	request_timeout_secs: u64,

	/// Log level, overridden by RUST_LOG
	#[arg(long, env = "CQLBRIDGE_LOG_LEVEL", default_value = "info")]
	log_level: String,

	/// Log format: pretty, compact or json
	#[arg(long, env = "CQLBRIDGE_LOG_FORMAT", default_value = "compact")]
	log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
enum ServerError {
	#[error(transparent)]
	Subsystem(#[from] SubsystemError),

	#[error(transparent)]
	Bridge(#[from] BridgeError),

	#[error("Failed to wait for shutdown signal: {0}")]
	Signal(io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
	let args = Args::parse();

	let level = args.log_level.clone();
	let format = args.log_format;
	let mut tracing = Box::new(TracingSubsystemFactory::with_configurator(move |builder| {
		builder.with_level(level).with_format(format).with_directive("h2=warn").with_directive("hyper=warn")
	}))
	.create()?;
	tracing.start().await?;

	let bridge = BridgeConfig::new()
		.host(&args.bridge_host)
		.port(args.bridge_port)
		.deadline(Duration::from_secs(args.bridge_deadline_secs));
	info!(endpoint = %bridge.endpoint(), "using bridge");

	let http = HttpConfig::default()
		.bind_addr(&args.bind_addr)
		.request_timeout(Duration::from_secs(args.request_timeout_secs));
	let state = AppState::new(GrpcBridgeFactory::connect(&bridge)?);
	let mut http = Box::new(HttpSubsystemFactory::new(http, state)).create()?;
	http.start().await?;

	tokio::signal::ctrl_c().await.map_err(ServerError::Signal)?;
	info!("shutting down");

	http.shutdown().await?;
	tracing.shutdown().await?;
	Ok(())
}
