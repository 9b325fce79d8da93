// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Walks through every call of the bridge: plain, parameterized, batched,
//! asynchronous and streamed queries against a `test(k text, v int)` table.

use std::time::Duration;

use clap::Parser;
use cqlbridge_client::{Bridge, BridgeConfig, BridgeError, GrpcBridge};
use cqlbridge_proto::{
	Batch, BatchQuery, Query, Response, ResultSet, StreamingResponse, Value, streaming_response, value,
};
use cqlbridge_schema::cql::quote_identifier;
use cqlbridge_sub_api::{SubsystemError, SubsystemFactory};
use cqlbridge_sub_tracing::{LogFormat, TracingSubsystemFactory};
use tokio_stream::{Stream, StreamExt};
use tonic::Status;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cqlbridge-cli", version, about = "Example client of the CQL bridge")]
struct Args {
	#[arg(long, env = "CQLBRIDGE_BRIDGE_HOST", default_value = "localhost")]
	host: String,

	#[arg(long, env = "CQLBRIDGE_BRIDGE_PORT", default_value_t = 8090)]
	port: u16,

	/// Auth token sent with every call
	#[arg(long, env = "CQLBRIDGE_TOKEN")]
	token: String,

	#[arg(long, default_value_t = 10)]
	deadline_secs: u64,

	/// Keyspace the example table is created in
	#[arg(long, default_value = "ks")]
	keyspace: String,

	#[arg(long, env = "CQLBRIDGE_LOG_LEVEL", default_value = "warn")]
	log_level: String,

	#[arg(long, env = "CQLBRIDGE_LOG_FORMAT", default_value = "compact")]
	log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
	#[error(transparent)]
	Bridge(#[from] BridgeError),

	#[error("stream failed: {0}")]
	Status(#[from] Status),

	#[error("bridge rejected a streamed item ({code}): {message}")]
	Rejected {
		code: i32,
		message: String,
	},

	#[error(transparent)]
	Subsystem(#[from] SubsystemError),

	#[error("query task failed: {0}")]
	Task(#[from] tokio::task::JoinError),

	#[error("query returned no rows")]
	EmptyResult,

	#[error("stream ended after {received} of {expected} replies")]
	StreamEnded {
		expected: usize,
		received: usize,
	},
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
	let args = Args::parse();

	let level = args.log_level.clone();
	let format = args.log_format;
	let mut tracing =
		Box::new(TracingSubsystemFactory::with_configurator(move |b| b.with_level(level).with_format(format)))
			.create()?;
	tracing.start().await?;

	let config = BridgeConfig::new()
		.host(&args.host)
		.port(args.port)
		.token(&args.token)
		.deadline(Duration::from_secs(args.deadline_secs));
	info!(endpoint = %config.endpoint(), "connecting");
	let bridge = GrpcBridge::connect(&config)?;

	let table = format!("{}.test", quote_identifier(&args.keyspace));

	prepare_schema(&bridge, &args.keyspace, &table).await?;
	single_query(&bridge, &table).await?;
	parameterized_query(&bridge, &table).await?;
	batch_query(&bridge, &table).await?;
	async_query(&bridge, &table).await?;
	streaming_query(&bridge, &table).await?;
	streaming_batch(&bridge, &table).await?;

	tracing.shutdown().await?;
	Ok(())
}

async fn prepare_schema(bridge: &GrpcBridge, keyspace: &str, table: &str) -> Result<(), CliError> {
	bridge
		.execute_query(Query::new(format!(
			"CREATE KEYSPACE IF NOT EXISTS {} WITH REPLICATION = {{'class':'SimpleStrategy', 'replication_factor':1}}",
			quote_identifier(keyspace)
		)))
		.await?;
	bridge
		.execute_query(Query::new(format!("CREATE TABLE IF NOT EXISTS {table} (k text, v int, PRIMARY KEY(k, v))")))
		.await?;
	println!("schema ready");
	Ok(())
}

async fn single_query(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	bridge.execute_query(Query::new(format!("INSERT INTO {table} (k, v) VALUES ('a', 1)"))).await?;
	let response = bridge.execute_query(Query::new(format!("SELECT k, v FROM {table}"))).await?;

	let row = result_set(&response)?.rows.first().ok_or(CliError::EmptyResult)?;
	let k = row.values.first().map(format_value).unwrap_or_default();
	let v = row.values.get(1).map(format_value).unwrap_or_default();
	println!("single query: k = {k}, v = {v}");
	Ok(())
}

async fn parameterized_query(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	bridge
		.execute_query(Query::new(format!("INSERT INTO {table} (k, v) VALUES (?, ?)")).with_values([
			Value::from("b"),
			Value::from(2),
		]))
		.await?;
	let response = bridge
		.execute_query(Query::new(format!("SELECT k, v FROM {table} WHERE k = ?")).with_values([Value::from("b")]))
		.await?;
	print_rows("parameterized query", result_set(&response)?);
	Ok(())
}

async fn batch_query(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	bridge
		.execute_batch(Batch::logged([
			BatchQuery::new(format!("INSERT INTO {table} (k, v) VALUES ('c', 3)")),
			BatchQuery::new(format!("INSERT INTO {table} (k, v) VALUES ('d', 4)")),
		]))
		.await?;
	let response = bridge.execute_query(Query::new(format!("SELECT k, v FROM {table}"))).await?;
	print_rows("batch", result_set(&response)?);
	Ok(())
}

async fn async_query(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	let task_bridge = bridge.clone();
	let query = Query::new(format!("SELECT k, v FROM {table}"));
	let handle = tokio::spawn(async move { task_bridge.execute_query(query).await });

	let response = handle.await??;
	print_rows("async query", result_set(&response)?);
	Ok(())
}

async fn streaming_query(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	let inserts = tokio_stream::iter([
		Query::new(format!("INSERT INTO {table} (k, v) VALUES ('e', 5)")),
		Query::new(format!("INSERT INTO {table} (k, v) VALUES ('f', 6)")),
	]);
	let replies = await_replies(bridge.execute_query_stream(inserts).await?, 2).await?;
	println!("streaming insert: {} replies", replies.len());

	let select = tokio_stream::iter([Query::new(format!("SELECT k, v FROM {table}"))]);
	let replies = await_replies(bridge.execute_query_stream(select).await?, 1).await?;
	for response in &replies {
		print_rows("streaming select", result_set(response)?);
	}
	Ok(())
}

async fn streaming_batch(bridge: &GrpcBridge, table: &str) -> Result<(), CliError> {
	let batches = tokio_stream::iter([
		Batch::logged([BatchQuery::new(format!("INSERT INTO {table} (k, v) VALUES ('g', 7)"))]),
		Batch::logged([BatchQuery::new(format!("INSERT INTO {table} (k, v) VALUES ('h', 8)"))]),
	]);
	let replies = await_replies(bridge.execute_batch_stream(batches).await?, 2).await?;
	println!("streaming batch: {} replies", replies.len());

	let select = tokio_stream::iter([Query::new(format!("SELECT k, v FROM {table}"))]);
	for response in &await_replies(bridge.execute_query_stream(select).await?, 1).await? {
		print_rows("after streaming batch", result_set(response)?);
	}
	Ok(())
}

/// Reads exactly `expected` replies off a streamed call. A per-item error
/// status from the bridge fails the whole wait.
async fn await_replies<S>(stream: S, expected: usize) -> Result<Vec<Response>, CliError>
where
	S: Stream<Item = Result<StreamingResponse, Status>>,
{
	tokio::pin!(stream);
	let mut replies = Vec::with_capacity(expected);
	while replies.len() < expected {
		let Some(item) = stream.next().await else {
			return Err(CliError::StreamEnded {
				expected,
				received: replies.len(),
			});
		};
		match item?.response {
			Some(streaming_response::Response::Response(response)) => replies.push(response),
			Some(streaming_response::Response::Status(status)) => {
				return Err(CliError::Rejected {
					code: status.code,
					message: status.message,
				});
			}
			None => replies.push(Response::default()),
		}
	}
	Ok(replies)
}

fn result_set(response: &Response) -> Result<&ResultSet, CliError> {
	response.result_set().ok_or(CliError::EmptyResult)
}

fn print_rows(label: &str, result_set: &ResultSet) {
	println!("{label}:");
	for row in &result_set.rows {
		let values: Vec<String> = row.values.iter().map(format_value).collect();
		println!("  {}", values.join(", "));
	}
}

fn format_value(value: &Value) -> String {
	match &value.inner {
		None | Some(value::Inner::Null(_)) => "null".to_string(),
		Some(value::Inner::Unset(_)) => "unset".to_string(),
		Some(value::Inner::Int(i)) => i.to_string(),
		Some(value::Inner::Float(f)) => f.to_string(),
		Some(value::Inner::Double(d)) => d.to_string(),
		Some(value::Inner::Boolean(b)) => b.to_string(),
		Some(value::Inner::String(s)) => s.clone(),
		Some(value::Inner::Bytes(bytes)) => {
			let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
			format!("0x{hex}")
		}
		Some(value::Inner::Collection(collection)) => {
			let elements: Vec<String> = collection.elements.iter().map(format_value).collect();
			format!("[{}]", elements.join(", "))
		}
	}
}
