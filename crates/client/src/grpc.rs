// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use cqlbridge_proto::{
	Batch, CqlKeyspaceDescribe, CqlTable, CqlTableCreate, DescribeKeyspaceQuery, Query, Response,
	StargateBridgeClient, StreamingResponse,
};
use cqlbridge_schema::SchemaError;
use tokio_stream::Stream;
use tonic::{
	Code, Request, Streaming,
	service::interceptor::InterceptedService,
	transport::{Channel, Endpoint},
};
use tracing::debug;

use crate::{
	Result,
	auth::BearerToken,
	bridge::{Bridge, BridgeFactory},
	config::BridgeConfig,
	error::BridgeError,
};

type Client = StargateBridgeClient<InterceptedService<Channel, BearerToken>>;

/// A bridge reached over gRPC on behalf of one token.
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct GrpcBridge {
	client: Client,
	deadline: Duration,
}

impl GrpcBridge {
	/// Connects with the token from the configuration. The channel is lazy:
	/// nothing is dialed until the first call.
	pub fn connect(config: &BridgeConfig) -> Result<Self> {
		let token = config.token.as_deref().ok_or_else(|| BridgeError::InvalidToken {
			reason: "no token configured".to_string(),
		})?;
		Ok(Self::with_channel(channel(config)?, BearerToken::new(token)?, config.deadline))
	}

	pub fn with_channel(channel: Channel, token: BearerToken, deadline: Duration) -> Self {
		Self {
			client: StargateBridgeClient::new(InterceptedService::new(channel, token)),
			deadline,
		}
	}

	pub fn deadline(&self) -> Duration {
		self.deadline
	}

	/// Sends every query of the stream; the bridge answers each with one
	/// streaming response, in order.
	pub async fn execute_query_stream<S>(&self, queries: S) -> Result<Streaming<StreamingResponse>>
	where
		S: Stream<Item = Query> + Send + 'static,
	{
		debug!("ExecuteQueryStream");
		let mut request = Request::new(queries);
		request.set_timeout(self.deadline);
		Ok(self.client.clone().execute_query_stream(request).await?.into_inner())
	}

	pub async fn execute_batch_stream<S>(&self, batches: S) -> Result<Streaming<StreamingResponse>>
	where
		S: Stream<Item = Batch> + Send + 'static,
	{
		debug!("ExecuteBatchStream");
		let mut request = Request::new(batches);
		request.set_timeout(self.deadline);
		Ok(self.client.clone().execute_batch_stream(request).await?.into_inner())
	}

	async fn describe_keyspace(&self, keyspace: &str) -> Result<CqlKeyspaceDescribe> {
		debug!(keyspace, "DescribeKeyspace");
		let request = self.request(DescribeKeyspaceQuery {
			keyspace_name: keyspace.to_string(),
		});
		match self.client.clone().describe_keyspace(request).await {
			Ok(response) => Ok(response.into_inner()),
			Err(status) if status.code() == Code::NotFound => Err(BridgeError::KeyspaceNotFound {
				keyspace: keyspace.to_string(),
			}),
			Err(status) => Err(status.into()),
		}
	}

	fn request<T>(&self, message: T) -> Request<T> {
		let mut request = Request::new(message);
		request.set_timeout(self.deadline);
		request
	}
}

#[async_trait]
impl Bridge for GrpcBridge {
	async fn execute_query(&self, query: Query) -> Result<Response> {
		debug!(cql = %query.cql, "ExecuteQuery");
		let response = self.client.clone().execute_query(self.request(query)).await?;
		Ok(response.into_inner())
	}

	async fn execute_batch(&self, batch: Batch) -> Result<Response> {
		debug!(queries = batch.queries.len(), "ExecuteBatch");
		let response = self.client.clone().execute_batch(self.request(batch)).await?;
		Ok(response.into_inner())
	}

	async fn find_table(&self, keyspace: &str, table: &str) -> Result<CqlTable> {
		let describe = self.describe_keyspace(keyspace).await?;
		table_from_describe(describe, keyspace, table)
	}

	async fn find_all_tables(&self, keyspace: &str) -> Result<Vec<CqlTable>> {
		Ok(self.describe_keyspace(keyspace).await?.tables)
	}

	async fn create_table(&self, request: CqlTableCreate) -> Result<()> {
		let table = request.table.as_ref().ok_or_else(|| SchemaError::validation("Missing table definition"))?;
		debug!(keyspace = %request.keyspace_name, table = %table.name, "CreateTable");
		self.client.clone().create_table(self.request(request)).await?;
		Ok(())
	}
}

/// Creates one bridge per request token over a shared channel.
#[derive(Debug, Clone)]
pub struct GrpcBridgeFactory {
	channel: Channel,
	deadline: Duration,
}

impl GrpcBridgeFactory {
	/// Must be called from within a tokio runtime.
	pub fn connect(config: &BridgeConfig) -> Result<Self> {
		Ok(Self {
			channel: channel(config)?,
			deadline: config.deadline,
		})
	}
}

impl BridgeFactory for GrpcBridgeFactory {
	fn create(&self, token: &str) -> Result<Arc<dyn Bridge>> {
		let token = BearerToken::new(token)?;
		Ok(Arc::new(GrpcBridge::with_channel(self.channel.clone(), token, self.deadline)))
	}
}

fn channel(config: &BridgeConfig) -> Result<Channel> {
	let endpoint = Endpoint::from_shared(config.endpoint())?;
	debug!(endpoint = %config.endpoint(), "bridge channel configured");
	Ok(endpoint.connect_lazy())
}

fn table_from_describe(describe: CqlKeyspaceDescribe, keyspace: &str, table: &str) -> Result<CqlTable> {
	describe.tables.into_iter().find(|t| t.name == table).ok_or_else(|| BridgeError::TableNotFound {
		keyspace: keyspace.to_string(),
		table: table.to_string(),
	})
}
