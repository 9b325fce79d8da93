// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Wire messages and client stub of the CQL bridge protocol, generated from
//! `proto/*.proto` at build time. The modules below add constructors and
//! accessors on top of the generated types.

mod query;
mod schema;

pub(crate) mod stargate {
	tonic::include_proto!("stargate");
}

pub use stargate::{
	Batch, BatchQuery, BatchType, ColumnOrderBy, ColumnSpec, Consistency, ConsistencyValue, CqlKeyspace,
	CqlKeyspaceDescribe, CqlTable, CqlTableCreate, DescribeKeyspaceQuery, Query, QueryParameters, Response,
	ResultSet, Row, RpcStatus, SchemaChange, StreamingResponse, TypeSpec, Value, Values, response,
	stargate_bridge_client::StargateBridgeClient, streaming_response, type_spec, value,
};
