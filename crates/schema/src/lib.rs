// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! REST table model and its translation to the bridge schema.

mod alter;
pub mod cql;
pub mod error;
pub mod model;
pub mod translate;

pub use alter::alter_default_ttl;
pub use error::SchemaError;
pub use model::{ClusteringExpression, ColumnDefinition, PrimaryKey, RestResponse, Table, TableAddRequest, TableOptions};
pub use translate::{ColumnKind, classify, to_bridge_definition, to_rest_table};

pub type Result<T> = std::result::Result<T, SchemaError>;
