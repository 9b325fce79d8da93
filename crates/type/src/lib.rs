// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Logical CQL types and their translation to and from the bridge's
//! structured type specification.

pub mod cql;
pub mod error;

pub use cql::{CqlType, MAX_TYPE_DEPTH, logical_name_from_type_spec, type_spec_from_logical_name};
pub use error::TypeError;

pub type Result<T> = std::result::Result<T, TypeError>;
