// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Client side of the CQL bridge.
//!
//! [`Bridge`] is the narrow interface the REST layer talks to. [`GrpcBridge`]
//! implements it over tonic, attaching the auth token and a deadline to every
//! call. A [`BridgeFactory`] hands out one bridge per caller token.

pub mod auth;
pub mod bridge;
pub mod config;
pub mod error;
pub mod grpc;

pub use auth::{BearerToken, TOKEN_METADATA_KEY};
pub use bridge::{Bridge, BridgeFactory};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use grpc::{GrpcBridge, GrpcBridgeFactory};

pub type Result<T> = std::result::Result<T, BridgeError>;
