// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lifecycle interface shared by the cqlbridge subsystems.

pub mod error;
pub mod subsystem;

pub use error::SubsystemError;
pub use subsystem::{HealthStatus, Subsystem, SubsystemFactory};

pub type Result<T> = std::result::Result<T, SubsystemError>;
