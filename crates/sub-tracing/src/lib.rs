// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Console logging for the cqlbridge executables.

pub mod builder;
pub mod factory;
pub mod subsystem;

pub use builder::{LogFormat, TracingBuilder};
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
pub use subsystem::TracingSubsystem;
