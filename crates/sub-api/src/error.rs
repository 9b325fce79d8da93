// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SubsystemError {
	#[error("Failed to bind {addr}: {source}")]
	Bind {
		addr: String,
		source: io::Error,
	},

	#[error("Local address unavailable: {0}")]
	AddressUnavailable(io::Error),

	#[error("{subsystem} subsystem failed to start: {reason}")]
	Start {
		subsystem: &'static str,
		reason: String,
	},
}

impl SubsystemError {
	pub fn code(&self) -> &'static str {
		match self {
			SubsystemError::Bind { .. } => "SUBSYSTEM_001",
			SubsystemError::AddressUnavailable(_) => "SUBSYSTEM_002",
			SubsystemError::Start { .. } => "SUBSYSTEM_003",
		}
	}
}
