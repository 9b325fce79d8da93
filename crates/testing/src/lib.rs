// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support: an in-memory bridge and small async helpers.

pub mod bridge;
pub mod network;
pub mod wait;

pub use bridge::MemoryBridge;
pub use network::free_local_socket;
pub use wait::{wait_for, wait_for_condition};
