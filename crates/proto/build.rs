// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Result;

fn main() -> Result<()> {
	tonic_prost_build::configure()
		.build_server(false)
		.build_client(true)
		.compile_protos(&["proto/query.proto", "proto/schema.proto", "proto/bridge.proto"], &["proto"])?;
	Ok(())
}
