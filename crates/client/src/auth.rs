// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tonic::{
	Request, Status,
	metadata::{Ascii, MetadataValue},
	service::Interceptor,
};

use crate::error::BridgeError;

pub const TOKEN_METADATA_KEY: &str = "x-cassandra-token";

/// Attaches the caller's auth token to every outgoing bridge call.
#[derive(Debug, Clone)]
pub struct BearerToken {
	token: MetadataValue<Ascii>,
}

impl BearerToken {
	pub fn new(token: &str) -> Result<Self, BridgeError> {
		if token.is_empty() {
			return Err(BridgeError::InvalidToken {
				reason: "token is empty".to_string(),
			});
		}
		let token = token.parse().map_err(|_| BridgeError::InvalidToken {
			reason: "token contains characters not allowed in metadata".to_string(),
		})?;
		Ok(Self {
			token,
		})
	}
}

impl Interceptor for BearerToken {
	fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
		request.metadata_mut().insert(TOKEN_METADATA_KEY, self.token.clone());
		Ok(request)
	}
}
