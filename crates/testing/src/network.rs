// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	io,
	net::{SocketAddr, TcpListener},
};

/// Returns a loopback address whose port was free a moment ago.
pub fn free_local_socket() -> io::Result<SocketAddr> {
	let listener = TcpListener::bind("127.0.0.1:0")?;
	listener.local_addr()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_free_local_socket_is_bindable() {
		let addr = free_local_socket().unwrap();
		assert_ne!(addr.port(), 0);
		assert!(TcpListener::bind(addr).is_ok());
	}
}
