// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::stargate::{ColumnOrderBy, CqlTable};

impl CqlTable {
	pub fn clustering_order(&self, column: &str) -> Option<ColumnOrderBy> {
		self.clustering_orders.get(column).and_then(|v| ColumnOrderBy::try_from(*v).ok())
	}
}
