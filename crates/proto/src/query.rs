// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::stargate::{
	Batch, BatchQuery, BatchType, ColumnSpec, Consistency, ConsistencyValue, Query, QueryParameters, Response,
	ResultSet, TypeSpec, Value, Values, response, type_spec, value,
};

impl Query {
	pub fn new(cql: impl Into<String>) -> Self {
		Self {
			cql: cql.into(),
			values: None,
			parameters: None,
		}
	}

	pub fn with_values(self, values: impl IntoIterator<Item = Value>) -> Self {
		Self {
			values: Some(Values::of(values)),
			..self
		}
	}

	pub fn with_parameters(self, parameters: QueryParameters) -> Self {
		Self {
			parameters: Some(parameters),
			..self
		}
	}
}

impl Values {
	pub fn of(values: impl IntoIterator<Item = Value>) -> Self {
		Self {
			values: values.into_iter().collect(),
			value_names: Vec::new(),
		}
	}
}

impl Value {
	pub fn null() -> Self {
		Self {
			inner: Some(value::Inner::Null(value::Null {})),
		}
	}

	pub fn unset() -> Self {
		Self {
			inner: Some(value::Inner::Unset(value::Unset {})),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match &self.inner {
			Some(value::Inner::String(s)) => Some(s),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self.inner, None | Some(value::Inner::Null(_)))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self {
			inner: Some(value::Inner::String(value.to_string())),
		}
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self {
			inner: Some(value::Inner::String(value)),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self {
			inner: Some(value::Inner::Int(value)),
		}
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::from(value as i64)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self {
			inner: Some(value::Inner::Double(value)),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self {
			inner: Some(value::Inner::Boolean(value)),
		}
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Self {
			inner: Some(value::Inner::Bytes(value)),
		}
	}
}

impl QueryParameters {
	pub fn with_consistency(consistency: Consistency) -> Self {
		Self {
			consistency: Some(ConsistencyValue {
				value: consistency.into(),
			}),
			..Default::default()
		}
	}

	pub fn local_quorum() -> Self {
		Self::with_consistency(Consistency::LocalQuorum)
	}
}

impl BatchQuery {
	pub fn new(cql: impl Into<String>) -> Self {
		Self {
			cql: cql.into(),
			values: None,
		}
	}
}

impl Batch {
	pub fn logged(queries: impl IntoIterator<Item = BatchQuery>) -> Self {
		Self {
			r#type: BatchType::Logged.into(),
			queries: queries.into_iter().collect(),
			parameters: None,
		}
	}
}

impl ColumnSpec {
	pub fn new(name: impl Into<String>, r#type: TypeSpec) -> Self {
		Self {
			r#type: Some(r#type),
			name: name.into(),
		}
	}
}

impl TypeSpec {
	pub fn basic(basic: type_spec::Basic) -> Self {
		Self {
			spec: Some(type_spec::Spec::Basic(basic.into())),
		}
	}
}

impl Response {
	pub fn result_set(&self) -> Option<&ResultSet> {
		match &self.result {
			Some(response::Result::ResultSet(rs)) => Some(rs),
			_ => None,
		}
	}
}
