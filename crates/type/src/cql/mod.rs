// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use crate::error::TypeError;

mod parse;
mod spec;

pub use spec::{logical_name_from_type_spec, type_spec_from_logical_name};

/// Deepest nesting of parameterized types accepted from type names and
/// structured specs.
pub const MAX_TYPE_DEPTH: usize = 32;

/// All CQL column types understood by the bridge.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum CqlType {
	/// US-ASCII character string
	Ascii,
	/// 64-bit signed integer
	Bigint,
	/// Arbitrary bytes
	Blob,
	/// true or false
	Boolean,
	/// 64-bit distributed counter
	Counter,
	/// Date without time
	Date,
	/// Variable-precision decimal
	Decimal,
	/// 64-bit IEEE-754 floating point
	Double,
	/// Duration with nanosecond precision
	Duration,
	/// 32-bit IEEE-754 floating point
	Float,
	/// IPv4 or IPv6 address
	Inet,
	/// 32-bit signed integer
	Int,
	/// 16-bit signed integer
	Smallint,
	/// UTF-8 encoded string (`varchar` is an alias)
	Text,
	/// Time of day with nanosecond precision
	Time,
	/// Millisecond precision instant
	Timestamp,
	/// Version 1 UUID
	Timeuuid,
	/// 8-bit signed integer
	Tinyint,
	/// Any UUID
	Uuid,
	/// Arbitrary-precision integer
	Varint,
	List {
		element: Box<CqlType>,
		frozen: bool,
	},
	Set {
		element: Box<CqlType>,
		frozen: bool,
	},
	Map {
		key: Box<CqlType>,
		value: Box<CqlType>,
		frozen: bool,
	},
	/// Tuples are always frozen, so no flag is kept.
	Tuple(Vec<CqlType>),
}

impl CqlType {
	pub fn list(element: CqlType) -> Self {
		CqlType::List {
			element: Box::new(element),
			frozen: false,
		}
	}

	pub fn set(element: CqlType) -> Self {
		CqlType::Set {
			element: Box::new(element),
			frozen: false,
		}
	}

	pub fn map(key: CqlType, value: CqlType) -> Self {
		CqlType::Map {
			key: Box::new(key),
			value: Box::new(value),
			frozen: false,
		}
	}

	pub fn is_collection(&self) -> bool {
		matches!(self, CqlType::List { .. } | CqlType::Set { .. } | CqlType::Map { .. })
	}

	pub fn is_frozen(&self) -> bool {
		match self {
			CqlType::List { frozen, .. } | CqlType::Set { frozen, .. } | CqlType::Map { frozen, .. } => *frozen,
			CqlType::Tuple(_) => true,
			_ => false,
		}
	}

	/// Marks a collection as frozen. Returns `None` for primitives, which
	/// cannot be frozen.
	pub fn freeze(self) -> Option<Self> {
		match self {
			CqlType::List { element, .. } => Some(CqlType::List { element, frozen: true }),
			CqlType::Set { element, .. } => Some(CqlType::Set { element, frozen: true }),
			CqlType::Map { key, value, .. } => Some(CqlType::Map { key, value, frozen: true }),
			CqlType::Tuple(elements) => Some(CqlType::Tuple(elements)),
			_ => None,
		}
	}

	/// Parses a logical type name such as `int`, `map<text, int>` or
	/// `frozen<list<text>>`.
	pub fn parse(input: &str) -> Result<Self, TypeError> {
		parse::Parser::new(input).parse()
	}

	/// Renders the canonical CQL form.
	///
	/// With `frozen_hint` set, frozen collections are wrapped in
	/// `frozen<...>`; without it the wrapper is never emitted. Tuples never
	/// show the wrapper, so parsing the output does not always restore the
	/// original frozen flags.
	pub fn render(&self, frozen_hint: bool) -> String {
		let (inner, frozen) = match self {
			CqlType::List { element, frozen } => (format!("list<{}>", element.render(frozen_hint)), *frozen),
			CqlType::Set { element, frozen } => (format!("set<{}>", element.render(frozen_hint)), *frozen),
			CqlType::Map { key, value, frozen } => {
				(format!("map<{}, {}>", key.render(frozen_hint), value.render(frozen_hint)), *frozen)
			}
			CqlType::Tuple(elements) => {
				let elements: Vec<String> = elements.iter().map(|e| e.render(frozen_hint)).collect();
				(format!("tuple<{}>", elements.join(", ")), false)
			}
			primitive => return primitive.primitive_name().to_string(),
		};

		if frozen_hint && frozen {
			format!("frozen<{}>", inner)
		} else {
			inner
		}
	}

	fn primitive_name(&self) -> &'static str {
		match self {
			CqlType::Ascii => "ascii",
			CqlType::Bigint => "bigint",
			CqlType::Blob => "blob",
			CqlType::Boolean => "boolean",
			CqlType::Counter => "counter",
			CqlType::Date => "date",
			CqlType::Decimal => "decimal",
			CqlType::Double => "double",
			CqlType::Duration => "duration",
			CqlType::Float => "float",
			CqlType::Inet => "inet",
			CqlType::Int => "int",
			CqlType::Smallint => "smallint",
			CqlType::Text => "text",
			CqlType::Time => "time",
			CqlType::Timestamp => "timestamp",
			CqlType::Timeuuid => "timeuuid",
			CqlType::Tinyint => "tinyint",
			CqlType::Uuid => "uuid",
			CqlType::Varint => "varint",
			CqlType::List { .. } => "list",
			CqlType::Set { .. } => "set",
			CqlType::Map { .. } => "map",
			CqlType::Tuple(_) => "tuple",
		}
	}

	pub(crate) fn primitive_from_name(name: &str) -> Option<Self> {
		match name {
			"ascii" => Some(CqlType::Ascii),
			"bigint" => Some(CqlType::Bigint),
			"blob" => Some(CqlType::Blob),
			"boolean" => Some(CqlType::Boolean),
			"counter" => Some(CqlType::Counter),
			"date" => Some(CqlType::Date),
			"decimal" => Some(CqlType::Decimal),
			"double" => Some(CqlType::Double),
			"duration" => Some(CqlType::Duration),
			"float" => Some(CqlType::Float),
			"inet" => Some(CqlType::Inet),
			"int" => Some(CqlType::Int),
			"smallint" => Some(CqlType::Smallint),
			"text" | "varchar" => Some(CqlType::Text),
			"time" => Some(CqlType::Time),
			"timestamp" => Some(CqlType::Timestamp),
			"timeuuid" => Some(CqlType::Timeuuid),
			"tinyint" => Some(CqlType::Tinyint),
			"uuid" => Some(CqlType::Uuid),
			"varint" => Some(CqlType::Varint),
			_ => None,
		}
	}
}

impl Display for CqlType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.render(true))
	}
}

impl FromStr for CqlType {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		CqlType::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_primitive() {
		assert_eq!(CqlType::Int.render(true), "int");
		assert_eq!(CqlType::Timeuuid.render(false), "timeuuid");
	}

	#[test]
	fn test_render_collections() {
		assert_eq!(CqlType::list(CqlType::Text).render(true), "list<text>");
		assert_eq!(CqlType::map(CqlType::Text, CqlType::set(CqlType::Int)).render(true), "map<text, set<int>>");
		assert_eq!(CqlType::Tuple(vec![CqlType::Int, CqlType::Text]).render(true), "tuple<int, text>");
	}

	#[test]
	fn test_render_frozen_hint() {
		let ty = CqlType::list(CqlType::Int).freeze().unwrap();
		assert_eq!(ty.render(true), "frozen<list<int>>");
		assert_eq!(ty.render(false), "list<int>");
	}

	#[test]
	fn test_render_nested_frozen() {
		let ty = CqlType::map(CqlType::Text, CqlType::list(CqlType::Int).freeze().unwrap());
		assert_eq!(ty.render(true), "map<text, frozen<list<int>>>");
		assert_eq!(ty.render(false), "map<text, list<int>>");
	}

	#[test]
	fn test_freeze_primitive() {
		assert_eq!(CqlType::Int.freeze(), None);
	}

	#[test]
	fn test_tuple_is_frozen() {
		assert!(CqlType::Tuple(vec![CqlType::Int]).is_frozen());
		assert!(!CqlType::list(CqlType::Int).is_frozen());
	}

	#[test]
	fn test_display_uses_frozen_hint() {
		let ty = CqlType::set(CqlType::Uuid).freeze().unwrap();
		assert_eq!(ty.to_string(), "frozen<set<uuid>>");
	}

	#[test]
	fn test_tuple_frozen_is_not_restored() {
		let parsed: CqlType = "frozen<tuple<int, text>>".parse().unwrap();
		let rendered = parsed.render(true);
		assert_eq!(rendered, "tuple<int, text>");
		assert_eq!(CqlType::parse(&rendered).unwrap(), parsed);
	}
}
