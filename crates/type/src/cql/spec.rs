// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Conversion between [`CqlType`] and the bridge's structured [`TypeSpec`].

use cqlbridge_proto::{
	TypeSpec,
	type_spec::{Basic, List, Map, Set, Spec, Tuple},
};

use super::{CqlType, MAX_TYPE_DEPTH};
use crate::error::TypeError;

/// Parses a logical type name into the bridge's structured form.
pub fn type_spec_from_logical_name(name: &str) -> Result<TypeSpec, TypeError> {
	let ty = CqlType::parse(name)?;
	Ok(TypeSpec::from(&ty))
}

/// Renders a structured type back to its logical name. See
/// [`CqlType::render`] for the meaning of `frozen_hint`.
pub fn logical_name_from_type_spec(spec: &TypeSpec, frozen_hint: bool) -> Result<String, TypeError> {
	let ty = CqlType::try_from(spec)?;
	Ok(ty.render(frozen_hint))
}

impl From<&CqlType> for TypeSpec {
	fn from(ty: &CqlType) -> Self {
		let spec = match ty {
			CqlType::Ascii => Spec::Basic(Basic::Ascii.into()),
			CqlType::Bigint => Spec::Basic(Basic::Bigint.into()),
			CqlType::Blob => Spec::Basic(Basic::Blob.into()),
			CqlType::Boolean => Spec::Basic(Basic::Boolean.into()),
			CqlType::Counter => Spec::Basic(Basic::Counter.into()),
			CqlType::Date => Spec::Basic(Basic::Date.into()),
			CqlType::Decimal => Spec::Basic(Basic::Decimal.into()),
			CqlType::Double => Spec::Basic(Basic::Double.into()),
			CqlType::Duration => Spec::Basic(Basic::Duration.into()),
			CqlType::Float => Spec::Basic(Basic::Float.into()),
			CqlType::Inet => Spec::Basic(Basic::Inet.into()),
			CqlType::Int => Spec::Basic(Basic::Int.into()),
			CqlType::Smallint => Spec::Basic(Basic::Smallint.into()),
			CqlType::Text => Spec::Basic(Basic::Text.into()),
			CqlType::Time => Spec::Basic(Basic::Time.into()),
			CqlType::Timestamp => Spec::Basic(Basic::Timestamp.into()),
			CqlType::Timeuuid => Spec::Basic(Basic::Timeuuid.into()),
			CqlType::Tinyint => Spec::Basic(Basic::Tinyint.into()),
			CqlType::Uuid => Spec::Basic(Basic::Uuid.into()),
			CqlType::Varint => Spec::Basic(Basic::Varint.into()),
			CqlType::List { element, frozen } => Spec::List(Box::new(List {
				element: Some(Box::new(TypeSpec::from(element.as_ref()))),
				frozen: *frozen,
			})),
			CqlType::Set { element, frozen } => Spec::Set(Box::new(Set {
				element: Some(Box::new(TypeSpec::from(element.as_ref()))),
				frozen: *frozen,
			})),
			CqlType::Map { key, value, frozen } => Spec::Map(Box::new(Map {
				key: Some(Box::new(TypeSpec::from(key.as_ref()))),
				value: Some(Box::new(TypeSpec::from(value.as_ref()))),
				frozen: *frozen,
			})),
			CqlType::Tuple(elements) => Spec::Tuple(Tuple {
				elements: elements.iter().map(TypeSpec::from).collect(),
			}),
		};
		TypeSpec {
			spec: Some(spec),
		}
	}
}

impl TryFrom<&TypeSpec> for CqlType {
	type Error = TypeError;

	fn try_from(spec: &TypeSpec) -> Result<Self, Self::Error> {
		from_spec(spec, 0)
	}
}

/// `depth` counts the parameterized types enclosing `spec`.
fn from_spec(spec: &TypeSpec, depth: usize) -> Result<CqlType, TypeError> {
	match spec.spec.as_ref().ok_or(TypeError::MissingSpec)? {
		Spec::Basic(code) => {
			let basic = Basic::try_from(*code).map_err(|_| TypeError::UnsupportedBasic {
				code: *code,
			})?;
			primitive_of(basic)
		}
		Spec::List(list) => Ok(CqlType::List {
			element: Box::new(element_of(list.element.as_deref(), nested(depth)?)?),
			frozen: list.frozen,
		}),
		Spec::Set(set) => Ok(CqlType::Set {
			element: Box::new(element_of(set.element.as_deref(), nested(depth)?)?),
			frozen: set.frozen,
		}),
		Spec::Map(map) => {
			let depth = nested(depth)?;
			Ok(CqlType::Map {
				key: Box::new(element_of(map.key.as_deref(), depth)?),
				value: Box::new(element_of(map.value.as_deref(), depth)?),
				frozen: map.frozen,
			})
		}
		Spec::Tuple(tuple) => {
			let depth = nested(depth)?;
			let elements = tuple
				.elements
				.iter()
				.map(|element| from_spec(element, depth))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(CqlType::Tuple(elements))
		}
	}
}

fn nested(depth: usize) -> Result<usize, TypeError> {
	if depth >= MAX_TYPE_DEPTH {
		return Err(TypeError::TooDeep {
			limit: MAX_TYPE_DEPTH,
		});
	}
	Ok(depth + 1)
}

fn element_of(spec: Option<&TypeSpec>, depth: usize) -> Result<CqlType, TypeError> {
	from_spec(spec.ok_or(TypeError::MissingSpec)?, depth)
}

fn primitive_of(basic: Basic) -> Result<CqlType, TypeError> {
	Ok(match basic {
		Basic::Ascii => CqlType::Ascii,
		Basic::Bigint => CqlType::Bigint,
		Basic::Blob => CqlType::Blob,
		Basic::Boolean => CqlType::Boolean,
		Basic::Counter => CqlType::Counter,
		Basic::Date => CqlType::Date,
		Basic::Decimal => CqlType::Decimal,
		Basic::Double => CqlType::Double,
		Basic::Duration => CqlType::Duration,
		Basic::Float => CqlType::Float,
		Basic::Inet => CqlType::Inet,
		Basic::Int => CqlType::Int,
		Basic::Smallint => CqlType::Smallint,
		Basic::Text | Basic::Varchar => CqlType::Text,
		Basic::Time => CqlType::Time,
		Basic::Timestamp => CqlType::Timestamp,
		Basic::Timeuuid => CqlType::Timeuuid,
		Basic::Tinyint => CqlType::Tinyint,
		Basic::Uuid => CqlType::Uuid,
		Basic::Varint => CqlType::Varint,
		Basic::Custom => {
			return Err(TypeError::UnsupportedBasic {
				code: Basic::Custom as i32,
			});
		}
	})
}
