// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{CqlType, MAX_TYPE_DEPTH};
use crate::error::TypeError;

/// Longest prefix of the input repeated in error messages.
const ECHOED_INPUT: usize = 64;

pub(crate) struct Parser<'a> {
	input: &'a str,
	pos: usize,
	/// Parameter lists currently open.
	depth: usize,
}

impl<'a> Parser<'a> {
	pub(crate) fn new(input: &'a str) -> Self {
		Self {
			input,
			pos: 0,
			depth: 0,
		}
	}

	pub(crate) fn parse(mut self) -> Result<CqlType, TypeError> {
		let result = self.parse_type()?;
		self.skip_whitespace();
		if let Some(c) = self.peek() {
			return Err(self.malformed(format!("unexpected '{}'", c)));
		}
		Ok(result)
	}

	fn parse_type(&mut self) -> Result<CqlType, TypeError> {
		self.skip_whitespace();
		let name = self.identifier()?.to_ascii_lowercase();
		self.skip_whitespace();

		if self.peek() != Some('<') {
			return match CqlType::primitive_from_name(&name) {
				Some(primitive) => Ok(primitive),
				None if is_parameterized(&name) => Err(TypeError::ParameterCount {
					expected: expected_parameters(&name),
					name,
					actual: 0,
				}),
				None => Err(TypeError::UnknownType {
					name,
				}),
			};
		}

		self.pos += 1;
		if self.depth >= MAX_TYPE_DEPTH {
			return Err(TypeError::TooDeep {
				limit: MAX_TYPE_DEPTH,
			});
		}
		self.depth += 1;
		let mut parameters = self.parameters()?;
		self.depth -= 1;

		match name.as_str() {
			"frozen" => {
				self.expect_count(&name, &parameters, 1)?;
				let inner = parameters.remove(0);
				let rendered = inner.render(false);
				inner.freeze().ok_or(TypeError::FrozenPrimitive {
					name: rendered,
				})
			}
			"list" => {
				self.expect_count(&name, &parameters, 1)?;
				Ok(CqlType::list(parameters.remove(0)))
			}
			"set" => {
				self.expect_count(&name, &parameters, 1)?;
				Ok(CqlType::set(parameters.remove(0)))
			}
			"map" => {
				self.expect_count(&name, &parameters, 2)?;
				let value = parameters.remove(1);
				let key = parameters.remove(0);
				Ok(CqlType::map(key, value))
			}
			"tuple" => Ok(CqlType::Tuple(parameters)),
			_ if CqlType::primitive_from_name(&name).is_some() => Err(TypeError::ParameterCount {
				name,
				expected: "no",
				actual: parameters.len(),
			}),
			_ => Err(TypeError::UnknownType {
				name,
			}),
		}
	}

	/// Parses `T1, T2, ...>` after an opening `<`.
	fn parameters(&mut self) -> Result<Vec<CqlType>, TypeError> {
		let mut result = Vec::new();
		loop {
			result.push(self.parse_type()?);
			self.skip_whitespace();
			match self.peek() {
				Some(',') => self.pos += 1,
				Some('>') => {
					self.pos += 1;
					return Ok(result);
				}
				Some(c) => return Err(self.malformed(format!("unexpected '{}'", c))),
				None => return Err(self.malformed("missing closing '>'".to_string())),
			}
		}
	}

	fn identifier(&mut self) -> Result<&'a str, TypeError> {
		let start = self.pos;
		while let Some(c) = self.peek() {
			if c.is_ascii_alphanumeric() || c == '_' {
				self.pos += c.len_utf8();
			} else {
				break;
			}
		}
		if start == self.pos {
			return Err(match self.peek() {
				Some(c) => self.malformed(format!("expected type name, found '{}'", c)),
				None => self.malformed("expected type name".to_string()),
			});
		}
		Ok(&self.input[start..self.pos])
	}

	fn expect_count(&self, name: &str, parameters: &[CqlType], expected: usize) -> Result<(), TypeError> {
		if parameters.len() != expected {
			return Err(TypeError::ParameterCount {
				name: name.to_string(),
				expected: expected_parameters(name),
				actual: parameters.len(),
			});
		}
		Ok(())
	}

	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			if !c.is_whitespace() {
				break;
			}
			self.pos += c.len_utf8();
		}
	}

	fn peek(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	fn malformed(&self, reason: String) -> TypeError {
		let input = match self.input.char_indices().nth(ECHOED_INPUT) {
			Some((end, _)) => format!("{}...", &self.input[..end]),
			None => self.input.to_string(),
		};
		TypeError::Malformed {
			input,
			reason,
		}
	}
}

fn is_parameterized(name: &str) -> bool {
	matches!(name, "frozen" | "list" | "set" | "map" | "tuple")
}

fn expected_parameters(name: &str) -> &'static str {
	match name {
		"map" => "2",
		"tuple" => "at least 1",
		_ => "1",
	}
}

#[cfg(test)]
mod tests {
	use crate::{CqlType, MAX_TYPE_DEPTH, TypeError};

	#[test]
	fn test_parse_primitives() {
		assert_eq!(CqlType::parse("int").unwrap(), CqlType::Int);
		assert_eq!(CqlType::parse("TEXT").unwrap(), CqlType::Text);
		assert_eq!(CqlType::parse("varchar").unwrap(), CqlType::Text);
		assert_eq!(CqlType::parse("  timeuuid ").unwrap(), CqlType::Timeuuid);
	}

	#[test]
	fn test_parse_collections() {
		assert_eq!(CqlType::parse("list<text>").unwrap(), CqlType::list(CqlType::Text));
		assert_eq!(CqlType::parse("Set< INT >").unwrap(), CqlType::set(CqlType::Int));
		assert_eq!(
			CqlType::parse("map<text,list<int>>").unwrap(),
			CqlType::map(CqlType::Text, CqlType::list(CqlType::Int))
		);
		assert_eq!(
			CqlType::parse("tuple<int, text, double>").unwrap(),
			CqlType::Tuple(vec![CqlType::Int, CqlType::Text, CqlType::Double])
		);
	}

	#[test]
	fn test_parse_frozen() {
		let ty = CqlType::parse("frozen<map<text, int>>").unwrap();
		assert!(ty.is_frozen());
		assert_eq!(ty.render(true), "frozen<map<text, int>>");

		let nested = CqlType::parse("list<frozen<set<int>>>").unwrap();
		assert!(!nested.is_frozen());
		assert_eq!(nested.render(true), "list<frozen<set<int>>>");
	}

	#[test]
	fn test_parse_unknown_type() {
		let err = CqlType::parse("integer").unwrap_err();
		assert!(matches!(err, TypeError::UnknownType { ref name } if name == "integer"));
		assert_eq!(err.code(), "TYPE_001");

		assert!(matches!(CqlType::parse("list<address>"), Err(TypeError::UnknownType { .. })));
		assert!(matches!(CqlType::parse("vector<float>"), Err(TypeError::UnknownType { .. })));
	}

	#[test]
	fn test_parse_malformed() {
		assert!(matches!(CqlType::parse(""), Err(TypeError::Malformed { .. })));
		assert!(matches!(CqlType::parse("list<int"), Err(TypeError::Malformed { .. })));
		assert!(matches!(CqlType::parse("list<int>>"), Err(TypeError::Malformed { .. })));
		assert!(matches!(CqlType::parse("map<text int>"), Err(TypeError::Malformed { .. })));
		assert!(matches!(CqlType::parse("list<>"), Err(TypeError::Malformed { .. })));
		assert!(matches!(CqlType::parse("int text"), Err(TypeError::Malformed { .. })));
	}

	#[test]
	fn test_parse_wrong_parameter_count() {
		assert!(matches!(CqlType::parse("map<text>"), Err(TypeError::ParameterCount { actual: 1, .. })));
		assert!(matches!(CqlType::parse("list<int, int>"), Err(TypeError::ParameterCount { actual: 2, .. })));
		assert!(matches!(CqlType::parse("list"), Err(TypeError::ParameterCount { actual: 0, .. })));
		assert!(matches!(CqlType::parse("int<text>"), Err(TypeError::ParameterCount { actual: 1, .. })));
	}

	#[test]
	fn test_parse_depth_limit() {
		let at_limit = format!("{}int{}", "list<".repeat(MAX_TYPE_DEPTH), ">".repeat(MAX_TYPE_DEPTH));
		assert!(CqlType::parse(&at_limit).is_ok());

		let over_limit = format!("{}int{}", "list<".repeat(MAX_TYPE_DEPTH + 1), ">".repeat(MAX_TYPE_DEPTH + 1));
		assert_eq!(CqlType::parse(&over_limit).unwrap_err(), TypeError::TooDeep { limit: MAX_TYPE_DEPTH });
	}

	#[test]
	fn test_parse_huge_nesting_fails_cleanly() {
		let err = CqlType::parse(&"list<".repeat(200_000)).unwrap_err();
		assert_eq!(err.code(), "TYPE_007");
	}

	#[test]
	fn test_malformed_input_is_truncated() {
		let input = format!("list<int>{}", "x".repeat(100));
		let Err(TypeError::Malformed { input: echoed, .. }) = CqlType::parse(&input) else {
			panic!("expected malformed error");
		};
		assert_eq!(echoed, format!("list<int>{}...", "x".repeat(55)));
		assert_eq!(
			CqlType::parse(&input).unwrap_err().to_string(),
			format!("Malformed type definition '{}': unexpected 'x'", echoed)
		);
	}

	#[test]
	fn test_parse_frozen_primitive() {
		let err = CqlType::parse("frozen<int>").unwrap_err();
		assert!(matches!(err, TypeError::FrozenPrimitive { ref name } if name == "int"));
	}
}
