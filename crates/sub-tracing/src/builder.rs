// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, str::FromStr};

use crate::subsystem::TracingSubsystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

impl FromStr for LogFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(LogFormat::Pretty),
			"compact" => Ok(LogFormat::Compact),
			"json" => Ok(LogFormat::Json),
			other => Err(format!("unknown log format '{other}', expected pretty, compact or json")),
		}
	}
}

impl fmt::Display for LogFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			LogFormat::Pretty => "pretty",
			LogFormat::Compact => "compact",
			LogFormat::Json => "json",
		})
	}
}

/// Configures the console subscriber installed by [`TracingSubsystem`].
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: String,
	format: LogFormat,
	with_target: bool,
	directives: Vec<String>,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::default(),
			with_target: true,
			directives: Vec::new(),
		}
	}

	/// Default level, used when `RUST_LOG` is not set.
	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = level.into();
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	/// Adds a per-target directive such as `h2=warn`.
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	pub fn format(&self) -> LogFormat {
		self.format
	}

	pub fn target(&self) -> bool {
		self.with_target
	}

	/// The filter used when `RUST_LOG` is absent.
	pub fn filter_directives(&self) -> String {
		std::iter::once(self.level.clone()).chain(self.directives.iter().cloned()).collect::<Vec<_>>().join(",")
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem::new(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_log_format_parse() {
		assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
		assert_eq!("Pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
		assert_eq!("COMPACT".parse::<LogFormat>(), Ok(LogFormat::Compact));
		assert!("xml".parse::<LogFormat>().is_err());
	}

	#[test]
	fn test_log_format_display_round_trip() {
		for format in [LogFormat::Pretty, LogFormat::Compact, LogFormat::Json] {
			assert_eq!(format.to_string().parse::<LogFormat>(), Ok(format));
		}
	}

	#[test]
	fn test_filter_directives() {
		let builder = TracingBuilder::new().with_level("debug").with_directive("h2=warn").with_directive("tower=info");
		assert_eq!(builder.filter_directives(), "debug,h2=warn,tower=info");
	}

	#[test]
	fn test_defaults() {
		let builder = TracingBuilder::default();
		assert_eq!(builder.filter_directives(), "info");
		assert_eq!(builder.format(), LogFormat::Compact);
		assert!(builder.target());
	}
}
