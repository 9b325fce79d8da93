// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! CQL statements for altering and dropping tables.

const RESERVED: &[&str] = &[
	"add",
	"allow",
	"alter",
	"and",
	"apply",
	"asc",
	"authorize",
	"batch",
	"begin",
	"by",
	"columnfamily",
	"create",
	"delete",
	"desc",
	"describe",
	"drop",
	"entries",
	"execute",
	"from",
	"full",
	"grant",
	"if",
	"in",
	"index",
	"infinity",
	"insert",
	"into",
	"keyspace",
	"limit",
	"modify",
	"nan",
	"norecursive",
	"not",
	"null",
	"of",
	"on",
	"or",
	"order",
	"primary",
	"rename",
	"replace",
	"revoke",
	"schema",
	"select",
	"set",
	"table",
	"to",
	"token",
	"truncate",
	"unlogged",
	"update",
	"use",
	"using",
	"view",
	"where",
	"with",
];

/// Quotes an identifier unless it is a plain lower case name that is not a
/// reserved word.
pub fn quote_identifier(name: &str) -> String {
	let mut chars = name.chars();
	let plain = matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
		&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

	if plain && !RESERVED.contains(&name) {
		name.to_string()
	} else {
		format!("\"{}\"", name.replace('"', "\"\""))
	}
}

fn qualified(keyspace: &str, table: &str) -> String {
	format!("{}.{}", quote_identifier(keyspace), quote_identifier(table))
}

pub fn alter_table_default_ttl(keyspace: &str, table: &str, ttl: i32) -> String {
	format!("ALTER TABLE {} WITH default_time_to_live = {}", qualified(keyspace, table), ttl)
}

pub fn drop_table(keyspace: &str, table: &str, if_exists: bool) -> String {
	if if_exists {
		format!("DROP TABLE IF EXISTS {}", qualified(keyspace, table))
	} else {
		format!("DROP TABLE {}", qualified(keyspace, table))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quote_identifier_plain() {
		assert_eq!(quote_identifier("users"), "users");
		assert_eq!(quote_identifier("user_2"), "user_2");
	}

	#[test]
	fn test_quote_identifier_mixed_case() {
		assert_eq!(quote_identifier("Users"), "\"Users\"");
		assert_eq!(quote_identifier("2fast"), "\"2fast\"");
	}

	#[test]
	fn test_quote_identifier_reserved() {
		assert_eq!(quote_identifier("table"), "\"table\"");
		assert_eq!(quote_identifier("token"), "\"token\"");
	}

	#[test]
	fn test_quote_identifier_escapes_quotes() {
		assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
	}

	#[test]
	fn test_alter_table_default_ttl() {
		assert_eq!(alter_table_default_ttl("ks", "t", 60), "ALTER TABLE ks.t WITH default_time_to_live = 60");
	}

	#[test]
	fn test_drop_table() {
		assert_eq!(drop_table("ks", "t", true), "DROP TABLE IF EXISTS ks.t");
		assert_eq!(drop_table("Ks", "t", false), "DROP TABLE \"Ks\".t");
	}
}
