//! Destination table definition.

use postgres::types::Type;

/// Fully qualified destination table.
pub const TABLE_NAME: &str = r#"public."commit""#;

/// Removes the previous table, if any.
pub const DROP_TABLE: &str = r#"drop table if exists public."commit""#;

/// Creates the empty destination table.
pub const CREATE_TABLE: &str = r#"
create table public."commit"
( "commit" text not null primary key
, author text not null
, "date" timestamptz not null
, body text not null
)"#;

/// Opens the binary bulk transfer into the table.
pub const COPY_STATEMENT: &str =
    r#"copy public."commit" ("commit", author, "date", body) from stdin (format binary)"#;

/// Wire types of the copied columns, in column order.
pub const COPY_TYPES: [Type; 4] = [Type::TEXT, Type::TEXT, Type::TIMESTAMPTZ, Type::TEXT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_target_table() {
        assert!(DROP_TABLE.ends_with(TABLE_NAME));
        assert!(CREATE_TABLE.contains(TABLE_NAME));
        assert!(COPY_STATEMENT.contains(TABLE_NAME));
    }

    #[test]
    fn test_copy_types_match_columns() {
        let columns = COPY_STATEMENT
            .split_once('(')
            .and_then(|(_, rest)| rest.split_once(')'))
            .map(|(cols, _)| cols.split(',').count())
            .unwrap();
        assert_eq!(columns, COPY_TYPES.len());
        assert_eq!(COPY_TYPES[2], Type::TIMESTAMPTZ);
    }
}
