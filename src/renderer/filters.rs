use chrono::DateTime;
use log::warn;
use minijinja::ErrorKind;
use regex::Regex;
use std::fmt::Write;

use crate::constants::CREATION_DATE_FORMAT;

// Re-export all the case conversion and string manipulation functions
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case, train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};

/// Tests if a string matches a given regular expression pattern.
/// Invalid patterns never match.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Re-formats an RFC 3339 timestamp with a strftime-style format.
///
/// Used as `{{ creation_timestamp | date("%d %B %Y") }}`; without a format
/// argument the `creation_date` format is used.
pub fn date_filter(value: &str, format: Option<&str>) -> Result<String, minijinja::Error> {
    let timestamp = DateTime::parse_from_rfc3339(value).map_err(|err| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("'{value}' is not an RFC 3339 timestamp"),
        )
        .with_source(err)
    })?;

    let format = format.unwrap_or(CREATION_DATE_FORMAT);
    let mut out = String::new();
    write!(out, "{}", timestamp.format(format)).map_err(|_| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid date format '{format}'"),
        )
    })?;
    Ok(out)
}
