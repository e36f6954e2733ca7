//! Conversion of identifier naming conventions.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_CAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
static ALL_CAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Converts a `camelCase` or `PascalCase` name to `snake_case`.
///
/// This runs two substitution passes before lower-casing:
///
/// 1. An underscore goes before every capitalized word that follows
///    any other character (`CamelCase` -> `Camel_Case`).
///
/// 2. An underscore goes between a lowercase letter or digit and a
///    following uppercase letter (`getHTTP` -> `get_HTTP`).
///
/// Runs of capitals are not split any further, so `HTTPServer` turns
/// into `http_server` but `ABC` stays `abc`. Known field names rely
/// on this exact output.
///
/// ```
/// use ottdadmin_utils::case::camel_to_snake;
///
/// assert_eq!(camel_to_snake("CamelCase"), "camel_case");
/// assert_eq!(camel_to_snake("simpleWord"), "simple_word");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let s1 = FIRST_CAP_RE.replace_all(name, "${1}_${2}");
    ALL_CAP_RE.replace_all(&s1, "${1}_${2}").to_lowercase()
}
