pub use courier_utils_derive::trace_instrument;

mod macros;

/// The version string reported by the command line interface.
pub fn courier_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Parses a `key=value` pair as passed on the command line.
///
/// #### Example
/// ```rust
/// # use courier_utils::parse_key_value;
/// assert_eq!(
///     parse_key_value("name=An").unwrap(),
///     ("name".to_owned(), "An".to_owned())
/// );
/// assert!(parse_key_value("name").is_err());
/// ```
pub fn parse_key_value(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{input}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{input}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
