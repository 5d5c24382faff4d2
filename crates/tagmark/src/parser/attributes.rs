//! Attribute parser for tag headers.
//!
//! Extracts `name="value"` and `name='value'` pairs from the text between a
//! tag name and its closing bracket.

use std::collections::BTreeMap;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::char,
    sequence::{delimited, separated_pair},
};

/// Parse an attribute name: one or more ASCII word characters.
fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Parse a quoted value. The closing quote must match the opening one.
fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    ))(input)
}

/// Parse one `name=<quoted>` pair.
fn parse_attribute(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(parse_name, char('='), parse_quoted)(input)
}

/// Parse every attribute in `input`.
///
/// Fragments that are not a well-formed pair are skipped. A repeated name
/// keeps the value of its last occurrence.
///
/// # Examples
///
/// ```
/// use tagmark::parser::parse_attributes;
///
/// let attrs = parse_attributes(r#" type="primary" size='large' disabled"#);
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs["type"], "primary");
/// assert_eq!(attrs["size"], "large");
/// ```
pub fn parse_attributes(input: &str) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        match parse_attribute(rest) {
            Ok((remaining, (name, value))) => {
                attrs.insert(name.to_string(), value.to_string());
                rest = remaining;
            }
            Err(_) => rest = &rest[c.len_utf8()..],
        }
    }

    attrs
}
