//! Parser for the `key=value;` lists used by `options` and `se_private_data`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed key=value pair: '{0}'")]
pub struct MalformedPair(pub String);

/// Iterates over the pairs of a `;`-delimited list.
///
/// Empty elements are skipped. An element without `=` yields a
/// `MalformedPair` for that element only; the iterator carries on with the
/// rest of the list.
pub fn pairs(input: &str) -> impl Iterator<Item = Result<(&str, &str), MalformedPair>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(|element| {
            element
                .split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| MalformedPair(element.to_string()))
        })
}
