//! `application/x-www-form-urlencoded` body decoding.
//!
//! Decoding is strict where it matters: a malformed percent escape or a
//! non-UTF-8 decode result is a reported [`HttpError::MalformedEncoding`],
//! never a silent pass-through.

use crate::error::HttpError;
use std::collections::HashMap;

/// Decode a form-encoded body into a field map.
///
/// Pairs split on `&` (empty segments skipped), key and value split on the
/// first `=`. A pair with no `=` maps the key to an empty string. Duplicate
/// keys keep the last assignment. An empty body yields an empty map.
pub fn decode(body: &str) -> Result<HashMap<String, String>, HttpError> {
    let mut fields = HashMap::new();
    for pair in body.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = match pair.find('=') {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };
        fields.insert(percent_decode(key)?, percent_decode(value)?);
    }
    Ok(fields)
}

/// Percent-decode one key or value, with `+` as space.
fn percent_decode(s: &str) -> Result<String, HttpError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_digit);
                let lo = bytes.get(i + 2).copied().and_then(hex_digit);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        return Err(HttpError::MalformedEncoding {
                            input: s.to_string(),
                        })
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| HttpError::MalformedEncoding {
        input: s.to_string(),
    })
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
