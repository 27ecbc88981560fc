//! URL encoding for request path segments
//!
//! The geocoding endpoint takes the search text as a path segment, so
//! spaces become `%20` rather than the `+` used in query strings.

/// Percent-encode a string for use as a single URL path segment
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`, `0-9`,
/// `-`, `_`, `.`, `~`) and the comma, which the geocoding API uses as a
/// separator inside free-text queries.
pub fn encode_path_segment(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' | ',' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{b:02X}"));
                }
            },
        }
    }
    result
}
