use tracing::debug;

use crate::models::payload::Payload;

/// Decodes the flat `{key1: value1, key2: value2}` textual payload form.
///
/// Braces are stripped wherever they occur, pairs split on `,`, each pair
/// on `:`. A token that does not split into exactly a key and a value is
/// dropped silently; there is no error path, malformed input degrades to a
/// partial or empty mapping. A value containing `:` or `,` corrupts its
/// token — a limitation of the wire format itself, kept for compatibility
/// with existing senders.
pub fn decode(serialized: &str) -> Payload {
    let stripped: String = serialized
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect();

    let mut payload = Payload::new();

    for token in stripped.split(',') {
        let mut parts = token.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => payload.insert(key.trim(), value.trim()),
            _ => debug!(token, "dropping malformed payload token"),
        }
    }

    payload
}

/// Inverse of [`decode`] for well-behaved payloads, used when attaching a
/// payload string to a displayed notification so a later tap round-trips.
pub fn encode(payload: &Payload) -> String {
    let pairs: Vec<String> = payload
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();

    format!("{{{}}}", pairs.join(", "))
}
