use push_router::{codec, models::payload::Payload};

/// Test: Well-formed pairs decode with keys and values trimmed
#[test]
fn test_decode_well_formed_pairs() {
    let payload = codec::decode("{type: complaint_replay, complaint_id: 42}");

    assert_eq!(payload.get("type"), Some("complaint_replay"));
    assert_eq!(payload.get("complaint_id"), Some("42"));
    assert_eq!(payload.len(), 2);
}

/// Test: Surrounding whitespace is stripped from keys and values
#[test]
fn test_decode_trims_whitespace() {
    let payload = codec::decode("{  type :   block  }");

    assert_eq!(payload.get("type"), Some("block"));
}

/// Test: Empty input decodes to an empty mapping
#[test]
fn test_decode_empty_string() {
    let payload = codec::decode("");

    assert!(payload.is_empty());
}

/// Test: A single-pair payload decodes as expected
#[test]
fn test_decode_single_pair() {
    let payload = codec::decode("{type: block}");

    assert_eq!(payload.get("type"), Some("block"));
    assert_eq!(payload.len(), 1);
}

/// Test: Tokens without a colon are all dropped silently
#[test]
fn test_decode_drops_colonless_tokens() {
    let payload = codec::decode("bad,token,here");

    assert!(payload.is_empty());
}

/// Test: Braces are stripped wherever they occur, not only at the ends
#[test]
fn test_decode_strips_interior_braces() {
    let payload = codec::decode("ty{pe: bl}ock");

    assert_eq!(payload.get("type"), Some("block"));
}

/// Test: A value containing a colon corrupts only its own token
#[test]
fn test_decode_value_with_colon_drops_token() {
    let payload = codec::decode("{url: https://example.com, type: block}");

    assert_eq!(payload.get("url"), None);
    assert_eq!(payload.get("type"), Some("block"));
    assert_eq!(payload.len(), 1);
}

/// Test: Duplicate keys keep the last value written
#[test]
fn test_decode_duplicate_key_last_write_wins() {
    let payload = codec::decode("{type: first, type: second}");

    assert_eq!(payload.get("type"), Some("second"));
    assert_eq!(payload.len(), 1);
}

/// Test: Braces-optional form decodes the same as the braced form
#[test]
fn test_decode_braces_optional() {
    let braced = codec::decode("{type: block, order_id: 7}");
    let bare = codec::decode("type: block, order_id: 7");

    assert_eq!(braced, bare);
}

/// Test: Encode produces the braced comma-separated form in insertion order
#[test]
fn test_encode_format() {
    let payload: Payload = [("type", "trainer_changed"), ("order_id", "7")]
        .into_iter()
        .collect();

    assert_eq!(codec::encode(&payload), "{type: trainer_changed, order_id: 7}");
}

/// Test: Encoding an empty payload yields only the braces
#[test]
fn test_encode_empty_payload() {
    assert_eq!(codec::encode(&Payload::new()), "{}");
}

/// Test: A well-behaved payload survives an encode/decode round trip
#[test]
fn test_encode_decode_round_trip() {
    let payload: Payload = [("type", "complaint_replay"), ("complaint_id", "42")]
        .into_iter()
        .collect();

    assert_eq!(codec::decode(&codec::encode(&payload)), payload);
}
