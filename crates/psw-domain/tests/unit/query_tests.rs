//! Query normalization tests

use psw_domain::value_objects::{NormalizedQuery, normalize};

#[test]
fn test_named_and_octal_newline_share_canonical_form() {
    assert_eq!(normalize("\\n"), "\\x0a");
    assert_eq!(normalize("\\012"), "\\x0a");
    assert_eq!(normalize("\\12"), "\\x0a");
}

#[test]
fn test_all_named_escapes() {
    assert_eq!(
        normalize("\\a\\b\\t\\n\\v\\f\\r\\\\"),
        "\\x07\\x08\\x09\\x0a\\x0b\\x0c\\x0d\\x5c"
    );
}

#[test]
fn test_octal_takes_at_most_three_digits() {
    assert_eq!(normalize("\\1234"), "\\x534");
    assert_eq!(normalize("\\0"), "\\x00");
    assert_eq!(normalize("\\777"), "\\xff");
}

#[test]
fn test_hex_tokens_are_kept_and_lowercased() {
    assert_eq!(normalize("\\x0A\\xff"), "\\x0a\\xff");
}

#[test]
fn test_escaped_backslash_is_not_rescanned() {
    // `\\n` is a backslash followed by a literal n
    assert_eq!(normalize("\\\\n"), "\\x5cn");
    // `\\012` is a backslash followed by the digits 012
    assert_eq!(normalize("\\\\012"), "\\x5c012");
}

#[test]
fn test_unknown_escapes_pass_through() {
    assert_eq!(normalize("\\q\\8"), "\\q\\8");
    assert_eq!(normalize("\\xg1"), "\\xg1");
    assert_eq!(normalize("trailing\\"), "trailing\\");
}

#[test]
fn test_plain_queries_are_unchanged() {
    for query in ["", "GET / HTTP/1.1", "flag{", "caf\u{e9} ünïcode", "a\tb"] {
        assert_eq!(normalize(query), query);
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let samples = [
        "",
        "plain",
        "\\n",
        "\\012\\n",
        "\\\\n",
        "\\x0A",
        "\\q\\\\\\x4",
        "\\777\\08",
        "mixed \\r\\n\\t and \\x41\\101",
        "trailing\\",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_normalized_query_serializes_as_string() {
    let query = NormalizedQuery::new("a\\n");
    assert_eq!(query.as_str(), "a\\x0a");
    assert_eq!(serde_json::to_string(&query).unwrap(), "\"a\\\\x0a\"");
}
