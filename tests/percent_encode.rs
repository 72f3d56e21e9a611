//! Tests for percent encoding, path segments, and queries.

use uri_resolve::percent_encoding::{decode, encode, PercentEncoded};
use uri_resolve::query::{parse_query, recompose_query, QueryMultimap};
use uri_resolve::segments::{decode_segments, encode_segments};
use uri_resolve::ErrorKind;

#[test]
fn encode_decode() {
    const CASES: &[(&str, &str)] = &[
        ("", ""),
        ("-._~", "-._~"),
        ("a b", "a%20b"),
        ("50%", "50%25"),
        ("/path?q#f", "%2Fpath%3Fq%23f"),
        ("\u{00E9}t\u{00E9}", "%C3%A9t%C3%A9"),
        ("\u{1F600}", "%F0%9F%98%80"),
    ];
    for (raw, encoded) in CASES {
        assert_eq!(encode(raw), *encoded, "raw={raw:?}");
        assert_eq!(PercentEncoded::new(raw).to_string(), *encoded, "raw={raw:?}");
        assert_eq!(decode(encoded).as_deref(), Ok(*raw), "encoded={encoded:?}");
    }
}

#[test]
fn decode_lowercase_hex() {
    assert_eq!(decode("%c3%a9").as_deref(), Ok("\u{00E9}"));
}

#[test]
fn decode_errors() {
    for s in ["%", "%4", "%G0", "a%2", "%C3"] {
        assert_eq!(
            decode(s).map_err(|e| e.kind()),
            Err(ErrorKind::MalformedEscape),
            "input={s:?}"
        );
    }
}

#[test]
fn segments() {
    const CASES: &[(&str, &[&str])] = &[
        ("/", &[""]),
        ("//", &["", ""]),
        ("/a/b", &["a", "b"]),
        ("/a/b/", &["a", "b", ""]),
        ("/a%2Fb/c%20d", &["a/b", "c d"]),
    ];
    for (encoded, segments) in CASES {
        assert_eq!(
            decode_segments(encoded).expect("should be decodable"),
            *segments,
            "encoded={encoded:?}"
        );
        assert_eq!(
            encode_segments(*segments).as_deref(),
            Ok(*encoded),
            "segments={segments:?}"
        );
    }
}

#[test]
fn segments_empty() {
    // The empty path has no segments, and no segments are encoded as `/`.
    assert_eq!(decode_segments(""), Ok(Vec::new()));
    assert_eq!(encode_segments(&[] as &[&str]).as_deref(), Ok("/"));
    assert_eq!(encode_segments(&Vec::<String>::new()).as_deref(), Ok("/"));
}

#[test]
fn segments_errors() {
    let err = decode_segments("a/b").expect_err("relative path is not path-abempty");
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
    assert_eq!(err.to_string(), "path-abempty expected");

    let err = decode_segments("/a%zz").expect_err("malformed escape");
    assert_eq!(err.kind(), ErrorKind::MalformedEscape);

    let err = encode_segments("/a/b").expect_err("string is not a sequence");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "array of segments expected");
}

#[test]
fn query_multimap() {
    let map = parse_query(Some("a=1&b&a=%32&c="), true)
        .expect("should be parsable")
        .expect("query is given");
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("a"), Some(Some("1")));
    assert_eq!(map.get("b"), Some(None));
    assert_eq!(map.get("c"), Some(Some("")));
    assert_eq!(map.get("d"), None);
    assert_eq!(map.get_all("a").collect::<Vec<_>>(), [Some("1"), Some("2")]);

    assert_eq!(recompose_query(&map, false), "a=1&b&a=2&c=");
}

#[test]
fn query_absent_and_empty() {
    assert_eq!(parse_query(None, true), Ok(None));
    assert_eq!(parse_query(Some(""), false), Ok(Some(QueryMultimap::new())));
    assert_eq!(recompose_query(&QueryMultimap::new(), true), "");
}

#[test]
fn query_roundtrip_with_encoding() {
    let map: QueryMultimap = vec![
        ("name".to_owned(), Some("J\u{00FC}rgen & co".to_owned())),
        ("flag".to_owned(), None),
        ("eq".to_owned(), Some("a=b".to_owned())),
    ]
    .into();
    let query = recompose_query(&map, true);
    assert_eq!(query, "name=J%C3%BCrgen%20%26%20co&flag&eq=a%3Db");
    assert_eq!(parse_query(Some(query.as_str()), true), Ok(Some(map)));
}

#[test]
fn query_decode_error() {
    let err = parse_query(Some("a=%"), true).expect_err("malformed escape");
    assert_eq!(err.kind(), ErrorKind::MalformedEscape);
    // Without decoding, the raw string is kept.
    assert_eq!(
        parse_query(Some("a=%"), false)
            .expect("should be parsable")
            .expect("query is given")
            .get("a"),
        Some(Some("%"))
    );
}
