//! Tests for SSE parsing

use super::*;
use proptest::prelude::*;

fn delta(content: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({"choices": [{"delta": {"content": content}}]})
    )
}

fn parser() -> SseParser<OpenAiEventParser> {
    SseParser::new(OpenAiEventParser)
}

#[test]
fn test_parse_single_event() {
    let mut sse = parser();
    let chunks = sse.parse_chunk(&Bytes::from(delta("{\"sugg")));
    assert_eq!(chunks, vec!["{\"sugg".to_string()]);
}

#[test]
fn test_parse_multiple_events_in_one_chunk() {
    let mut sse = parser();
    let body = format!("{}{}", delta("Hello"), delta(" world"));
    let chunks = sse.parse_chunk(&Bytes::from(body));
    assert_eq!(chunks, vec!["Hello".to_string(), " world".to_string()]);
}

#[test]
fn test_line_split_across_chunks() {
    let mut sse = parser();
    let event = delta("艾琳");
    let (first, second) = event.split_at(15);

    assert!(sse.parse_chunk(&Bytes::from(first.to_string())).is_empty());
    let chunks = sse.parse_chunk(&Bytes::from(second.to_string()));
    assert_eq!(chunks, vec!["艾琳".to_string()]);
}

#[test]
fn test_utf8_split_across_chunks() {
    let mut sse = parser();
    let event = delta("艾").into_bytes();
    let split = event.iter().position(|&b| b >= 0x80).unwrap() + 1;

    assert!(sse.parse_chunk(&Bytes::copy_from_slice(&event[..split])).is_empty());
    let chunks = sse.parse_chunk(&Bytes::copy_from_slice(&event[split..]));
    assert_eq!(chunks, vec!["艾".to_string()]);
}

#[test]
fn test_done_marker_stops_parsing() {
    let mut sse = parser();
    let body = format!("{}data: [DONE]\n\n{}", delta("a"), delta("b"));
    let chunks = sse.parse_chunk(&Bytes::from(body));
    assert_eq!(chunks, vec!["a".to_string()]);
    assert!(sse.is_done());
    assert!(sse.parse_chunk(&Bytes::from(delta("c"))).is_empty());
}

#[test]
fn test_ignores_event_and_comment_lines() {
    let mut sse = parser();
    let body = format!(": keep-alive\nevent: message\n{}", delta("x"));
    let chunks = sse.parse_chunk(&Bytes::from(body));
    assert_eq!(chunks, vec!["x".to_string()]);
}

#[test]
fn test_data_without_space_after_colon() {
    let mut sse = parser();
    let chunks = sse.parse_chunk(&Bytes::from(
        "data:{\"choices\":[{\"delta\":{\"content\":\"hi\"}}]}\n",
    ));
    assert_eq!(chunks, vec!["hi".to_string()]);
}

#[test]
fn test_role_only_delta_yields_nothing() {
    let mut sse = parser();
    let chunks = sse.parse_chunk(&Bytes::from(
        "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n",
    ));
    assert!(chunks.is_empty());
}

#[test]
fn test_invalid_utf8_is_dropped() {
    let mut sse = parser();
    assert!(sse.parse_chunk(&Bytes::from_static(&[0xff, 0xfe, b'\n'])).is_empty());
    let chunks = sse.parse_chunk(&Bytes::from(delta("ok")));
    assert_eq!(chunks, vec!["ok".to_string()]);
}

#[test]
fn test_invalid_byte_keeps_valid_prefix() {
    let mut sse = parser();
    let mut chunk = delta("ok").into_bytes();
    chunk.extend_from_slice(&[0xff]);
    chunk.extend_from_slice(delta("next").as_bytes());

    let chunks = sse.parse_chunk(&Bytes::from(chunk));
    assert_eq!(chunks, vec!["ok".to_string(), "next".to_string()]);
}

#[test]
fn test_invalid_byte_before_partial_character() {
    let mut sse = parser();
    let event = delta("艾").into_bytes();
    let split = event.iter().position(|&b| b >= 0x80).unwrap() + 1;

    let mut first = vec![0xff];
    first.extend_from_slice(&event[..split]);
    assert!(sse.parse_chunk(&Bytes::from(first)).is_empty());

    let chunks = sse.parse_chunk(&Bytes::copy_from_slice(&event[split..]));
    assert_eq!(chunks, vec!["艾".to_string()]);
}

#[test]
fn test_openai_parser_rejects_garbage() {
    assert_eq!(OpenAiEventParser.parse_data("not json"), None);
    assert_eq!(OpenAiEventParser.parse_data("{\"choices\":[]}"), None);
    assert!(OpenAiEventParser.is_done("[DONE]"));
    assert!(!OpenAiEventParser.is_done("{}"));
}

// Splitting a stream at any byte position yields the same concatenated text
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_chunk_boundaries_do_not_matter(
        pieces in prop::collection::vec("[a-z艾琳慕影 {}\":,]{1,8}", 1..6),
        split_seed in 0usize..1000,
    ) {
        let body: String = pieces.iter().map(|p| delta(p)).collect();
        let bytes = body.into_bytes();
        let split = split_seed % (bytes.len() + 1);

        let mut sse = parser();
        let mut text = String::new();
        for chunk in sse.parse_chunk(&Bytes::copy_from_slice(&bytes[..split])) {
            text.push_str(&chunk);
        }
        for chunk in sse.parse_chunk(&Bytes::copy_from_slice(&bytes[split..])) {
            text.push_str(&chunk);
        }

        prop_assert_eq!(text, pieces.concat());
    }
}
