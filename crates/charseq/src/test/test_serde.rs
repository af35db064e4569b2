// Tests for serde support (enabled with --features serde)
use crate::{CharSeq, Seq};

#[test]
fn test_char_seq_as_json_string() {
    let seq = CharSeq::from("hamburger");
    assert_eq!(serde_json::to_string(&seq).unwrap(), r#""hamburger""#);

    let back: CharSeq = serde_json::from_str(r#""hamburger""#).unwrap();
    assert_eq!(back, seq);
}

#[test]
fn test_seq_as_json_array() {
    let seq: Seq<i32> = vec![1, 2, 3].into();
    assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2,3]");

    let back: Seq<i32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(back, seq);
}

#[test]
fn test_nested_seq_of_char_seq() {
    let parts = CharSeq::from("a,b").split(",").unwrap();
    assert_eq!(serde_json::to_string(&parts).unwrap(), r#"["a","b"]"#);
}
