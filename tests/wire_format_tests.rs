use logfmt_kv::escape::{escape, format_key, format_value, ESCAPE_TABLE};
use logfmt_kv::{Encoder, Line};

fn line_of(pairs: &[(&str, &str)]) -> String {
    let mut line = Line::new();
    for (key, value) in pairs {
        line.kv_str(key, value);
    }
    String::from_utf8(line.into_bytes()).unwrap()
}

#[test]
fn test_no_leading_or_trailing_space() {
    let out = line_of(&[("a", "1"), ("b", "2")]);
    println!("Line: {:?}", out);
    assert!(!out.starts_with(' '));
    assert!(!out.ends_with(" \n"));
    assert_eq!(out, "a=1 b=2\n");
}

#[test]
fn test_key_is_never_quoted() {
    let out = line_of(&[("my \"key\"", "v")]);
    assert_eq!(out, "my_\\\"key\\\"=v\n");
    assert!(!out.starts_with('"'));
}

#[test]
fn test_equals_sign_in_value_stays_bare() {
    // only escaping and spaces trigger quoting
    assert_eq!(line_of(&[("q", "a=b")]), "q=a=b\n");
}

#[test]
fn test_all_escapes_in_one_value() {
    let value = "\\\n\r\t\x08\x0c\x0b\0\"";
    let out = line_of(&[("v", value)]);
    assert_eq!(out, "v=\"\\\\\\n\\r\\t\\b\\f\\v\\0\\\"\"\n");
}

#[test]
fn test_escape_table_order_starts_with_backslash() {
    assert_eq!(ESCAPE_TABLE[0], (b'\\', b'\\'));
    assert_eq!(ESCAPE_TABLE.len(), 9);
}

#[test]
fn test_sequential_replacement_matches_single_pass() {
    let input: &[u8] = b"x\\y\nz\"\t\0end";
    let mut sequential = input.to_vec();
    for (sym, replace) in ESCAPE_TABLE {
        let mut next = Vec::with_capacity(sequential.len());
        for &b in &sequential {
            if b == sym {
                next.push(b'\\');
                next.push(replace);
            } else {
                next.push(b);
            }
        }
        sequential = next;
    }
    assert_eq!(&*escape(input), sequential.as_slice());
}

#[test]
fn test_utf8_passthrough() {
    assert_eq!(line_of(&[("città", "naïve")]), "città=naïve\n");
    assert_eq!(
        line_of(&[("emoji", "a 🚀")]),
        "emoji=\"a 🚀\"\n"
    );
}

#[test]
fn test_non_utf8_bytes_passthrough() {
    let mut line = Line::new();
    line.kv(b"raw", &[0xff, 0xfe]);
    assert_eq!(line.bytes(), &[b'r', b'a', b'w', b'=', 0xff, 0xfe, b'\n']);
}

#[test]
fn test_key_spaces_and_escapes_together() {
    assert_eq!(&*format_key(b"a b\tc"), b"a_b\\tc");
}

#[test]
fn test_value_length_change_quotes_without_space() {
    assert_eq!(&*format_value(b"tab\there"), b"\"tab\\there\"");
}

#[test]
fn test_streaming_multiple_lines() {
    let mut encoder = Encoder::new(Vec::new());
    for i in 0..3u8 {
        encoder.write_kv_str("i", &i.to_string()).unwrap();
        encoder.write_kv_str("sq", &(i * i).to_string()).unwrap();
        encoder.write_line().unwrap();
    }
    assert_eq!(
        String::from_utf8(encoder.into_inner()).unwrap(),
        "i=0 sq=0\ni=1 sq=1\ni=2 sq=4\n"
    );
}
