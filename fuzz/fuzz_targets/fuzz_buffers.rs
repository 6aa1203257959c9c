#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbbytes::{
    EncodeOptions, Encoder, SizeWidth, array_equals, data_equals, encode_bytes, encode_text,
    string_equals,
};

#[derive(Debug, Arbitrary)]
struct Input {
    actual: Vec<u8>,
    expected: Vec<u8>,
    text: Option<String>,
    width: u8,
}

fuzz_target!(|input: Input| {
    let actual = encode_bytes(&input.actual).expect("default width holds fuzz input");
    let expected = encode_bytes(&input.expected).expect("default width holds fuzz input");

    assert_eq!(actual.size(), input.actual.len());
    assert_eq!(actual.as_bytes(), input.actual.as_slice());
    assert_eq!(
        array_equals(Some(&actual), &expected),
        input.actual == input.expected
    );
    assert_eq!(array_equals(None, &expected), input.expected.is_empty());
    assert!(data_equals(Some(&actual), &input.actual));

    let text = encode_text(input.text.as_deref()).expect("default width holds fuzz input");
    assert_eq!(text.as_bytes(), input.text.as_deref().unwrap_or("").as_bytes());
    assert!(string_equals(Some(&text), input.text.as_deref()));

    let size_width = match input.width % 3 {
        0 => SizeWidth::U8,
        1 => SizeWidth::U16,
        _ => SizeWidth::U32,
    };
    let limited = Encoder::new(EncodeOptions { size_width }).encode_bytes(&input.actual);
    assert_eq!(limited.is_ok(), input.actual.len() <= size_width.max_len());
});
