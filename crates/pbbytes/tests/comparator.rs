#![expect(missing_docs)]

use pbbytes::{
    AllocError, EncodeOptions, Encoder, SizeWidth, array_equals, data_equals, encode_bytes,
    encode_text, string_equals,
};
use tracing_test::traced_test;

#[test]
fn end_to_end_scenarios() {
    // text round trip
    let hello = encode_text(Some("hello")).unwrap();
    assert_eq!(hello.size(), 5);
    assert_eq!(hello.as_bytes(), "hello".as_bytes());
    assert!(string_equals(Some(&hello), Some("hello")));

    // null text and an absent field
    assert_eq!(encode_text(None).unwrap().size(), 0);
    assert!(string_equals(None, None));

    // byte mismatch at index 1
    let a = encode_bytes(&[0x01, 0x02]).unwrap();
    let b = encode_bytes(&[0x01, 0x03]).unwrap();
    assert!(!array_equals(Some(&a), &b));

    // missing vs empty
    assert!(array_equals(None, &encode_bytes(&[]).unwrap()));

    // binary wrapper
    let aa = encode_bytes(&[0xAA]).unwrap();
    assert!(data_equals(Some(&aa), &[0xAA]));
    assert!(!data_equals(Some(&aa), &[0xAB]));
}

#[test]
fn debug_output_is_readable() {
    let hello = encode_text(Some("hello")).unwrap();
    let empty = encode_text(None).unwrap();
    insta::assert_snapshot!(format!("{hello:?}"), @r#"ByteBuffer { size: 5, bytes: "hello" }"#);
    insta::assert_snapshot!(format!("{empty:?}"), @r#"ByteBuffer { size: 0, bytes: "" }"#);
}

#[test]
fn error_messages() {
    let overflow = AllocError::SizeOverflow {
        requested: 256,
        max: 255,
    };
    let oom = AllocError::OutOfMemory { requested: 64 };
    insta::assert_snapshot!(overflow.to_string(), @"256 bytes exceed the maximum buffer size of 255");
    insta::assert_snapshot!(oom.to_string(), @"out of memory allocating 64 bytes");
}

#[test]
#[traced_test]
fn size_overflow_is_logged() {
    let encoder = Encoder::new(EncodeOptions {
        size_width: SizeWidth::U8,
    });
    let err = encoder.encode_bytes(&[0u8; 256]).unwrap_err();
    assert_eq!(
        err,
        AllocError::SizeOverflow {
            requested: 256,
            max: 255
        }
    );
    assert!(logs_contain("buffer length exceeds size width"));
    assert!(logs_contain("requested=256"));
}

#[test]
#[traced_test]
fn mismatches_are_traced() {
    let actual = encode_bytes(&[0x01, 0x02]).unwrap();
    let expected = encode_bytes(&[0x01, 0x03]).unwrap();
    assert!(!array_equals(Some(&actual), &expected));
    assert!(logs_contain("buffer byte mismatch"));
    assert!(logs_contain("index=1"));

    let longer = encode_bytes(&[0x01, 0x02, 0x03]).unwrap();
    assert!(!array_equals(Some(&longer), &expected));
    assert!(logs_contain("buffer length mismatch"));

    assert!(!array_equals(None, &expected));
    assert!(logs_contain("absent buffer, expected bytes"));
}

#[test]
#[traced_test]
fn equal_buffers_log_nothing() {
    let a = encode_text(Some("same")).unwrap();
    assert!(string_equals(Some(&a), Some("same")));
    assert!(!logs_contain("mismatch"));
}
