use percent_encoding::percent_decode_str;

use crate::http::functions::{build_url, encode_uri_component};

#[test]
fn no_params_means_no_query_string() {
    assert_eq!(
        build_url("http://localhost:8080", "/files", &[]),
        "http://localhost:8080/files"
    );
}

#[test]
fn params_keep_order_and_only_values_are_encoded() {
    let url = build_url(
        "http://localhost:8080",
        "/chunk",
        &[("file", "a b.txt"), ("chunkNum", "3")],
    );
    assert_eq!(url, "http://localhost:8080/chunk?file=a%20b.txt&chunkNum=3");
}

#[test]
fn reserved_characters_are_escaped_but_marks_are_kept() {
    assert_eq!(encode_uri_component("a b&c=d!'()~*"), "a%20b%26c%3Dd!'()~*");
    assert_eq!(encode_uri_component("x-y_z.txt"), "x-y_z.txt");
}

#[test]
fn space_and_plus_never_become_plus() {
    let encoded = encode_uri_component("a+b c");
    assert_eq!(encoded, "a%2Bb%20c");
    assert!(!encoded.contains(' '));
}

#[test]
fn non_ascii_is_utf8_percent_encoded() {
    assert_eq!(encode_uri_component("文件.txt"), "%E6%96%87%E4%BB%B6.txt");
}

#[test]
fn decoding_restores_the_original_value() {
    for original in ["report 2024.csv", "50%/half?&#", "文件 名.bin", "~!*()'", ""] {
        let encoded = encode_uri_component(original);
        let decoded = percent_decode_str(&encoded)
            .decode_utf8()
            .expect("解码失败");
        assert_eq!(decoded, original);
    }
}
