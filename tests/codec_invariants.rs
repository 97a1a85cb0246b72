use huffman_core::codec::HuffmanCodec;
use huffman_core::types::Code;

fn codec(text: &[u8]) -> HuffmanCodec {
    HuffmanCodec::from_text(text).expect("non-empty text must build")
}

const SAMPLE_TEXTS: &[&[u8]] = &[
    b"aabbbcc",
    b"aaaa",
    b"ab",
    b"this is an example for huffman encoding",
    b"mississippi river basin",
    b"\x00\x01\x02\x03\x04\x05\xff\xfe\x00\x00\x01",
];

#[test]
fn invariant_codes_are_prefix_free() {
    for &text in SAMPLE_TEXTS {
        let codec = codec(text);
        let codes: Vec<(u8, &Code)> = codec.code_table().iter().collect();

        for &(symbol_a, code_a) in &codes {
            for &(symbol_b, code_b) in &codes {
                if symbol_a == symbol_b {
                    continue;
                }
                assert!(
                    !code_a.is_proper_prefix_of(code_b),
                    "code {code_a} of {symbol_a:#04x} is a prefix of code {code_b} of {symbol_b:#04x}"
                );
            }
        }
    }
}

#[test]
fn invariant_weight_conservation() {
    for &text in SAMPLE_TEXTS {
        let codec = codec(text);

        let frequency_sum: u64 = codec.frequencies().iter().map(|(_, count)| count).sum();
        assert_eq!(codec.tree().total_weight(), frequency_sum);
        assert_eq!(codec.tree().total_weight(), text.len() as u64);
    }
}

#[test]
fn invariant_one_leaf_per_distinct_symbol() {
    for &text in SAMPLE_TEXTS {
        let codec = codec(text);

        assert_eq!(codec.tree().leaf_count(), codec.frequencies().distinct());
        assert_eq!(codec.code_table().len(), codec.frequencies().distinct());
    }
}

#[test]
fn invariant_encoded_never_exceeds_fixed_width() {
    for &text in SAMPLE_TEXTS {
        let codec = codec(text);
        let encoded = codec.encode(text).unwrap();

        assert!(
            encoded.len() <= text.len() * 8,
            "encoded {} bits exceeds fixed-width {} bits",
            encoded.len(),
            text.len() * 8
        );
    }
}

#[test]
fn invariant_frequent_symbols_get_short_codes() {
    for &text in SAMPLE_TEXTS {
        let codec = codec(text);

        for (symbol_a, count_a) in codec.frequencies().iter() {
            for (symbol_b, count_b) in codec.frequencies().iter() {
                if count_a > count_b {
                    let len_a = codec.code_table().code(symbol_a).unwrap().len();
                    let len_b = codec.code_table().code(symbol_b).unwrap().len();
                    assert!(
                        len_a <= len_b,
                        "symbol {symbol_a:#04x} (count {count_a}) has a longer code than {symbol_b:#04x} (count {count_b})"
                    );
                }
            }
        }
    }
}
