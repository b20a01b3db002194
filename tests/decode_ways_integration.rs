use algo_drills::{
    problems::decode_ways::{all_decodings, decode_table, num_decodings, DecodeWays},
    AlgoError,
};

#[test]
fn documented_cases() {
    assert_eq!(num_decodings("12"), 2);
    assert_eq!(num_decodings("226"), 3);
    assert_eq!(num_decodings("06"), 0);
    assert_eq!(num_decodings(""), 0);
    assert_eq!(num_decodings("0"), 0);
    assert_eq!(num_decodings("10"), 1);
    assert_eq!(num_decodings("100"), 0);
    assert_eq!(num_decodings("27"), 1);
    assert_eq!(num_decodings("2101"), 1);
}

#[test]
fn table_prefixes() {
    assert_eq!(decode_table("226"), vec![1, 1, 2, 3]);
    assert_eq!(decode_table("11106"), vec![1, 1, 2, 3, 2, 2]);
    assert!(decode_table("06").is_empty());
    assert!(decode_table("").is_empty());
}

#[test]
fn enumeration() {
    assert_eq!(all_decodings("226"), vec!["bbf", "bz", "vf"]);
    assert_eq!(all_decodings("11106"), vec!["aajf", "kjf"]);
    assert!(all_decodings("").is_empty());
    assert!(all_decodings("30").is_empty());
}

#[test]
fn all_ones_are_fibonacci() {
    let mut fib = (1u128, 1u128);
    for len in 1..60 {
        let s = "1".repeat(len);
        assert_eq!(num_decodings(&s), fib.1, "len={len}");
        fib = (fib.1, fib.0 + fib.1);
    }
}

#[test]
fn very_long_input_saturates() {
    assert_eq!(num_decodings(&"1".repeat(1_000)), u128::MAX);
}

#[test]
fn validating_constructor() {
    assert_eq!(DecodeWays::try_new("226").map(|d| d.count()), Ok(3));
    assert_eq!(
        DecodeWays::try_new("12a4").map(|d| d.count()),
        Err(AlgoError::InvalidDigit {
            index: 2,
            found: 'a'
        })
    );
}
