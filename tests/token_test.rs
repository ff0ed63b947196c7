use marathon_pace::token::{DEFAULT_MINUTES, decode, encode};
use proptest::prelude::*;

#[test]
fn test_encode_reference_vectors() {
    assert_eq!(encode(240.0), "4-00-00");
    assert_eq!(encode(210.0), "3-30-00");
    assert_eq!(encode(125.0), "2-05-00");
}

#[test]
fn test_decode_reference_vectors() {
    assert_eq!(decode("3-30-00"), 210.0);
    assert_eq!(decode("3:30:00"), 210.0);
    assert_eq!(decode("x"), DEFAULT_MINUTES);
}

#[test]
fn test_decode_permissive_segments() {
    // Missing seconds segment defaults to 0
    assert_eq!(decode("2-45"), 165.0);
    // Non-numeric segments zero-fill rather than reject
    assert_eq!(decode("abc:15:00"), 15.0);
    // Mixed separators still normalize
    assert_eq!(decode("3-30:00"), 210.0);
}

proptest! {
    /// Round-trip holds exactly for whole-minute targets with no seconds.
    #[test]
    fn roundtrip_whole_minutes(minutes in 0u32..=4000) {
        let m = minutes as f64;
        prop_assert_eq!(decode(&encode(m)), m);
    }

    /// Encoding always drops sub-minute precision: the token of any value
    /// equals the token of its floor, and the seconds segment is "00".
    #[test]
    fn encode_drops_seconds(minutes in 0u32..=4000, frac in 0.0f64..1.0) {
        let token = encode(minutes as f64 + frac);
        prop_assert_eq!(&token, &encode(minutes as f64));
        prop_assert!(token.ends_with("-00"));
    }

    /// Decode is total over arbitrary strings.
    #[test]
    fn decode_never_panics(s in ".*") {
        let _ = decode(&s);
    }
}
