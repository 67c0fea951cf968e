//! Edge-case coverage for the string transforms.
//!
//! These tests focus on behavior across Unicode scalar values (including
//! multi-byte characters) and on boundary cases such as empty or very short
//! inputs where transforms leave values unchanged.

use fieldmask::{EmailMask, FallbackMask, FixedMask, MiddleMask, ShapeMask, MASK_TOKEN};

#[test]
fn test_empty_strings() {
    // Empty strings are left unchanged by every transform.
    assert_eq!(FixedMask::default().apply_to(""), "");
    assert_eq!(ShapeMask::default().apply_to(""), "");
    assert_eq!(MiddleMask::keep(2, 2).apply_to(""), "");
    assert_eq!(EmailMask::default().apply_to(""), "");
}

#[test]
fn test_single_character() {
    assert_eq!(FixedMask::default().apply_to("x"), MASK_TOKEN);
    assert_eq!(ShapeMask::default().apply_to("x"), "x");
    assert_eq!(MiddleMask::keep(1, 1).apply_to("x"), "x");
}

#[test]
fn test_exact_boundary_lengths() {
    // Two characters is the shortest phone-shaped input that gets masked.
    assert_eq!(ShapeMask::default().apply_to("21"), "XXX-XXX-XX21");

    // keep_prefix + keep_suffix == len leaves the value unchanged.
    assert_eq!(MiddleMask::keep(2, 2).apply_to("abcd"), "abcd");
    // One character more, and the middle is masked.
    assert_eq!(MiddleMask::keep(2, 2).apply_to("abcde"), "ab*de");
}

#[test]
fn test_unicode_multibyte() {
    // Chinese characters (3 bytes each in UTF-8) count as single characters.
    assert_eq!(MiddleMask::keep(1, 1).apply_to("秘密数据"), "秘**据");

    // The phone shape keeps the last two characters, not bytes.
    assert_eq!(ShapeMask::default().apply_to("０９８７２１"), "XXX-XXX-XX２１");
}

#[test]
fn test_unicode_emoji() {
    let masked = MiddleMask::keep(2, 2).apply_to("ab🔒🔑cd");
    assert_eq!(masked, "ab**cd");
}

#[test]
fn test_whitespace_only() {
    assert_eq!(MiddleMask::keep(1, 1).apply_to("     "), " *** ");
    assert_eq!(FixedMask::default().apply_to("   "), MASK_TOKEN);
}

#[test]
fn test_very_long_string() {
    let long = "x".repeat(100_000);

    // Fixed masking reveals nothing about length.
    assert_eq!(FixedMask::default().apply_to(&long), MASK_TOKEN);

    // Middle masking preserves length.
    let masked = MiddleMask::keep(2, 2).apply_to(&long);
    assert_eq!(masked.chars().count(), 100_000);
    assert!(masked.starts_with("xx"));
    assert!(masked.ends_with("xx"));
    assert!(masked[2..masked.len() - 2].chars().all(|ch| ch == '*'));
}

#[test]
fn test_email_with_subdomains_and_plus_addressing() {
    let mask = EmailMask::default();
    assert_eq!(
        mask.apply_to("first.last+tag@mail.sub.example.org"),
        "f*************@mail.sub.example.org"
    );
}

#[test]
fn test_email_single_character_local_part() {
    // Nothing to star out; the domain still anchors recognizability.
    assert_eq!(EmailMask::default().apply_to("a@dev.com"), "a@dev.com");
}

#[test]
fn test_almost_emails_route_to_fallback() {
    let mask = EmailMask::default();
    for almost in ["@dev.com", "sing@", "sing@dev", "sing dev.com", "sing@@dev.com"] {
        let masked = mask.apply_to(almost);
        // The fallback never panics and never leaves a long value intact.
        if almost.chars().count() > 3 {
            assert_ne!(masked, almost, "fallback should alter {almost:?}");
        }
    }
}

#[test]
fn test_fallback_token_ignores_input_shape() {
    let mask = EmailMask::new(FallbackMask::token("<redacted>"));
    assert_eq!(mask.apply_to("anything at all"), "<redacted>");
    assert_eq!(mask.apply_to(""), "");
}

#[test]
fn test_shape_mask_output_is_fixed_width() {
    let mask = ShapeMask::default();
    for input in ["12", "123456", "0987654321", "+66-2-123-4567"] {
        let masked = mask.apply_to(input);
        assert_eq!(masked.chars().count(), 12, "masked {input:?} to {masked:?}");
    }
}

#[test]
fn test_middle_mask_zero_keeps_masks_everything() {
    assert_eq!(MiddleMask::keep(0, 0).apply_to("abc"), "***");
    // Except the empty string, which has nothing to mask.
    assert_eq!(MiddleMask::keep(0, 0).apply_to(""), "");
}
