//! String maskers, one per sensitivity tier.
//!
//! Every transform is a pure, total function over strings: when the
//! precondition for masking does not hold (too short, empty, not an email),
//! the input is returned unchanged rather than rejected. All transforms
//! operate on Unicode scalar values, never on bytes.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed token emitted for fully redacted values.
pub const MASK_TOKEN: &str = "******";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

/// Returns `true` if `value` has `local@domain.tld` email syntax.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// The VeryHigh-tier transform: replace the entire value with a fixed token.
///
/// The token length is independent of the input length, so the output reveals
/// nothing about the original, including how long it was. Empty strings stay
/// empty.
#[derive(Clone, Debug)]
pub struct FixedMask {
    token: Cow<'static, str>,
}

impl FixedMask {
    /// Uses a custom replacement token.
    #[must_use]
    pub fn new<T>(token: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            token: token.into(),
        }
    }

    /// Applies the transform to a string value.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        self.token.clone().into_owned()
    }
}

impl Default for FixedMask {
    fn default() -> Self {
        Self::new(MASK_TOKEN)
    }
}

/// The High-tier transform: a fixed phone-number-shaped prefix plus the last
/// two characters of the input.
///
/// `"0987654321"` becomes `"XXX-XXX-XX21"`. Inputs shorter than two
/// characters are returned unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ShapeMask {
    mask_char: char,
}

/// The masked prefix shape; `*` positions are replaced by the mask character.
const SHAPE_PATTERN: &str = "***-***-**";

impl ShapeMask {
    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Applies the transform to a string value.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() < 2 {
            return value.to_owned();
        }

        let mut masked: String = SHAPE_PATTERN
            .chars()
            .map(|ch| if ch == '*' { self.mask_char } else { ch })
            .collect();
        masked.extend(&chars[chars.len() - 2..]);
        masked
    }
}

impl Default for ShapeMask {
    fn default() -> Self {
        Self { mask_char: 'X' }
    }
}

/// The Low-tier transform: keep a prefix and a suffix, mask the middle.
///
/// If the keep spans cover the entire value there is nothing safe to hide,
/// and the value is returned unchanged.
#[derive(Clone, Copy, Debug)]
pub struct MiddleMask {
    keep_prefix: usize,
    keep_suffix: usize,
    mask_char: char,
}

impl MiddleMask {
    /// Keeps the first `keep_prefix` and last `keep_suffix` scalar values.
    #[must_use]
    pub fn keep(keep_prefix: usize, keep_suffix: usize) -> Self {
        Self {
            keep_prefix,
            keep_suffix,
            mask_char: '*',
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Applies the transform to a string value.
    ///
    /// Returns the value unchanged when
    /// `len <= keep_prefix + keep_suffix`.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total <= self.keep_prefix + self.keep_suffix {
            return chars.into_iter().collect();
        }

        for ch in &mut chars[self.keep_prefix..(total - self.keep_suffix)] {
            *ch = self.mask_char;
        }
        chars.into_iter().collect()
    }
}

/// Strategy applied to a Medium-tier value that is not email-shaped.
///
/// Both variants are attested defaults; which one a deployment wants is a
/// policy decision, so the choice is a parameter rather than a constant.
#[derive(Clone, Debug)]
pub enum FallbackMask {
    /// Middle-mask the value, keeping a short prefix and suffix visible.
    Partial(MiddleMask),
    /// Replace the value with a fixed opaque token.
    Token(FixedMask),
}

impl FallbackMask {
    /// The default fallback: keep a 3-character prefix, mask the rest.
    #[must_use]
    pub fn partial() -> Self {
        FallbackMask::Partial(MiddleMask::keep(3, 0))
    }

    /// A fallback that replaces the value with [`MASK_TOKEN`].
    #[must_use]
    pub fn opaque() -> Self {
        FallbackMask::Token(FixedMask::default())
    }

    /// A fallback that replaces the value with a custom token.
    #[must_use]
    pub fn token<T>(token: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        FallbackMask::Token(FixedMask::new(token))
    }

    /// Applies the fallback to a string value.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            FallbackMask::Partial(mask) => mask.apply_to(value),
            FallbackMask::Token(mask) => mask.apply_to(value),
        }
    }
}

impl Default for FallbackMask {
    fn default() -> Self {
        Self::partial()
    }
}

/// The Medium-tier transform: mask the local part of an email address.
///
/// `"sing@dev.com"` becomes `"s***@dev.com"`: the first local-part character
/// survives, the remainder of the local part is starred out, and the domain
/// is kept verbatim. Values that do not parse as emails route to the
/// configured [`FallbackMask`].
#[derive(Clone, Debug, Default)]
pub struct EmailMask {
    fallback: FallbackMask,
}

impl EmailMask {
    /// Uses a specific fallback for non-email values.
    #[must_use]
    pub fn new(fallback: FallbackMask) -> Self {
        Self { fallback }
    }

    /// Applies the transform to a string value.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        if !is_email(value) {
            return self.fallback.apply_to(value);
        }

        // The pattern guarantees exactly one '@' with a non-empty local part.
        let Some((local, domain)) = value.split_once('@') else {
            return self.fallback.apply_to(value);
        };
        let mut chars = local.chars();
        let Some(first) = chars.next() else {
            return self.fallback.apply_to(value);
        };
        let stars = "*".repeat(chars.count());
        format!("{first}{stars}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::{is_email, EmailMask, FallbackMask, FixedMask, MiddleMask, ShapeMask, MASK_TOKEN};

    #[test]
    fn fixed_mask_hides_length() {
        let mask = FixedMask::default();
        assert_eq!(mask.apply_to("123456"), MASK_TOKEN);
        assert_eq!(mask.apply_to("a"), MASK_TOKEN);
        assert_eq!(mask.apply_to(&"x".repeat(500)), MASK_TOKEN);
    }

    #[test]
    fn fixed_mask_keeps_empty_empty() {
        assert_eq!(FixedMask::default().apply_to(""), "");
    }

    #[test]
    fn shape_mask_keeps_last_two_digits() {
        let mask = ShapeMask::default();
        assert_eq!(mask.apply_to("0987654321"), "XXX-XXX-XX21");
        assert_eq!(mask.apply_to("12"), "XXX-XXX-XX12");
    }

    #[test]
    fn shape_mask_leaves_short_values_unchanged() {
        let mask = ShapeMask::default();
        assert_eq!(mask.apply_to("1"), "1");
        assert_eq!(mask.apply_to(""), "");
    }

    #[test]
    fn shape_mask_respects_mask_char() {
        let mask = ShapeMask::default().with_mask_char('#');
        assert_eq!(mask.apply_to("0987654321"), "###-###-##21");
    }

    #[test]
    fn middle_mask_keeps_prefix_and_suffix() {
        assert_eq!(MiddleMask::keep(2, 2).apply_to("uwantme"), "uw***me");
        assert_eq!(MiddleMask::keep(1, 1).apply_to("uwantme"), "u*****e");
        assert_eq!(MiddleMask::keep(3, 0).apply_to("not-an-email"), "not*********");
    }

    #[test]
    fn middle_mask_leaves_covered_values_unchanged() {
        let mask = MiddleMask::keep(2, 2);
        assert_eq!(mask.apply_to("abcd"), "abcd");
        assert_eq!(mask.apply_to("abc"), "abc");
        assert_eq!(mask.apply_to(""), "");
    }

    #[test]
    fn middle_mask_counts_chars_not_bytes() {
        assert_eq!(MiddleMask::keep(2, 0).apply_to("秘密数据"), "秘密**");
    }

    #[test]
    fn email_detection() {
        assert!(is_email("sing@dev.com"));
        assert!(is_email("a.b+c@sub.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("no@tld"));
        assert!(!is_email("two@@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn email_mask_keeps_first_char_and_domain() {
        let mask = EmailMask::default();
        assert_eq!(mask.apply_to("sing@dev.com"), "s***@dev.com");
        assert_eq!(mask.apply_to("a@dev.com"), "a@dev.com");
    }

    #[test]
    fn email_mask_routes_non_emails_to_fallback() {
        let partial = EmailMask::default();
        assert_eq!(partial.apply_to("not-an-email"), "not*********");

        let opaque = EmailMask::new(FallbackMask::opaque());
        assert_eq!(opaque.apply_to("not-an-email"), MASK_TOKEN);

        let token = EmailMask::new(FallbackMask::token("<hidden>"));
        assert_eq!(token.apply_to("not-an-email"), "<hidden>");
    }

    #[test]
    fn remasking_a_masked_email_is_not_stable() {
        // "s***@dev.com" no longer matches email syntax ('*' is not a valid
        // local-part character), so it routes to the fallback. Idempotence is
        // explicitly out of contract.
        let mask = EmailMask::default();
        let once = mask.apply_to("sing@dev.com");
        assert_eq!(once, "s***@dev.com");
        let twice = mask.apply_to(&once);
        assert_ne!(twice, once);
    }
}
