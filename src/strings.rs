//! String strategies used by the demo program and most tests.

use crate::strategy::{EqualityStrategy, HashStrategy};

/// Multiplier applied to every character code.
const CHAR_WEIGHT: i64 = 13;

/// Sums `13 * codepoint` over the characters of a string.
///
/// Arithmetic wraps on overflow. Anagrams collide, which makes this a
/// convenient way to exercise bucket scans.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringHasher;

impl HashStrategy<str> for StringHasher {
    fn hash(&self, key: &str) -> i64 {
        key.chars().fold(0i64, |acc, c| {
            acc.wrapping_add(CHAR_WEIGHT.wrapping_mul(i64::from(u32::from(c))))
        })
    }
}

impl HashStrategy<String> for StringHasher {
    fn hash(&self, key: &String) -> i64 {
        HashStrategy::<str>::hash(self, key.as_str())
    }
}

/// Content equality for strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringEquality;

impl EqualityStrategy<str> for StringEquality {
    fn is_equal(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

impl EqualityStrategy<String> for StringEquality {
    fn is_equal(&self, a: &String, b: &String) -> bool {
        a == b
    }
}
