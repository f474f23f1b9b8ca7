//! Locale-aware Thai collation for directory ordering.
//!
//! The directory listing is always presented sorted by Thai full name, and
//! Thai ordering is not codepoint order: preposed vowels (เ แ โ ใ ไ) sort
//! under their following consonant. [`ThaiCollator`] wraps the ICU4X
//! collator with the `th` locale so every listing surface orders names the
//! same way.

use std::cmp::Ordering;

use icu::collator::{Collator, CollatorError, CollatorOptions, Strength};
use icu::locid::locale;

/// A reusable collator for the `th` locale.
pub struct ThaiCollator {
    collator: Collator,
}

impl ThaiCollator {
    /// Build a collator for Thai with tertiary strength.
    pub fn new() -> Result<Self, CollatorError> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&locale!("th").into(), options)?;
        Ok(Self { collator })
    }

    /// Compare two strings under Thai collation rules.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    /// Sort items ascending by a Thai string key.
    ///
    /// The sort is stable, so items with identical names keep their
    /// original relative order.
    pub fn sort_by_key<T, F>(&self, items: &mut [T], mut key: F)
    where
        F: FnMut(&T) -> &str,
    {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collator() -> ThaiCollator {
        ThaiCollator::new().expect("th collation data should be compiled in")
    }

    #[test]
    fn consonants_sort_alphabetically() {
        let c = collator();
        assert_eq!(c.compare("กมล", "ประยุทธ"), Ordering::Less);
        assert_eq!(c.compare("ประยุทธ", "สมชาย"), Ordering::Less);
    }

    #[test]
    fn preposed_vowel_sorts_under_following_consonant() {
        // "ไกร" starts with the vowel ไ (U+0E44) which is above ข (U+0E02)
        // in codepoint order, but Thai collation files it under ก.
        let c = collator();
        assert_eq!(c.compare("ไกร", "ขจร"), Ordering::Less);
    }

    #[test]
    fn sort_is_independent_of_input_order() {
        // Dictionary order files ไกร under ก but after every ก+consonant
        // word, so กมล < ไกร < สมชาย.
        let c = collator();
        let mut names = vec!["สมชาย", "ไกร", "กมล"];
        c.sort_by_key(&mut names, |n| n);
        assert_eq!(names, vec!["กมล", "ไกร", "สมชาย"]);

        let mut reversed = vec!["ไกร", "สมชาย", "กมล"];
        c.sort_by_key(&mut reversed, |n| n);
        assert_eq!(reversed, names);
    }

    #[test]
    fn identical_names_keep_relative_order() {
        let c = collator();
        let mut pairs = vec![("สมชาย", 1), ("กมล", 2), ("สมชาย", 3)];
        c.sort_by_key(&mut pairs, |(n, _)| n);
        assert_eq!(pairs, vec![("กมล", 2), ("สมชาย", 1), ("สมชาย", 3)]);
    }
}
