//! Helpers for the capability masks filled by
//! [`event_type_bits`][crate::event_type_bits].
//!
//! The kernel packs capability masks as one bit per event code into an array
//! of native `unsigned long`s, which this crate hands out as `u64` words.
//! These helpers answer the two questions callers actually have: how many
//! words a mask needs, and which bits are set in it.

use std::slice;

/// Returns the number of `u64` words needed to hold a mask of `bits` bits.
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(u64::BITS as usize)
}

/// Returns whether bit `index` is set in `words`.
///
/// Indices past the end of the slice read as unset.
pub fn test_bit(words: &[u64], index: usize) -> bool {
    let word = index / u64::BITS as usize;
    let bit = index % u64::BITS as usize;
    words.get(word).is_some_and(|w| w & (1 << bit) != 0)
}

/// Returns an iterator over the indices of all set bits in `words`, lowest
/// first.
pub fn set_bits(words: &[u64]) -> SetBits<'_> {
    SetBits {
        words: words.iter(),
        word: 0,
        base: 0,
    }
}

/// Iterator returned by [`set_bits`].
#[derive(Clone, Debug)]
pub struct SetBits<'a> {
    words: slice::Iter<'a, u64>,
    word: u64,
    base: usize,
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.word == 0 {
            self.word = *self.words.next()?;
            self.base += u64::BITS as usize;
        }
        let bit = self.word.trailing_zeros() as usize;
        // Clears the lowest set bit.
        self.word &= self.word - 1;
        Some(self.base - u64::BITS as usize + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(64), 1);
        assert_eq!(words_for(65), 2);
        // KEY_MAX + 1 bits, the largest mask the kernel reports.
        assert_eq!(words_for(0x300), 12);
    }

    #[test]
    fn bit_tests() {
        let words = [0b1010, 1 << 63];
        assert!(!test_bit(&words, 0));
        assert!(test_bit(&words, 1));
        assert!(test_bit(&words, 3));
        assert!(test_bit(&words, 127));
        assert!(!test_bit(&words, 128));
        assert!(!test_bit(&words, 100_000));
    }

    #[test]
    fn set_bit_indices() {
        let words = [0b1001, 0, 0x8000_0000_0000_0001];
        let indices: Vec<_> = set_bits(&words).collect();
        assert_eq!(indices, [0, 3, 128, 191]);

        assert_eq!(set_bits(&[]).next(), None);
        assert_eq!(set_bits(&[0, 0]).next(), None);

        for index in set_bits(&words) {
            assert!(test_bit(&words, index));
        }
    }
}
