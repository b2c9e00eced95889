use std::iter::FusedIterator;
use crate::Code;

/// Infinite iterator over codes in generation order:
/// `0`, ..., `E`, `F0`, ..., `FE`, `FF0`, ..., `FFE`, `FFF0`, ...
///
/// Each tier (15 codes with the same number of leading escape symbols)
/// is exhausted before the next one begins.
/// The iterator never returns `None`. Like `RangeFrom<usize>`, it covers codes
/// with indices up to `usize::MAX` and panics when advanced past the last of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Codes {
    /// Tier of the code about to be exposed.
    tier: usize,
    /// Value of the terminal symbol of the code about to be exposed.
    digit: u8
}

impl Codes {
    /// Returns iterator that starts from the first code, `0`.
    #[inline] pub fn new() -> Self { Self::default() }

    /// Returns iterator that starts from the `index`-th code.
    #[inline] pub fn starting_at(index: usize) -> Self {
        let code = Code::at(index);
        Self { tier: code.tier(), digit: code.digit() }
    }

    /// Returns the code that `next` will expose, without advancing.
    ///
    /// # Panics
    ///
    /// If the index of the code does not fit in `usize`.
    #[inline] pub fn peek(&self) -> Code {
        match Code::new(self.tier, self.digit) {
            Some(code) => code,
            None => panic!("code index overflows usize")
        }
    }

    /// Returns the index of the code that `next` will expose, i.e. the number of codes exposed so far.
    #[inline] pub fn index(&self) -> usize { self.peek().index() }
}

impl FusedIterator for Codes {}

impl Iterator for Codes {
    type Item = Code;

    #[inline] fn next(&mut self) -> Option<Self::Item> {
        let result = self.peek();
        self.digit += 1;
        if self.digit as usize == Code::TIER_SIZE {
            self.digit = 0;
            self.tier += 1;
        }
        Some(result)
    }

    /// Skips `n` codes in constant time.
    ///
    /// # Panics
    ///
    /// If the index of the returned code does not fit in `usize`.
    #[inline] fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self.index().checked_add(n) {
            Some(index) => *self = Self::starting_at(index),
            None => panic!("code index overflows usize")
        }
        self.next()
    }

    #[inline] fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Returns a fresh [`Codes`] iterator that starts from tier 0.
///
/// # Example
///
/// ```
/// let codes: Vec<String> = sics::generate_codes().skip(13).take(4).map(|c| c.to_string()).collect();
/// assert_eq!(codes, ["D", "E", "F0", "F1"]);
/// ```
#[inline] pub fn generate_codes() -> Codes { Codes::new() }
