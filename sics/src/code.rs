//! Tools to deal with codes.

use std::fmt;
use std::str::FromStr;
use crate::CodecError;

/// Terminal symbols, indexed by their values.
const TERMINALS: [char; Code::TIER_SIZE] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E'];

/// `Code` represents a codeword that consists of `tier` escape symbols (`F`)
/// followed by a single terminal symbol (one of `0`..`9`, `A`..`E`).
///
/// Codes are ordered by their generation index,
/// i.e. by tier first and then by the value of the terminal symbol.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct Code {
    /// Number of leading escape symbols.
    tier: usize,
    /// Value of the terminal symbol, always less than `TIER_SIZE`.
    digit: u8,
}

impl Code {
    /// Escape symbol, which continues the codeword and is never its last symbol.
    pub const ESCAPE: char = 'F';

    /// Number of codes in each tier, which equals the number of terminal symbols.
    pub const TIER_SIZE: usize = 15;

    /// Returns the code with given `tier` and terminal symbol value `digit`,
    /// or `None` if `digit` is not less than [`Self::TIER_SIZE`]
    /// or the index of the code does not fit in `usize`.
    #[inline] pub const fn new(tier: usize, digit: u8) -> Option<Self> {
        if (digit as usize) >= Self::TIER_SIZE { return None; }
        match tier.checked_mul(Self::TIER_SIZE) {
            Some(first) if first.checked_add(digit as usize).is_some() => Some(Self { tier, digit }),
            _ => None
        }
    }

    /// Returns the `index`-th code in generation order (counting from 0).
    #[inline] pub fn at(index: usize) -> Self {
        Self { tier: index / Self::TIER_SIZE, digit: (index % Self::TIER_SIZE) as u8 }
    }

    /// Returns the index of `self` in generation order.
    #[inline] pub fn index(&self) -> usize {
        self.tier * Self::TIER_SIZE + self.digit as usize
    }

    /// Returns the number of leading escape symbols.
    #[inline(always)] pub fn tier(&self) -> usize { self.tier }

    /// Returns the value of the terminal symbol.
    #[inline(always)] pub fn digit(&self) -> u8 { self.digit }

    /// Returns the length of `self` in symbols. It is never 0.
    #[inline] pub fn len(&self) -> usize { self.tier + 1 }

    /// Returns the last (terminal) symbol of `self`.
    #[inline] pub fn terminal(&self) -> char { TERMINALS[self.digit as usize] }

    /// Returns value of the terminal `symbol` or `None` if `symbol` cannot end a codeword.
    #[inline] pub fn terminal_value(symbol: char) -> Option<u8> {
        match symbol {
            '0'..='9' => Some(symbol as u8 - b'0'),
            'A'..='E' => Some(symbol as u8 - b'A' + 10),
            _ => None
        }
    }

    /// Returns an iterator over symbols of `self`.
    pub fn symbols(&self) -> impl Iterator<Item = char> {
        std::iter::repeat(Self::ESCAPE).take(self.tier).chain(std::iter::once(self.terminal()))
    }

    /// Appends symbols of `self` to `output`.
    #[inline] pub fn write_to(&self, output: &mut String) {
        output.extend(self.symbols())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.tier { f.write_str("F")?; }
        fmt::Write::write_char(f, self.terminal())
    }
}

impl FromStr for Code {
    type Err = CodecError;

    /// Parses the string that consists of escape symbols followed by exactly one terminal symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CodecError::MalformedCode(s.to_owned());
        let terminal = s.trim_start_matches(Self::ESCAPE);
        let mut symbols = terminal.chars();
        match (symbols.next().and_then(Self::terminal_value), symbols.next()) {
            (Some(digit), None) => Self::new(s.len() - terminal.len(), digit).ok_or_else(malformed),
            _ => Err(malformed())
        }
    }
}
