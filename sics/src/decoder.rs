use crate::{Code, InverseMapping};

/// Result of symbol decoding returned by `consume` method of `Decoder`.
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum DecodingResult<T> {
    /// Completed value that has been successfully decoded.
    Value(T),
    /// The codeword is incomplete (only escape symbols were consumed) and the next symbol is needed.
    Incomplete,
    /// The codeword is complete but no value is assigned to it,
    /// or it was terminated by a symbol which is not a valid terminal symbol.
    Invalid
}

impl<T> From<Option<T>> for DecodingResult<T> {
    #[inline(always)] fn from(option: Option<T>) -> Self {
        if let Some(v) = option { DecodingResult::Value(v) } else { DecodingResult::Invalid }
    }
}

/// Decoder that decodes a value for given code, consuming one symbol at a time.
///
/// It has only two states: inside a run of escape symbols or not.
/// Each symbol other than escape completes the current codeword.
/// Decoding never backtracks.
pub struct Decoder<'m, ValueType> {
    inverse: &'m InverseMapping<ValueType>,
    /// Number of escape symbols consumed since the last completed codeword.
    escapes: usize
}

impl<'m, ValueType> Decoder<'m, ValueType> {
    /// Constructs decoder for given `inverse` mapping.
    #[inline] pub fn new(inverse: &'m InverseMapping<ValueType>) -> Self {
        Self { inverse, escapes: 0 }
    }

    /// Resets `self` to initial state and makes it ready to decode next value.
    #[inline] pub fn reset(&mut self) { self.escapes = 0; }

    /// Returns the number of symbols of the current, incomplete codeword consumed so far.
    #[inline(always)] pub fn consumed_symbols(&self) -> usize { self.escapes }

    /// Consumes a `symbol` of the codeword and returns:
    /// - a value if the given `symbol` finishes the valid codeword;
    /// - an [`DecodingResult::Incomplete`] if `symbol` is the escape symbol and the next symbol is needed;
    /// - or [`DecodingResult::Invalid`] if the codeword is unknown or `symbol` is neither escape nor terminal symbol.
    ///
    /// After returning a value or [`DecodingResult::Invalid`], `self` is ready to decode the next codeword.
    pub fn consume(&mut self, symbol: char) -> DecodingResult<&'m ValueType> {
        if symbol == Code::ESCAPE {
            self.escapes = self.escapes.saturating_add(1);
            return DecodingResult::Incomplete;
        }
        let tier = std::mem::take(&mut self.escapes);
        let inverse = self.inverse;
        Code::terminal_value(symbol)
            .and_then(|digit| Code::new(tier, digit))
            .and_then(|code| inverse.get(&code))
            .into()
    }

    /// Tries to decode and return a single value from the `symbols` iterator,
    /// consuming as many symbols as needed.
    ///
    /// Returns [`DecodingResult::Incomplete`] if the iterator exhausted before the codeword was completed
    /// ([`Self::consumed_symbols`] enables checking if the iterator yielded any escape symbol before exhausting).
    pub fn decode_next<I: Iterator<Item = char>>(&mut self, symbols: &mut I) -> DecodingResult<&'m ValueType> {
        for symbol in symbols {
            match self.consume(symbol) {
                DecodingResult::Incomplete => {},
                result => return result
            }
        }
        DecodingResult::Incomplete
    }

    /// Finishes decoding of the input. Returns [`DecodingResult::Invalid`] if the input
    /// ended inside a run of escape symbols (the codeword is truncated),
    /// or `None` if the last codeword was complete.
    /// Resets `self` in both cases.
    pub fn finish(&mut self) -> Option<DecodingResult<&'m ValueType>> {
        (std::mem::take(&mut self.escapes) != 0).then_some(DecodingResult::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use crate::{build_mapping, CodeMapping};

    fn inverse() -> InverseMapping {
        let ranked: Vec<char> = ('a'..='z').chain('A'..='Z').collect();
        build_mapping(&ranked).inverse().unwrap()
    }

    #[test]
    fn single_symbol_codes() {
        let inverse = inverse();
        let mut decoder = inverse.decoder();
        assert_eq!(decoder.consume('0'), DecodingResult::Value(&'a'));
        assert_eq!(decoder.consume('E'), DecodingResult::Value(&'o'));
        assert_eq!(decoder.consumed_symbols(), 0);
    }

    #[test]
    fn escaped_codes() {
        let inverse = inverse();
        let mut decoder = inverse.decoder();
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consumed_symbols(), 1);
        assert_eq!(decoder.consume('0'), DecodingResult::Value(&'p'));
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('0'), DecodingResult::Value(&'E'));
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('6'), DecodingResult::Value(&'Z'));
    }

    #[test]
    fn unknown_codes() {
        let inverse = inverse();
        let mut decoder = inverse.decoder();
        for symbol in "FFF".chars() { decoder.consume(symbol); }
        assert_eq!(decoder.consume('7'), DecodingResult::Invalid);
        assert_eq!(decoder.consumed_symbols(), 0);
        assert_eq!(decoder.consume('x'), DecodingResult::Invalid);
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('f'), DecodingResult::Invalid);
        assert_eq!(decoder.consume('1'), DecodingResult::Value(&'b'));
    }

    #[test]
    fn decode_next() {
        let inverse = inverse();
        let mut decoder = inverse.decoder();
        let mut symbols = "2FA9FF".chars();
        assert_eq!(decoder.decode_next(&mut symbols), DecodingResult::Value(&'c'));
        assert_eq!(decoder.decode_next(&mut symbols), DecodingResult::Value(&'z'));
        assert_eq!(decoder.decode_next(&mut symbols), DecodingResult::Value(&'j'));
        assert_eq!(decoder.decode_next(&mut symbols), DecodingResult::Incomplete);
        assert_eq!(decoder.consumed_symbols(), 2);
        assert_eq!(decoder.finish(), Some(DecodingResult::Invalid));
        assert_eq!(decoder.consumed_symbols(), 0);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn reset_inside_escape_run() {
        let inverse = inverse();
        let mut decoder = inverse.decoder();
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        decoder.reset();
        assert_eq!(decoder.consumed_symbols(), 0);
        assert_eq!(decoder.consume('3'), DecodingResult::Value(&'d'));
        assert_eq!(decoder.consume('F'), DecodingResult::Incomplete);
        decoder.reset();
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn empty_mapping() {
        let inverse = CodeMapping::<char>::default().inverse().unwrap();
        let mut decoder = inverse.decoder();
        assert_eq!(decoder.consume('0'), DecodingResult::Invalid);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn hand_built_mapping() {
        let mapping = CodeMapping::from(hashmap!(1u16 => "FB".parse::<Code>().unwrap(), 2 => "3".parse::<Code>().unwrap()));
        let inverse = mapping.inverse().unwrap();
        let mut decoder = inverse.decoder();
        assert_eq!(decoder.decode_next(&mut "FB".chars()), DecodingResult::Value(&1));
        assert_eq!(decoder.consume('3'), DecodingResult::Value(&2));
        assert_eq!(decoder.consume('B'), DecodingResult::Invalid);
    }
}
