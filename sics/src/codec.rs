//! Encoding and decoding of whole texts.

use crate::{CodeMapping, CodecError, DecodeConf, DecodingResult, InverseMapping};

/// Replaces each character of `text` with its code.
///
/// Returns [`CodecError::UnmappedValue`] if some character of `text` has no code in `mapping`,
/// which happens only if `mapping` was not built for `text` (or its superset).
pub fn compress_text(text: &str, mapping: &CodeMapping) -> Result<String, CodecError> {
    let mut result = String::with_capacity(text.len());
    mapping.encode(text.chars(), &mut result)?;
    Ok(result)
}

/// Restores the text from the `compressed` codes, replacing each unknown code with `'?'`.
///
/// Fails only if `mapping` assigns the same code to different characters.
///
/// # Example
///
/// ```
/// let text = "abracadabra";
/// let mapping = sics::CodeMapping::from_text(text);
/// let compressed = sics::compress_text(text, &mapping).unwrap();
/// assert_eq!(compressed, "01203040120");
/// assert_eq!(sics::decompress_text(&compressed, &mapping).unwrap(), text);
/// assert_eq!(sics::decompress_text("01F", &mapping).unwrap(), "ab?");
/// ```
#[inline] pub fn decompress_text(compressed: &str, mapping: &CodeMapping) -> Result<String, CodecError> {
    decompress_text_with(compressed, mapping, &DecodeConf::default())
}

/// Restores the text from the `compressed` codes, handling unknown codes according to `conf`.
pub fn decompress_text_with(compressed: &str, mapping: &CodeMapping, conf: &DecodeConf) -> Result<String, CodecError> {
    mapping.inverse()?.decode_text(compressed, conf)
}

impl InverseMapping<char> {
    /// Restores the text from the `compressed` codes, handling unknown codes according to `conf`.
    ///
    /// Codes are scanned from left to right. A code that ends with a symbol that is not a valid terminal
    /// and a run of escapes at the end of `compressed` are unknown codes as well.
    pub fn decode_text(&self, compressed: &str, conf: &DecodeConf) -> Result<String, CodecError> {
        let mut result = String::with_capacity(compressed.len());
        let mut decoder = self.decoder();
        let (mut code_begin, mut code_position) = (0, 0);
        for (position, (index, symbol)) in compressed.char_indices().enumerate() {
            if decoder.consumed_symbols() == 0 { (code_begin, code_position) = (index, position); }
            match decoder.consume(symbol) {
                DecodingResult::Value(c) => result.push(*c),
                DecodingResult::Incomplete => {},
                DecodingResult::Invalid =>
                    conf.unknown(&mut result, code_position, &compressed[code_begin..index + symbol.len_utf8()])?
            }
        }
        if decoder.finish().is_some() {
            conf.unknown(&mut result, code_position, &compressed[code_begin..])?;
        }
        Ok(result)
    }
}
