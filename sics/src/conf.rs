use log::trace;
use crate::CodecError;

/// Character emitted by default in place of each unknown code.
pub const DEFAULT_PLACEHOLDER: char = '?';

/// What decoding does when it meets a code that is not assigned to any character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OnUnknown {
    /// Emit the given character and continue. Decoding never fails.
    Placeholder(char),
    /// Stop and report [`CodecError::UnknownCode`].
    Fail
}

impl Default for OnUnknown {
    #[inline] fn default() -> Self { Self::Placeholder(DEFAULT_PLACEHOLDER) }
}

/// Configuration accepted by [`decompress_text_with`](crate::decompress_text_with).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeConf {
    /// Handling of unknown and truncated codes. (default: [`OnUnknown::Placeholder`] with `'?'`)
    pub on_unknown: OnUnknown
}

impl DecodeConf {
    /// Returns configuration that substitutes `placeholder` for unknown codes.
    #[inline] pub fn placeholder(placeholder: char) -> Self {
        Self { on_unknown: OnUnknown::Placeholder(placeholder) }
    }

    /// Returns configuration that fails on the first unknown code.
    #[inline] pub fn strict() -> Self {
        Self { on_unknown: OnUnknown::Fail }
    }

    /// Handles the unknown `code` that begins at `position` of the stream.
    pub(crate) fn unknown(&self, output: &mut String, position: usize, code: &str) -> Result<(), CodecError> {
        match self.on_unknown {
            OnUnknown::Placeholder(placeholder) => {
                trace!("unknown code {:?} at position {}, emitting {:?}", code, position, placeholder);
                output.push(placeholder);
                Ok(())
            }
            OnUnknown::Fail => Err(CodecError::UnknownCode { position, code: code.to_owned() })
        }
    }
}
