#![doc = include_str!("../README.md")]

mod error;
pub use error::CodecError;
mod code;
pub use code::Code;
mod iterators;
pub use iterators::{Codes, generate_codes};
mod frequencies;
pub use frequencies::{Frequencies, FrequencyTable, count_frequencies};
mod rank;
pub use rank::{rank, sort_characters};
mod mapping;
pub use mapping::{CodeMapping, InverseMapping, build_mapping};
mod decoder;
pub use decoder::{Decoder, DecodingResult};
mod conf;
pub use conf::{DecodeConf, OnUnknown, DEFAULT_PLACEHOLDER};
mod codec;
pub use codec::{compress_text, decompress_text, decompress_text_with};
