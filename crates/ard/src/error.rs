extern crate miette;
extern crate thiserror;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("key must not be empty")]
    #[diagnostic(code(ard::invalid_key))]
    InvalidKey,

    #[error("non-ASCII byte {byte:#04x} at offset {offset}")]
    #[diagnostic(code(ard::non_ascii_input))]
    NonAsciiInput { offset: usize, byte: u8 },

    #[error("input ends inside an escape sequence ({pending} more symbols expected after {len} bytes)")]
    #[diagnostic(code(ard::truncated_input))]
    TruncatedInput { pending: usize, len: usize },

    #[error("decoded output exceeds {limit} code units")]
    #[diagnostic(code(ard::output_overflow))]
    OutputOverflow { limit: usize },

    #[error("decoded code units are not valid UTF-16LE ({units} units)")]
    #[diagnostic(code(ard::conversion_error))]
    ConversionError { units: usize },

    #[error("key byte {byte:#04x} at offset {offset} has no mask in 0..=63")]
    #[diagnostic(
        code(ard::unsupported_key_symbol),
        help("encoding keys may only use characters from '0' to 'z'")
    )]
    UnsupportedKeySymbol { offset: usize, byte: u8 },

    #[error("text contains NUL at code unit {offset}")]
    #[diagnostic(code(ard::embedded_nul))]
    EmbeddedNul { offset: usize },
}
