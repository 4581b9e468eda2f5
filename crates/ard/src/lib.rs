//! Decoder for the `ard` keyed substitution cipher.
//!
//! Encoded text is a string of ASCII symbols. Each symbol is XORed with a
//! mask taken from the key, which cycles once per input symbol. A literal
//! symbol decodes to one ASCII character on its own. Other code units are
//! spelled as a two-symbol escape (below U+0100) or a three-symbol escape.
//! The resulting UTF-16 code units are finally converted to UTF-8.
//!
//! ```
//! assert_eq!(ard::decode("[11|Hf", "PeN").unwrap(), "高干");
//! assert_eq!(ard::encode("高干", "PeN").unwrap(), "[11|Hf");
//! ```

pub mod alphabet;
pub mod error;
mod decode;
mod encode;
mod key;
mod state;

pub use decode::{decode, decode_units, decode_with, DecodeOptions};
pub use encode::encode;
pub use error::Error;
pub use key::KeySchedule;
pub use state::DecodeState;

pub type Result<T> = core::result::Result<T, Error>;
