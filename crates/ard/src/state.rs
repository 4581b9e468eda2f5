use crate::alphabet::{digit, escape_lead, is_literal, is_pair_lead, symbol, PAIR_LEAD_BASE};

/// Decoder mode between two input symbols.
///
/// Escape variants carry the value accumulated from the symbols read so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DecodeState {
    #[default]
    Plain,
    /// A pair lead was read; one symbol completes the code unit.
    Escape2Pending(i32),
    /// A triple lead was read; two symbols complete the code unit.
    Escape3First(i32),
    /// One continuation of a triple was read; one symbol remains.
    Escape3Second(i32),
}

impl DecodeState {
    /// Consumes one input symbol under key mask `mask`.
    ///
    /// Returns the next state and the code unit completed by this symbol, if any.
    pub fn step(self, c: u8, mask: i32) -> (Self, Option<u16>) {
        match self {
            Self::Plain if is_literal(c) => {
                let x = digit(c) ^ mask;
                (Self::Plain, Some(symbol(x) as u16))
            }
            Self::Plain if is_pair_lead(c) => {
                let x = i32::from(c - PAIR_LEAD_BASE) ^ (mask & 3);
                (Self::Escape2Pending(x), None)
            }
            Self::Plain => (Self::Escape3First(escape_lead(c) ^ (mask & 15)), None),
            Self::Escape2Pending(x) => (Self::Plain, Some(continue_escape(x, c, mask) as u16)),
            Self::Escape3First(x) => (Self::Escape3Second(continue_escape(x, c, mask)), None),
            Self::Escape3Second(x) => (Self::Plain, Some(continue_escape(x, c, mask) as u16)),
        }
    }

    /// Number of symbols still needed to complete the current code unit.
    pub fn pending(&self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Escape2Pending(_) | Self::Escape3Second(_) => 1,
            Self::Escape3First(_) => 2,
        }
    }
}

fn continue_escape(x: i32, c: u8, mask: i32) -> i32 {
    (x << 6).wrapping_add(digit(c) ^ mask)
}
