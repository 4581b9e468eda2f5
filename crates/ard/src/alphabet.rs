//! Symbol tables of the ard alphabet.
//!
//! Every value is computed in `i32` so that masks derived from unusual key
//! bytes (below `'0'`) keep the sign-extended behaviour of the reference
//! decoder. Emitted code units are truncated to 16 bits by the caller.

/// Lead symbols of three-symbol escapes, indexed by their 4-bit value.
pub const ESCAPE_LEADS: &[u8; 16] = b"_![#$%&]()*+,-|}";

/// First lead symbol of two-symbol escapes (`'='`, `'>'`, `'?'`, `'@'`).
pub const PAIR_LEAD_BASE: u8 = b'=';

/// Maps a symbol to its 6-bit value.
pub fn digit(c: u8) -> i32 {
    let c = i32::from(c);
    if c < 60 {
        c - 48
    } else if c < 91 {
        c - 53
    } else if c == 94 {
        10
    } else {
        c - 59
    }
}

/// Maps a 6-bit value back to the literal symbol it stands for.
pub fn symbol(x: i32) -> i32 {
    if x == 10 {
        94
    } else if x < 12 {
        x + 48
    } else if x < 38 {
        x + 53
    } else {
        x + 59
    }
}

/// High bits carried by the lead symbol of a three-symbol escape.
pub fn escape_lead(c: u8) -> i32 {
    match c {
        b'_' => 0,
        b'[' => 2,
        b']' => 7,
        c if c > 123 => i32::from(c) - 110,
        c => i32::from(c) - 32,
    }
}

/// Symbols decoded on their own in plain mode.
pub fn is_literal(c: u8) -> bool {
    c == b'^' || (b'0'..=b';').contains(&c) || c.is_ascii_uppercase() || c.is_ascii_lowercase()
}

/// Symbols that open a two-symbol escape.
pub fn is_pair_lead(c: u8) -> bool {
    (b'='..=b'@').contains(&c)
}

/// Code units the encoder can emit as a single literal symbol.
///
/// `':'` decodes like `'^'` but is never produced, so it is excluded here.
pub(crate) fn is_literal_unit(u: u16) -> bool {
    u8::try_from(u).is_ok_and(|c| c != b':' && is_literal(c))
}

/// Renders a 6-bit value as its literal symbol.
pub(crate) fn symbol_byte(x: u8) -> u8 {
    debug_assert!(x < 64);
    // 0..=63 always lands in '0'..='z'
    symbol(i32::from(x)) as u8
}
