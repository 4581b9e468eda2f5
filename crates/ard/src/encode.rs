use crate::alphabet::{digit, is_literal_unit, symbol_byte, ESCAPE_LEADS, PAIR_LEAD_BASE};
use crate::error::Error;
use crate::key::KeySchedule;
use crate::Result;

/// Encode `text` under `key`; the inverse of [`crate::decode`].
///
/// Every key byte must lie in `'0'..='z'` so that its mask fits in six bits.
pub fn encode(text: &str, key: impl AsRef<[u8]>) -> Result<String> {
    let schedule = KeySchedule::for_encoding(key)?;
    let mut masks = schedule.cycle().map(|m| m as u8);
    let mut next_mask = move || masks.next().unwrap_or_default();

    let mut out = Vec::with_capacity(text.len() * 3);

    for (offset, u) in text.encode_utf16().enumerate() {
        if u == 0 {
            return Err(Error::EmbeddedNul { offset });
        }

        if is_literal_unit(u) {
            let x = digit(u as u8) as u8;
            out.push(symbol_byte(x ^ next_mask()));
        } else if u < 0x100 {
            let high = (u >> 6) as u8;
            out.push(PAIR_LEAD_BASE + (high ^ (next_mask() & 3)));
            out.push(symbol_byte((u & 0x3F) as u8 ^ next_mask()));
        } else {
            let high = (u >> 12) as u8;
            out.push(ESCAPE_LEADS[usize::from(high ^ (next_mask() & 15))]);
            out.push(symbol_byte(((u >> 6) & 0x3F) as u8 ^ next_mask()));
            out.push(symbol_byte((u & 0x3F) as u8 ^ next_mask()));
        }
    }

    log::debug!("encoded {} chars into {} symbols", text.chars().count(), out.len());

    Ok(out.into_iter().map(char::from).collect())
}
