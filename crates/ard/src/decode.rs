use encoding_rs::UTF_16LE;

use crate::error::Error;
use crate::key::KeySchedule;
use crate::state::DecodeState;
use crate::Result;

#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    /// Upper bound on decoded code units, `None` for a growable buffer.
    pub max_units: Option<usize>,
}

impl DecodeOptions {
    /// Capacity of the fixed buffer in the reference decoder.
    pub const LEGACY_MAX_UNITS: usize = 102_400;

    pub fn legacy() -> Self {
        Self {
            max_units: Some(Self::LEGACY_MAX_UNITS),
        }
    }
}

/// Decode `encoded` under `key` into UTF-8 text.
pub fn decode(encoded: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<String> {
    decode_with(encoded, key, &DecodeOptions::default())
}

/// Decode with explicit options.
pub fn decode_with(
    encoded: impl AsRef<[u8]>,
    key: impl AsRef<[u8]>,
    opts: &DecodeOptions,
) -> Result<String> {
    let units = decode_units(encoded, key, opts)?;
    units_to_string(&units)
}

/// Run the decode loop and return the UTF-16 code units before conversion.
///
/// Units following the first NUL are dropped.
pub fn decode_units(
    encoded: impl AsRef<[u8]>,
    key: impl AsRef<[u8]>,
    opts: &DecodeOptions,
) -> Result<Vec<u16>> {
    let encoded = encoded.as_ref();
    let schedule = KeySchedule::new(key)?;

    let mut units = Vec::with_capacity(encoded.len());
    let mut state = DecodeState::Plain;

    for ((offset, &c), mask) in encoded.iter().enumerate().zip(schedule.cycle()) {
        if !c.is_ascii() {
            return Err(Error::NonAsciiInput { offset, byte: c });
        }

        let (next, unit) = state.step(c, mask);
        state = next;

        if let Some(unit) = unit {
            if let Some(limit) = opts.max_units {
                if units.len() >= limit {
                    return Err(Error::OutputOverflow { limit });
                }
            }
            units.push(unit);
        }
    }

    if state != DecodeState::Plain {
        return Err(Error::TruncatedInput {
            pending: state.pending(),
            len: encoded.len(),
        });
    }

    if let Some(end) = units.iter().position(|&u| u == 0) {
        log::trace!("NUL at unit {end}, dropping {} units", units.len() - end);
        units.truncate(end);
    }

    log::debug!(
        "decoded {} symbols into {} code units",
        encoded.len(),
        units.len()
    );

    Ok(units)
}

fn units_to_string(units: &[u16]) -> Result<String> {
    let bytes: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or(Error::ConversionError { units: units.len() })
}
