use crate::alphabet::digit;
use crate::error::Error;
use crate::Result;

/// Per-position XOR masks derived from a key, cycling with the key length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    masks: Vec<i32>,
}

impl KeySchedule {
    /// Builds the schedule used for decoding. Any ASCII key is accepted.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        if let Some(offset) = key.iter().position(|b| !b.is_ascii()) {
            return Err(Error::NonAsciiInput {
                offset,
                byte: key[offset],
            });
        }

        Ok(Self {
            masks: key.iter().map(|&c| digit(c)).collect(),
        })
    }

    /// Builds a schedule whose masks all fit in six bits, as encoding needs.
    pub fn for_encoding(key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        let schedule = Self::new(key)?;
        if let Some(offset) = schedule.masks.iter().position(|m| !(0..64).contains(m)) {
            return Err(Error::UnsupportedKeySymbol {
                offset,
                byte: key[offset],
            });
        }
        Ok(schedule)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Mask applied to the symbol at `position`.
    pub fn mask(&self, position: usize) -> i32 {
        self.masks[position % self.masks.len()]
    }

    /// Endless iterator over the masks, starting at position zero.
    pub fn cycle(&self) -> impl Iterator<Item = i32> + '_ {
        self.masks.iter().copied().cycle()
    }
}
