use crate::error::{Error, Result};

/// Initial accumulator value of the cdb hash, per http://cr.yp.to/cdb/cdb.txt
pub const SEED: u32 = 5381;

/// Returns the value of DJB's hash function for `data`.
///
/// This is the XOR variant used by the cdb file format,
/// `h = ((h << 5) + h) ^ b` seeded at 5381, with all arithmetic wrapping
/// modulo 2^32. The additive djb2 variant produces different values and is
/// not interchangeable with it.
#[inline]
pub const fn djb_hash(data: &[u8]) -> u32 {
    let mut h = SEED;
    let mut i = 0;
    while i < data.len() {
        h = ((h << 5).wrapping_add(h)) ^ data[i] as u32;
        i += 1;
    }
    h
}

/// Hashes a sequence of wider-than-byte units, rejecting any unit that does
/// not fit in a byte.
///
/// This is the checked boundary for callers holding 16/32-bit code points
/// instead of raw bytes. Text should normally be fed through [`djb_hash`] as
/// UTF-8 instead; nothing is ever truncated or re-encoded here.
pub fn djb_hash_units(units: &[u32]) -> Result<u32> {
    let mut h = SEED;
    for &unit in units {
        if unit > u8::MAX as u32 {
            return Err(Error::InvalidArgument(format!(
                "unit {unit:#x} does not fit in a byte"
            )));
        }
        h = ((h << 5).wrapping_add(h)) ^ unit;
    }
    Ok(h)
}

/// Any read-only contiguous byte view can be hashed directly.
pub trait CdbHash {
    fn cdb_hash(&self) -> u32;
}

impl<T> CdbHash for T
where
    T: AsRef<[u8]>,
{
    fn cdb_hash(&self) -> u32 {
        djb_hash(self.as_ref())
    }
}

/// Running accumulator state, for feeding a key in pieces.
///
/// Writing a buffer in arbitrary splits yields the same value as hashing it
/// whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DjbHasher {
    state: u32,
}

impl DjbHasher {
    pub const fn new() -> Self {
        Self { state: SEED }
    }

    pub fn write(&mut self, data: &[u8]) {
        let mut h = self.state;
        for &b in data {
            h = ((h << 5).wrapping_add(h)) ^ b as u32;
        }
        self.state = h;
    }

    pub const fn finish32(&self) -> u32 {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = SEED;
    }
}

impl Default for DjbHasher {
    fn default() -> Self {
        Self::new()
    }
}
