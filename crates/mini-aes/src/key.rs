//! Key types for AES-128.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys in an AES-128 schedule.
pub const ROUND_KEYS: usize = 11;

/// Size of an expanded AES-128 schedule in bytes.
pub const SCHEDULE_SIZE: usize = ROUND_KEYS * BLOCK_SIZE;

/// AES-128 key wrapper, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeySize {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128.
///
/// Round key `i` is applied at cipher round `i`. The schedule is never
/// mutated after expansion, so one value can serve any number of
/// concurrent transforms by shared reference.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[repr(C, align(16))]
pub struct RoundKeySchedule([Block; ROUND_KEYS]);

impl RoundKeySchedule {
    pub(crate) fn from_round_keys(keys: [Block; ROUND_KEYS]) -> Self {
        Self(keys)
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// All eleven round keys in order.
    pub fn round_keys(&self) -> &[Block; ROUND_KEYS] {
        &self.0
    }

    /// The 176-byte schedule as one contiguous slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    /// Copies the schedule out as a fixed 176-byte buffer.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_SIZE] {
        let mut out = [0u8; SCHEDULE_SIZE];
        out.copy_from_slice(self.as_bytes());
        out
    }

    /// Rebuilds a schedule from its 176-byte form.
    ///
    /// Any 176 bytes are accepted; only schedules produced by
    /// [`expand_key`](crate::expand_key) correspond to a real AES key.
    pub fn from_bytes(bytes: &[u8; SCHEDULE_SIZE]) -> Self {
        let mut keys = [[0u8; BLOCK_SIZE]; ROUND_KEYS];
        for (key, chunk) in keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
            key.copy_from_slice(chunk);
        }
        Self(keys)
    }
}

impl TryFrom<&[u8]> for RoundKeySchedule {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SCHEDULE_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidInputSize {
                expected: SCHEDULE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl ConstantTimeEq for RoundKeySchedule {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl PartialEq for RoundKeySchedule {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for RoundKeySchedule {}

impl fmt::Debug for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeySchedule(..)")
    }
}
