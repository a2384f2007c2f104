//! Constant-time AES-128 block cipher core.
//!
//! This crate follows FIPS-197 and provides:
//! - The AES-128 key schedule.
//! - Single-block and 8-block encryption and decryption.
//! - An owned [`Aes128`] handle for repeated use of one key.
//!
//! Table lookups sweep the full table for every round step, so neither
//! branches nor memory addresses depend on key or data bytes. Modes of
//! operation, padding and authentication are left to the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aes128;
mod block;
mod cipher;
mod error;
mod key;
mod round;
pub mod tables;

pub use crate::aes128::Aes128;
pub use crate::block::{Batch, Block, BATCH_BLOCKS, BATCH_SIZE, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt8, decrypt_block, encrypt8, encrypt_block, expand_key, try_decrypt, try_encrypt,
    try_expand_key,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeySchedule, KEY_SIZE, ROUND_KEYS, SCHEDULE_SIZE};
