//! Owned cipher handle.

use crate::block::{Batch, Block, BATCH_BLOCKS, BATCH_SIZE};
use crate::cipher::{decrypt8, decrypt_block, encrypt8, encrypt_block, expand_key};
use crate::key::{Aes128Key, RoundKeySchedule, KEY_SIZE};

/// AES-128 with its key schedule expanded once up front.
///
/// All methods take `&self`; a single `Aes128` can be shared freely between
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeySchedule,
}

impl Default for Aes128 {
    fn default() -> Self {
        Self::new(&[0u8; KEY_SIZE])
    }
}

impl From<RoundKeySchedule> for Aes128 {
    fn from(round_keys: RoundKeySchedule) -> Self {
        Self { round_keys }
    }
}

impl Aes128 {
    /// Expands `key` and returns the ready-to-use cipher.
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Self::from_key(&Aes128Key::from(*key))
    }

    /// Same as [`Aes128::new`] for an already wrapped key.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// The expanded schedule.
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt1(&self, input: &Block, output: &mut Block) {
        *output = encrypt_block(input, &self.round_keys);
    }

    /// Decrypts one block.
    pub fn decrypt1(&self, input: &Block, output: &mut Block) {
        *output = decrypt_block(input, &self.round_keys);
    }

    /// Encrypts eight blocks.
    pub fn encrypt8(&self, input: &Batch, output: &mut Batch) {
        *output = encrypt8(input, &self.round_keys);
    }

    /// Decrypts eight blocks.
    pub fn decrypt8(&self, input: &Batch, output: &mut Batch) {
        *output = decrypt8(input, &self.round_keys);
    }

    /// Encrypts any number of whole blocks in place, eight at a time.
    ///
    /// Each block is transformed on its own; no chaining is applied.
    pub fn encrypt_blocks(&self, blocks: &mut [Block]) {
        self.apply_blocks(blocks, encrypt8, encrypt_block);
    }

    /// Decrypts any number of whole blocks in place, eight at a time.
    pub fn decrypt_blocks(&self, blocks: &mut [Block]) {
        self.apply_blocks(blocks, decrypt8, decrypt_block);
    }

    fn apply_blocks(
        &self,
        blocks: &mut [Block],
        batch: fn(&Batch, &RoundKeySchedule) -> Batch,
        single: fn(&Block, &RoundKeySchedule) -> Block,
    ) {
        let mut chunks = blocks.chunks_exact_mut(BATCH_BLOCKS);
        for chunk in &mut chunks {
            let mut buf = [0u8; BATCH_SIZE];
            buf.copy_from_slice(chunk.as_flattened());
            let out = batch(&buf, &self.round_keys);
            chunk.as_flattened_mut().copy_from_slice(&out);
        }
        for block in chunks.into_remainder() {
            *block = single(block, &self.round_keys);
        }
    }
}
