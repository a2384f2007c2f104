//! AES-128 key schedule and block encryption/decryption.

use crate::block::{join_batch, split_batch, Batch, Block, BATCH_SIZE, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeySchedule, ROUND_KEYS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::{lookup, RCON, SBOX};

const ROUNDS: usize = ROUND_KEYS - 1;
const WORDS: usize = 4 * ROUND_KEYS;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let bytes = word.to_be_bytes();
    let mut out = [0u8; 4];
    lookup(&SBOX, &bytes, &mut out);
    u32::from_be_bytes(out)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeySchedule {
    let mut w = [0u32; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUND_KEYS];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (bytes, word) in round_key.chunks_exact_mut(4).zip(words) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeySchedule::from_round_keys(round_keys)
}

/// Expands a key given as a byte slice, which must be exactly 16 bytes.
pub fn try_expand_key(key: &[u8]) -> Result<RoundKeySchedule> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand_key(&key))
}

fn encrypt_lanes<const N: usize>(state: &mut [Block; N], round_keys: &RoundKeySchedule) {
    add_round_key(state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys.get(ROUNDS));
}

fn decrypt_lanes<const N: usize>(state: &mut [Block; N], round_keys: &RoundKeySchedule) {
    add_round_key(state, round_keys.get(ROUNDS));

    for round in (1..ROUNDS).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_keys.get(round));
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0));
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    let mut state = [*block];
    encrypt_lanes(&mut state, round_keys);
    state[0]
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    let mut state = [*block];
    decrypt_lanes(&mut state, round_keys);
    state[0]
}

/// Encrypts eight independent blocks under one schedule.
///
/// Every round step runs once across all eight lanes; the output is
/// identical to eight calls to [`encrypt_block`].
pub fn encrypt8(blocks: &Batch, round_keys: &RoundKeySchedule) -> Batch {
    let mut state = split_batch(blocks);
    encrypt_lanes(&mut state, round_keys);
    join_batch(&state)
}

/// Decrypts eight independent blocks under one schedule.
pub fn decrypt8(blocks: &Batch, round_keys: &RoundKeySchedule) -> Batch {
    let mut state = split_batch(blocks);
    decrypt_lanes(&mut state, round_keys);
    join_batch(&state)
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn transform_slice(
    direction: Direction,
    round_keys: &RoundKeySchedule,
    input: &[u8],
    output: &mut [u8],
) -> Result<()> {
    if input.len() != output.len() {
        return Err(Error::InvalidInputSize {
            expected: input.len(),
            actual: output.len(),
        });
    }

    if let Ok(block) = <&Block>::try_from(input) {
        let out = match direction {
            Direction::Encrypt => encrypt_block(block, round_keys),
            Direction::Decrypt => decrypt_block(block, round_keys),
        };
        output.copy_from_slice(&out);
        Ok(())
    } else if let Ok(batch) = <&Batch>::try_from(input) {
        let out = match direction {
            Direction::Encrypt => encrypt8(batch, round_keys),
            Direction::Decrypt => decrypt8(batch, round_keys),
        };
        output.copy_from_slice(&out);
        Ok(())
    } else {
        let expected = if input.len() < BATCH_SIZE {
            BLOCK_SIZE
        } else {
            BATCH_SIZE
        };
        Err(Error::InvalidInputSize {
            expected,
            actual: input.len(),
        })
    }
}

/// Encrypts a 16-byte block or a 128-byte batch given as slices.
///
/// `output` must be the same length as `input`. On a size mismatch nothing
/// is written to `output`.
pub fn try_encrypt(round_keys: &RoundKeySchedule, input: &[u8], output: &mut [u8]) -> Result<()> {
    transform_slice(Direction::Encrypt, round_keys, input, output)
}

/// Decrypts a 16-byte block or a 128-byte batch given as slices.
///
/// `output` must be the same length as `input`. On a size mismatch nothing
/// is written to `output`.
pub fn try_decrypt(round_keys: &RoundKeySchedule, input: &[u8], output: &mut [u8]) -> Result<()> {
    transform_slice(Direction::Decrypt, round_keys, input, output)
}
