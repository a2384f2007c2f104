//! AES round transformations over `N` independent state lanes.
//!
//! Each step runs once for the whole set of lanes. Table-backed steps
//! resolve every byte of every lane in a single constant-time sweep.

use crate::block::{xor_in_place, Block};
use crate::tables::{lookup, Table, INV_SBOX, MUL11, MUL13, MUL14, MUL2, MUL3, MUL9, SBOX};

/// Source index for each output byte of ShiftRows.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Source index for each output byte of InvShiftRows.
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

fn map_lanes<const N: usize>(table: &Table, state: &[Block; N]) -> [Block; N] {
    let mut out = [[0u8; 16]; N];
    lookup(table, state.as_flattened(), out.as_flattened_mut());
    out
}

fn permute_lanes<const N: usize>(state: &mut [Block; N], source: &[usize; 16]) {
    for lane in state.iter_mut() {
        let input = *lane;
        for (byte, &from) in lane.iter_mut().zip(source.iter()) {
            *byte = input[from];
        }
    }
}

/// Applies SubBytes to every lane.
#[inline]
pub fn sub_bytes<const N: usize>(state: &mut [Block; N]) {
    *state = map_lanes(&SBOX, state);
}

/// Applies InvSubBytes to every lane.
#[inline]
pub fn inv_sub_bytes<const N: usize>(state: &mut [Block; N]) {
    *state = map_lanes(&INV_SBOX, state);
}

/// Row `r` moves left by `r` positions.
#[inline]
pub fn shift_rows<const N: usize>(state: &mut [Block; N]) {
    permute_lanes(state, &SHIFT_ROWS);
}

/// Row `r` moves right by `r` positions.
#[inline]
pub fn inv_shift_rows<const N: usize>(state: &mut [Block; N]) {
    permute_lanes(state, &INV_SHIFT_ROWS);
}

/// MixColumns over all four columns of every lane.
pub fn mix_columns<const N: usize>(state: &mut [Block; N]) {
    let m2 = map_lanes(&MUL2, state);
    let m3 = map_lanes(&MUL3, state);

    for ((lane, x2), x3) in state.iter_mut().zip(&m2).zip(&m3) {
        for col in (0..16).step_by(4) {
            let [a0, a1, a2, a3] = [lane[col], lane[col + 1], lane[col + 2], lane[col + 3]];
            lane[col] = x2[col] ^ x3[col + 1] ^ a2 ^ a3;
            lane[col + 1] = a0 ^ x2[col + 1] ^ x3[col + 2] ^ a3;
            lane[col + 2] = a0 ^ a1 ^ x2[col + 2] ^ x3[col + 3];
            lane[col + 3] = x3[col] ^ a1 ^ a2 ^ x2[col + 3];
        }
    }
}

/// Inverse MixColumns over all four columns of every lane.
pub fn inv_mix_columns<const N: usize>(state: &mut [Block; N]) {
    let m9 = map_lanes(&MUL9, state);
    let m11 = map_lanes(&MUL11, state);
    let m13 = map_lanes(&MUL13, state);
    let m14 = map_lanes(&MUL14, state);

    for (i, lane) in state.iter_mut().enumerate() {
        let (x9, x11, x13, x14) = (&m9[i], &m11[i], &m13[i], &m14[i]);
        for c in (0..16).step_by(4) {
            let (c0, c1, c2, c3) = (c, c + 1, c + 2, c + 3);
            lane[c0] = x14[c0] ^ x11[c1] ^ x13[c2] ^ x9[c3];
            lane[c1] = x9[c0] ^ x14[c1] ^ x11[c2] ^ x13[c3];
            lane[c2] = x13[c0] ^ x9[c1] ^ x14[c2] ^ x11[c3];
            lane[c3] = x11[c0] ^ x13[c1] ^ x9[c2] ^ x14[c3];
        }
    }
}

/// Adds (XORs) a round key into every lane.
#[inline]
pub fn add_round_key<const N: usize>(state: &mut [Block; N], round_key: &Block) {
    for lane in state.iter_mut() {
        xor_in_place(lane, round_key);
    }
}
