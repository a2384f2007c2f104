//! Substitution and GF(2⁸) multiplication tables.
//!
//! Every table is generated at compile time. Reads from the cipher go
//! through [`lookup`], which sweeps the whole table for each batch of
//! indices so the memory access pattern is independent of the data.

use subtle::{ConditionallySelectable, ConstantTimeEq};

/// A 256-entry byte → byte table.
pub type Table = [u8; 256];

/// Reduction polynomial x⁸ + x⁴ + x³ + x + 1 with the x⁸ term dropped.
const REDUCTION: u8 = 0x1b;

const fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (((byte >> 7) & 1) * REDUCTION)
}

const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

const fn gen_sbox() -> Table {
    let mut sbox = [0u8; 256];

    // p walks the powers of the generator 3, q walks their inverses.
    let mut p = 1u8;
    let mut q = 1u8;
    loop {
        p = p ^ xtime(p);

        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        sbox[p as usize] =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4) ^ 0x63;

        if p == 1 {
            break;
        }
    }

    // Zero has no inverse; only the affine constant remains.
    sbox[0] = 0x63;
    sbox
}

const fn gen_inverse(table: &Table) -> Table {
    let mut inverse = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

const fn gen_mul(factor: u8) -> Table {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gf_mul(i as u8, factor);
        i += 1;
    }
    table
}

const fn gen_rcon() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut value = 1u8;
    let mut i = 0;
    while i < rcon.len() {
        rcon[i] = value;
        value = xtime(value);
        i += 1;
    }
    rcon
}

/// Forward S-box used by SubBytes and SubWord.
pub const SBOX: Table = gen_sbox();

/// Inverse S-box used by InvSubBytes.
pub const INV_SBOX: Table = gen_inverse(&SBOX);

/// Multiplication by 2 in GF(2⁸).
pub const MUL2: Table = gen_mul(2);
/// Multiplication by 3 in GF(2⁸).
pub const MUL3: Table = gen_mul(3);
/// Multiplication by 9 in GF(2⁸).
pub const MUL9: Table = gen_mul(9);
/// Multiplication by 11 in GF(2⁸).
pub const MUL11: Table = gen_mul(11);
/// Multiplication by 13 in GF(2⁸).
pub const MUL13: Table = gen_mul(13);
/// Multiplication by 14 in GF(2⁸).
pub const MUL14: Table = gen_mul(14);

/// Key-expansion round constants; `RCON[i]` is used for round `i + 1`.
pub const RCON: [u8; 10] = gen_rcon();

/// Maps every byte of `input` through `table` into `output`.
///
/// The table is read in full, once, regardless of how many indices are
/// resolved, and each entry is merged with a constant-time select. Passing
/// all bytes of a round step at once keeps the sweep count per step at one.
///
/// `input` and `output` must have the same length.
pub fn lookup(table: &Table, input: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len(), output.len());
    output.fill(0);
    for (index, entry) in table.iter().enumerate() {
        let index = index as u8;
        for (out, byte) in output.iter_mut().zip(input) {
            out.conditional_assign(entry, byte.ct_eq(&index));
        }
    }
}

/// Constant-time forward S-box of a single byte.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    let mut out = [0u8];
    lookup(&SBOX, &[byte], &mut out);
    out[0]
}

/// Constant-time inverse S-box of a single byte.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    let mut out = [0u8];
    lookup(&INV_SBOX, &[byte], &mut out);
    out[0]
}
