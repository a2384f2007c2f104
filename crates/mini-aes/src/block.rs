//! Block representation helpers.

/// AES block of 16 bytes, column-major state.
pub type Block = [u8; 16];

/// Size of one block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of blocks processed by the batched entry points.
pub const BATCH_BLOCKS: usize = 8;

/// Size of one batch in bytes.
pub const BATCH_SIZE: usize = BLOCK_SIZE * BATCH_BLOCKS;

/// Eight contiguous blocks.
pub type Batch = [u8; BATCH_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Splits a batch into its eight lanes.
pub(crate) fn split_batch(batch: &Batch) -> [Block; BATCH_BLOCKS] {
    let mut lanes = [[0u8; BLOCK_SIZE]; BATCH_BLOCKS];
    for (lane, chunk) in lanes.iter_mut().zip(batch.chunks_exact(BLOCK_SIZE)) {
        lane.copy_from_slice(chunk);
    }
    lanes
}

/// Concatenates eight lanes back into a batch.
pub(crate) fn join_batch(lanes: &[Block; BATCH_BLOCKS]) -> Batch {
    let mut batch = [0u8; BATCH_SIZE];
    batch.copy_from_slice(lanes.as_flattened());
    batch
}
