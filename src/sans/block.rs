//! Staging of chunked input into whole blocks.

/// Length of an archive block, in bytes.
pub const BLOCK_LEN: usize = 512;

/// A whole block of archive data.
///
/// Blocks are the only granularity at which an archive is interpreted, as a
/// file header or a run of file content.
#[derive(Debug)]
pub struct Block([u8; BLOCK_LEN]);

impl Block {
    /// The raw bytes of the block.
    pub fn bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}

/// Reassembles arbitrarily sized chunks into whole blocks.
///
/// The accumulator owns a single block, overwritten in place as each new
/// block is staged. A chunk may complete none, one, or several blocks
/// depending on its length and the bytes already staged.
#[derive(Debug)]
pub struct Accumulator {
    block: Block,
    cursor: usize,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            block: Block([0; BLOCK_LEN]),
            cursor: 0,
        }
    }

    /// Copy bytes from the front of a chunk into the staged block, returning
    /// the unconsumed remainder.
    ///
    /// Copying stops once the block is whole; drain the remainder by calling
    /// again after [`clear`](Self::clear). An empty chunk is a no-op.
    pub fn fill<'c>(&mut self, r: &'c [u8]) -> &'c [u8] {
        let take = usize::min(r.len(), BLOCK_LEN - self.cursor);
        let (taken, rest) = r.split_at(take);

        self.block.0[self.cursor..self.cursor + take].copy_from_slice(taken);
        self.advance(take);

        rest
    }

    /// The staged block, once whole.
    pub fn block(&self) -> Option<&Block> {
        (self.cursor == BLOCK_LEN).then_some(&self.block)
    }

    /// Discard the staged block, beginning the next.
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Advance the cursor, clamping at the block length so a bad count
    /// cannot run past the buffer.
    fn advance(&mut self, n: usize) {
        self.cursor = usize::min(self.cursor.saturating_add(n), BLOCK_LEN);
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
