use std::io::{Read, Result};

use crate::util::read_once;

/// The bytes captured by a peek, and how far reads have consumed them.
///
/// `buf.len()` is the capacity that was asked for, `filled` is what the source actually
/// delivered. Bytes in `buf[filled..]` were never written and are never served.
#[derive(Debug)]
pub(crate) struct PeekCursor {
    buf: Box<[u8]>,
    filled: usize,
    pos: usize,
}

impl PeekCursor {
    /// Allocates `capacity` bytes and fills them with a single read from `source`.
    pub fn fill<R: Read + ?Sized>(source: &mut R, capacity: usize) -> Result<Self> {
        let mut buf = vec![0u8; capacity].into_boxed_slice();
        let filled = read_once(source, &mut buf)?;
        Ok(Self { buf, filled, pos: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Peeked bytes that reads have not yet seen.
    pub fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..self.filled]
    }

    /// Copies as much of the remaining peeked data into `out` as fits, advancing the cursor.
    ///
    /// Bounded by `out.len()`, by the capacity and by the filled length at once.
    pub fn drain_into(&mut self, out: &mut [u8]) -> usize {
        let n = out
            .len()
            .min(self.capacity() - self.pos)
            .min(self.filled.saturating_sub(self.pos));
        out[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        if self.pos == self.filled {
            // Nothing real is left. The unfilled tail of a short peek counts as consumed.
            self.pos = self.capacity();
        }
        n
    }

    /// True once the whole peek region has been consumed and the source should take over.
    pub fn is_drained(&self) -> bool {
        self.pos == self.capacity()
    }
}
