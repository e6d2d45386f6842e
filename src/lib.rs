//! Peek once at the start of a forward-only stream, then read the whole stream as if the peek
//! never happened.
//!
//! Typical use is content sniffing on a stream that cannot seek (a socket, a pipe, a
//! decompressor): look at the first few bytes, decide what to do, then hand the very same
//! reader on to whoever parses the data.
//!
//! ```
//! use std::io::Read;
//! use fwdpeek::PeekableExt;
//!
//! let mut reader = (&b"\x1f\x8b\x08 gzip data"[..]).peekable_once();
//! let magic = reader.peek(2).unwrap();
//! assert_eq!(magic, [0x1f_u8, 0x8b]);
//!
//! let mut all = Vec::new();
//! reader.read_to_end(&mut all).unwrap();
//! assert_eq!(all, b"\x1f\x8b\x08 gzip data");
//! ```
//!
//! Peeking is allowed once, and only before the first read. See [`PeekableReader`].

use std::io::{Read, Result};

mod detail;
mod error;
mod foreign_impl;
mod peekreader;
mod util;


pub use error::{Error, ErrorKind};
pub use peekreader::PeekableReader;

/// A forward-only byte source that a [`PeekableReader`] can wrap.
///
/// Reading is the only required capability. Everything else has a default that suits a pure
/// stream, override it when the source knows better.
pub trait Source: Read {
    /// Number of bytes the source still has to give from its current position, if known.
    ///
    /// This shrinks as the source is read, so that wrappers like [`std::io::Take`] and
    /// [`std::io::Chain`] can combine it with their own bookkeeping. The total stream length is
    /// what [`PeekableReader::source_len`] reports.
    fn length(&self) -> Option<u64> {
        None
    }

    /// Gives up the source, reporting any failure in doing so.
    ///
    /// The default just drops it.
    fn release(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Adds [`peekable_once`](PeekableExt::peekable_once) to every [`Source`].
pub trait PeekableExt: Source + Sized {
    /// Wraps `self` in a [`PeekableReader`].
    fn peekable_once(self) -> PeekableReader<Self> {
        PeekableReader::new(self)
    }
}

impl<S: Source> PeekableExt for S {}
