use std::io::{self, Read, Seek, SeekFrom};

use tracing::{debug, trace};

use crate::detail::{PeekCursor, State};
use crate::{Error, Source};

/// A wrapper around a forward-only [`Source`] that allows looking at the start of the stream
/// once, without losing those bytes for the reads that follow.
///
/// ```
/// use std::io::Read;
/// use fwdpeek::PeekableReader;
///
/// let mut reader = PeekableReader::new(&b"GIF89a..."[..]);
/// assert_eq!(reader.peek(6).unwrap(), b"GIF89a");
///
/// let mut all = Vec::new();
/// reader.read_to_end(&mut all).unwrap();
/// assert_eq!(all, b"GIF89a...");
/// ```
///
/// The reader is read-only and forward-only. It implements [`Seek`] only so that it can be
/// used where a `Seek` bound is required: asking for the current position works, every
/// actual seek fails with [`io::ErrorKind::Unsupported`].
#[derive(Debug)]
pub struct PeekableReader<S> {
    state: State,
    // Bytes handed out by `read` so far.
    position: u64,
    // A source error hit after peeked bytes were already copied into the caller's buffer.
    deferred: Option<io::Error>,
    inner: S,
}

impl<S: Source> PeekableReader<S> {
    /// Creates a new [`PeekableReader`] that owns `source`.
    pub fn new(source: S) -> Self {
        Self {
            state: State::Fresh,
            position: 0,
            deferred: None,
            inner: source,
        }
    }

    /// Reads up to `max_len` bytes from the start of the stream and returns a copy of them.
    ///
    /// The source gets exactly one read request, so fewer than `max_len` bytes (even none)
    /// may come back without that meaning the stream has ended. Every byte returned here is
    /// returned again by later calls to [`Read::read`].
    ///
    /// Fails with [`Error::AlreadyReading`] once reading has started and with
    /// [`Error::AlreadyPeeked`] on a second call. I/O errors from the source are returned
    /// as-is and leave the reader untouched.
    pub fn peek(&mut self, max_len: usize) -> Result<Vec<u8>, Error> {
        match self.state {
            State::Fresh => {}
            State::Peeked(_) => return Err(Error::AlreadyPeeked),
            State::PeekedThenReading(_) | State::Reading => return Err(Error::AlreadyReading),
        }

        let cursor = PeekCursor::fill(&mut self.inner, max_len)?;
        trace!(max_len, filled = cursor.filled().len(), "peeked source");
        let peeked = cursor.filled().to_vec();
        self.state = State::Peeked(cursor);
        Ok(peeked)
    }

    /// Whether [`Self::peek`] has succeeded on this reader.
    pub fn is_peeked(&self) -> bool {
        self.state.has_peeked()
    }

    /// Whether [`Read::read`] has been called, even if it returned nothing.
    pub fn has_started_reading(&self) -> bool {
        self.state.has_started_reading()
    }

    /// Number of peeked bytes that reads have yet to return.
    pub fn peeked_len(&self) -> usize {
        self.state.cursor().map_or(0, |c| c.remaining().len())
    }

    /// Bytes returned by [`Read::read`] so far. Peeking does not move this.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total length of the stream this reader presents, if the source knows how much it has
    /// left.
    ///
    /// Counted from where the source was when it got wrapped, so the value does not change as
    /// the stream is peeked and read.
    pub fn source_len(&self) -> Option<u64> {
        let rest = self.inner.length()?;
        Some(self.position + self.peeked_len() as u64 + rest)
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Gets a mutable reference to the underlying source.
    ///
    /// It is inadvisable to directly read from the underlying source, bytes read that way
    /// are skipped by this reader.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps this `PeekableReader<S>`, returning the underlying source.
    ///
    /// Peeked bytes that were not read yet are lost.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Releases the underlying source, returning any error it reports.
    pub fn release(self) -> Result<(), Error> {
        if let Some(e) = &self.deferred {
            debug!(error = %e, "releasing with an unreported read error");
        }
        trace!(position = self.position, "releasing source");
        self.inner.release()?;
        Ok(())
    }
}

impl<S: Source> Read for PeekableReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = match self.state.start_reading() {
            None => {
                if let Some(e) = self.deferred.take() {
                    return Err(e);
                }
                self.inner.read(buf)?
            }
            Some(cursor) => {
                let copied = cursor.drain_into(buf);
                if !cursor.is_drained() {
                    copied
                } else {
                    self.state.release_cursor();
                    debug!(position = self.position + copied as u64, "peek buffer drained");
                    if copied == buf.len() {
                        copied
                    } else {
                        match self.inner.read(&mut buf[copied..]) {
                            Ok(n) => copied + n,
                            Err(e) if copied > 0 => {
                                debug!(error = %e, copied, "deferring source error");
                                self.deferred = Some(e);
                                copied
                            }
                            Err(e) => return Err(e),
                        }
                    }
                }
            }
        };
        self.position += n as u64;
        Ok(n)
    }
}

impl<S: Source> Seek for PeekableReader<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Current(0) => Ok(self.position),
            _ => Err(Error::Unsupported("seek").into()),
        }
    }
}
