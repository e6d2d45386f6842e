use std::io;

/// Coarse classification of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The reader was used out of order (peeked twice, or peeked after reading).
    /// This is a bug in the calling code and never goes away by retrying.
    InvalidState,

    /// The operation does not exist for a forward-only, read-only stream.
    Unsupported,

    /// The underlying source failed.
    Io,
}

/// Errors returned by [`PeekableReader`](crate::PeekableReader).
///
/// End of stream is never an error, it is reported as a successful read of zero bytes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `peek` was called a second time.
    #[error("could not peek: the stream has already been peeked")]
    AlreadyPeeked,

    /// `peek` was called after the first read.
    #[error("could not peek: already started reading from the stream")]
    AlreadyReading,

    /// The named operation can never work on a forward-only, read-only stream.
    #[error("{0} is not supported on a forward-only stream")]
    Unsupported(&'static str),

    /// The underlying source failed, the error is passed on unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classifies this error, see [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyPeeked | Error::AlreadyReading => ErrorKind::InvalidState,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether repeating the failed call could succeed.
    ///
    /// Usage errors are permanent. I/O errors are retryable only for the kinds that std
    /// considers transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }

    /// Returns the underlying I/O error untouched, if this is one.
    pub fn into_io(self) -> Option<io::Error> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            Error::Unsupported(_) => io::Error::new(io::ErrorKind::Unsupported, err),
            Error::AlreadyPeeked | Error::AlreadyReading => io::Error::new(io::ErrorKind::Other, err),
        }
    }
}
