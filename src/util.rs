use std::io::{ErrorKind, Read, Result};

/// One logical read: re-issued on `Interrupted`, otherwise returns whatever the reader gave.
pub fn read_once<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match reader.read(buf) {
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            res => return res,
        }
    }
}
