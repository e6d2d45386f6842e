use crate::Source;
use std::fs::File;
use std::io::*;
use std::process::{ChildStderr, ChildStdout};

// Releasing through a borrow is a no-op, the owner of `S` releases it.
impl<S: Source + ?Sized> Source for &mut S {
    #[inline]
    fn length(&self) -> Option<u64> {
        (**self).length()
    }
}

impl<S: Source> Source for Box<S> {
    #[inline]
    fn length(&self) -> Option<u64> {
        (**self).length()
    }

    fn release(self) -> Result<()> {
        (*self).release()
    }
}

impl Source for Empty {
    fn length(&self) -> Option<u64> {
        Some(0)
    }
}

impl Source for &[u8] {
    fn length(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl<T: AsRef<[u8]>> Source for Cursor<T> {
    fn length(&self) -> Option<u64> {
        Some((self.get_ref().as_ref().len() as u64).saturating_sub(self.position()))
    }
}

impl Source for File {
    fn length(&self) -> Option<u64> {
        let mut file: &File = self;
        let pos = file.stream_position().ok()?;
        Some(self.metadata().ok()?.len().saturating_sub(pos))
    }
}

impl<T: Source> Source for Take<T> {
    fn length(&self) -> Option<u64> {
        self.get_ref().length().map(|len| len.min(self.limit()))
    }

    fn release(self) -> Result<()> {
        self.into_inner().release()
    }
}

impl<T: Source, U: Source> Source for Chain<T, U> {
    fn length(&self) -> Option<u64> {
        let (first, second) = self.get_ref();
        Some(first.length()?.saturating_add(second.length()?))
    }

    fn release(self) -> Result<()> {
        let (first, second) = self.into_inner();
        let first = first.release();
        second.release()?;
        first
    }
}

impl Source for Stdin {}

impl Source for ChildStdout {}

impl Source for ChildStderr {}
