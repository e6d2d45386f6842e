#![no_main]

use core::fmt::Debug;
use fwdpeek::{ErrorKind, PeekableReader, Source};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;
use std::io::{Cursor, Read, Result, Seek, SeekFrom};

#[derive(Arbitrary, Debug)]
pub struct Target {
    pub refdat: Vec<u8>,
    pub chunk: u8,
    pub peek: Option<u16>,
    pub ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
pub enum Op {
    Read(u16),
    ReadExact(u16),
    ReadToEnd,
    Peek(u16),
    Seek(i64),
    StreamPosition,
}

/// Gives out at most `chunk` bytes per read so short reads get exercised.
struct Chunked {
    inner: Cursor<Vec<u8>>,
    chunk: usize,
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..n])
    }
}

impl Source for Chunked {}

fn assert_reseq<T: Eq + Debug>(x: Result<T>, y: Result<T>) {
    match (x, y) {
        (Ok(xo), Ok(yo)) => assert_eq!(xo, yo),
        (Err(xe), Err(ye)) => assert_eq!(xe.kind(), ye.kind()),
        _ => assert!(false, "Result assert mismatch")
    }
}

fn check_peek(peekable: &mut PeekableReader<Chunked>, refdat: &[u8], n: usize, chunk: usize) {
    let peeked = peekable.peek(n).unwrap();
    assert!(refdat.starts_with(&peeked));
    assert!(peeked.len() <= n.min(chunk));
}

fuzz_target!(|data: Target| {
    let chunk = (data.chunk as usize).max(1);
    let mut reference = Cursor::new(data.refdat.clone());
    let mut peekable = PeekableReader::new(Chunked { inner: Cursor::new(data.refdat), chunk });

    if let Some(n) = data.peek {
        check_peek(&mut peekable, reference.get_ref(), n as usize, chunk);
    }

    // The wrapped source may return short reads, so compare whole ranges
    // rather than single calls.
    for op in &data.ops {
        match *op {
            Op::Read(n) => {
                let mut vp = vec![0; n as usize];
                let got = peekable.read(&mut vp).unwrap();
                let mut vr = vec![0; got];
                reference.read_exact(&mut vr).unwrap();
                assert_eq!(vr, &vp[..got]);
            }
            Op::ReadExact(n) => {
                let mut vr = vec![0; n as usize]; let mut vp = vec![0; n as usize];
                let (rr, rp) = (reference.read_exact(&mut vr), peekable.read_exact(&mut vp));
                if rr.is_ok() {
                    assert_eq!(vr, vp);
                }
                assert_reseq(rr, rp);
            }
            Op::ReadToEnd => {
                let mut vr = Vec::new(); let mut vp = Vec::new();
                assert_reseq(reference.read_to_end(&mut vr), peekable.read_to_end(&mut vp));
                assert_eq!(vr, vp);
            }
            Op::Peek(n) => {
                if peekable.is_peeked() || peekable.has_started_reading() {
                    let err = peekable.peek(n as usize).unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::InvalidState);
                } else {
                    check_peek(&mut peekable, reference.get_ref(), n as usize, chunk);
                }
            }
            Op::Seek(n) => {
                if n != 0 {
                    assert!(peekable.seek(SeekFrom::Current(n)).is_err());
                }
            }
            Op::StreamPosition => {
                assert_eq!(peekable.stream_position().unwrap(), reference.position());
            }
        }
    }
});
