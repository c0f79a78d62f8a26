//! Content digest engine
//!
//! Computes a fixed-length SHA-256 digest over the full byte content of a
//! document. Deterministic and side-effect free: the only failure mode is an
//! I/O error from the underlying source. Content is consumed in fixed-size
//! chunks so memory stays bounded regardless of file size.

use std::io::Read;

use sha2::{Digest as _, Sha256};

use crate::domain::Digest;
use crate::error::Result;

/// Chunk size for streaming digest computation
pub const DIGEST_CHUNK_SIZE: usize = 64 * 1024;

/// Incremental digest computation over content that arrives in pieces,
/// e.g. a multipart upload stream.
#[derive(Default)]
pub struct DocumentDigester {
    hasher: Sha256,
    bytes_read: u64,
}

impl DocumentDigester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of content.
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.bytes_read += chunk.len() as u64;
    }

    /// Total bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Finish and produce the digest.
    pub fn finalize(self) -> Digest {
        Digest::from_bytes(self.hasher.finalize().into())
    }
}

/// Compute the digest of a full in-memory document.
pub fn digest_bytes(content: &[u8]) -> Digest {
    let mut digester = DocumentDigester::new();
    digester.update(content);
    digester.finalize()
}

/// Compute the digest of a document read from `source`, streaming in
/// [`DIGEST_CHUNK_SIZE`] chunks. Fails only if the source fails to read.
pub fn digest_reader<R: Read>(mut source: R) -> Result<Digest> {
    let mut digester = DocumentDigester::new();
    let mut buf = vec![0u8; DIGEST_CHUNK_SIZE];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        digester.update(&buf[..n]);
    }
    Ok(digester.finalize())
}
