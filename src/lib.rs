//! A Rust implementation of the LZHUF compressed stream format.
//!
//! Compresses a single byte stream by finding repeated substrings against a
//! 4k sliding window of recently seen data, then entropy coding the
//! resulting literal/match tokens with a pair of adaptive Huffman trees.
//! The trees evolve as symbols are processed, so encoder and decoder must
//! apply bit-for-bit identical updates; no code table is ever stored in the
//! stream itself.
//!
//! Basic usage to compress and expand a file:
//!
//! `$> lzhuf e test.txt test.lzh`
//!
//! `$> lzhuf d test.lzh test.txt`
//!
//! The library surface is the pair of streaming drivers in [`compression`]
//! plus the slice conveniences below.
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lzss;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use compression::Totals;
pub use error::CodecError;

/// Compress a whole slice into a fresh buffer.
pub fn compress_slice(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    compress(input, input.len() as u64, &mut out)?;
    Ok(out)
}

/// Expand a whole compressed slice into a fresh buffer.
pub fn decompress_slice(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    decompress(input, &mut out)?;
    Ok(out)
}
