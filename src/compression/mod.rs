//! The compression module holds the two stream drivers for lzhuf.
//!
//! Encoding is a single greedy pass: prime the lookahead, ask the match
//! finder for the longest run already in the window, emit either a match
//! token (length symbol, then distance class plus remainder bits) or a
//! literal token, and slide the window over the consumed bytes. Once a
//! token is chosen its bytes are consumed irrevocably; there is no
//! backtracking or optimal parse.
//!
//! Decoding is the mirror image minus the searching: read a symbol, emit a
//! byte or copy a run back out of the window, and stop exactly when the
//! byte count from the header has been produced. There is no end marker in
//! the body.
//!
//! Both drivers build their window and code tables fresh per call and
//! stream through bounded memory, so input size is limited only by the
//! 32 bit length header.
pub mod compress;
pub mod decompress;

/// Byte counts from a completed compression pass, for ratio reporting.
#[derive(Debug, Clone, Copy)]
pub struct Totals {
    /// Bytes consumed from the raw source.
    pub raw_bytes: u64,
    /// Bytes written to the sink, header included.
    pub coded_bytes: u64,
}
