use thiserror::Error;

/// Errors surfaced by a compress or decompress pass.
///
/// Any of these aborts the transform as a whole; nothing is retried
/// internally and no partial output is guaranteed. Out-of-range arguments to
/// the window or tree internals are programming faults, not data errors, and
/// fail an assertion instead of appearing here.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Reading the raw input or the encoded body failed, or the source ended
    /// before the declared compress length.
    #[error("error reading source: {0}")]
    SourceIo(#[source] std::io::Error),

    /// Writing to the output failed.
    #[error("error writing sink: {0}")]
    SinkIo(#[source] std::io::Error),

    /// The encoded body does not decode to the declared byte count.
    #[error("corrupt compressed stream: {0}")]
    CorruptStream(&'static str),

    /// The length header cannot represent an input this large.
    #[error("input of {0} bytes exceeds the 32 bit length header")]
    InputTooLarge(u64),
}
