use std::io::{ErrorKind, Read, Write};

use log::debug;

use crate::bitstream::bitreader::BitReader;
use crate::error::CodecError;
use crate::huffman_coding::adaptive::AdaptiveCodeTable;
use crate::huffman_coding::alphabet::{self, CodeSym};
use crate::lzss::window::SlidingWindow;

/// Expand a compressed stream from `source` into `sink`, returning the byte
/// count produced.
///
/// The declared length from the header is the only termination condition;
/// there is no end marker in the body. A stream whose bits run out first,
/// or whose tokens reference bytes that cannot exist, is rejected as
/// corrupt.
pub fn decompress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<u64, CodecError> {
    let mut header = [0_u8; 4];
    source.read_exact(&mut header).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            CodecError::CorruptStream("missing length header")
        } else {
            CodecError::SourceIo(e)
        }
    })?;
    let declared = u32::from_le_bytes(header) as u64;

    let mut br = BitReader::new(source);
    let mut window = SlidingWindow::new();
    let mut codes = AdaptiveCodeTable::new(alphabet::CODE_SYMS);
    let mut distances = AdaptiveCodeTable::new(alphabet::DIST_SYMS);

    let mut emitted: u64 = 0;
    while emitted < declared {
        let sym = codes
            .decode_symbol(&mut br)
            .map_err(CodecError::SourceIo)?
            .ok_or(CodecError::CorruptStream(
                "stream ended before the declared length",
            ))?;
        match alphabet::classify(sym) {
            CodeSym::Literal(byte) => {
                sink.write_all(&[byte]).map_err(CodecError::SinkIo)?;
                window.advance(byte);
                emitted += 1;
            }
            CodeSym::Length(length) => {
                let class = distances
                    .decode_symbol(&mut br)
                    .map_err(CodecError::SourceIo)?
                    .ok_or(CodecError::CorruptStream(
                        "stream ended inside a distance code",
                    ))?;
                let remainder = br
                    .bits(alphabet::remainder_bits(class))
                    .map_err(CodecError::SourceIo)?
                    .ok_or(CodecError::CorruptStream(
                        "stream ended inside a distance remainder",
                    ))?;
                let distance = alphabet::distance_from_class(class, remainder);
                if distance as u64 > emitted {
                    return Err(CodecError::CorruptStream(
                        "match reaches before the start of the output",
                    ));
                }
                if emitted + length as u64 > declared {
                    return Err(CodecError::CorruptStream(
                        "match runs past the declared length",
                    ));
                }
                // Copy byte by byte: when distance < length the run overlaps
                // bytes this same match is producing, so each read must see
                // the window as updated by the previous write.
                for _ in 0..length {
                    let byte = window.byte_at(distance);
                    sink.write_all(&[byte]).map_err(CodecError::SinkIo)?;
                    window.advance(byte);
                    emitted += 1;
                }
            }
        }
    }

    sink.flush().map_err(CodecError::SinkIo)?;
    debug!("expanded {} bytes", emitted);
    Ok(emitted)
}

#[cfg(test)]
mod test {
    use super::decompress;

    #[test]
    fn empty_stream_test() {
        let mut out = Vec::new();
        assert_eq!(decompress([0, 0, 0, 0].as_slice(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_header_test() {
        let mut out = Vec::new();
        assert!(decompress([0, 0].as_slice(), &mut out).is_err());
    }

    #[test]
    fn empty_body_with_nonzero_length_test() {
        // Declares one byte but carries no body bits at all.
        let mut out = Vec::new();
        assert!(decompress([1, 0, 0, 0].as_slice(), &mut out).is_err());
    }
}
