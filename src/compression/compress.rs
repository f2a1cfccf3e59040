use std::io::{self, Read, Write};

use log::{debug, trace};

use super::Totals;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::CodecError;
use crate::huffman_coding::adaptive::AdaptiveCodeTable;
use crate::huffman_coding::alphabet;
use crate::lzss::match_finder::MatchIndex;
use crate::lzss::window::SlidingWindow;
use crate::lzss::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

/// Compress exactly `length` bytes from `source` into `sink`.
///
/// The output is a 4 byte little-endian copy of `length` followed by the
/// packed token stream, zero padded to a byte boundary. The source ending
/// before `length` bytes have been read is an error, as is a length the
/// header cannot hold.
pub fn compress<R: Read, W: Write>(
    mut source: R,
    length: u64,
    mut sink: W,
) -> Result<Totals, CodecError> {
    let declared = u32::try_from(length).map_err(|_| CodecError::InputTooLarge(length))?;
    sink.write_all(&declared.to_le_bytes())
        .map_err(CodecError::SinkIo)?;

    let mut bw = BitWriter::new(&mut sink);
    let mut window = SlidingWindow::new();
    let mut index = MatchIndex::new();
    let mut codes = AdaptiveCodeTable::new(alphabet::CODE_SYMS);
    let mut distances = AdaptiveCodeTable::new(alphabet::DIST_SYMS);

    // Prime the lookahead.
    let mut pulled: u64 = 0;
    while pulled < length && window.lookahead_len() < MAX_MATCH {
        match next_byte(&mut source)? {
            Some(byte) => {
                window.push_lookahead(byte);
                pulled += 1;
            }
            None => return Err(short_source()),
        }
    }

    let mut literals: u64 = 0;
    let mut matches: u64 = 0;
    while window.lookahead_len() > 0 {
        // Greedy choice: the longest match if one qualifies, else one
        // literal.
        let step = match index.find_longest(&window) {
            Some(m) => {
                trace!("match len {} dist {}", m.length, m.distance);
                codes
                    .encode_symbol(alphabet::length_symbol(m.length), &mut bw)
                    .map_err(CodecError::SinkIo)?;
                let (class, bits, remainder) = alphabet::distance_class(m.distance);
                distances
                    .encode_symbol(class, &mut bw)
                    .map_err(CodecError::SinkIo)?;
                bw.put_bits(remainder, bits).map_err(CodecError::SinkIo)?;
                matches += 1;
                m.length
            }
            None => {
                codes
                    .encode_symbol(window.lookahead_at(0) as u16, &mut bw)
                    .map_err(CodecError::SinkIo)?;
                literals += 1;
                1
            }
        };

        // Consume the token's bytes one at a time, keeping the lookahead
        // topped up and the index aware of every byte entering the window.
        for _ in 0..step {
            let byte = window
                .pop_lookahead()
                .expect("token never outruns the lookahead");
            if pulled < length {
                match next_byte(&mut source)? {
                    Some(next) => {
                        window.push_lookahead(next);
                        pulled += 1;
                    }
                    None => return Err(short_source()),
                }
            }
            // Expire before inserting: the new entry reuses the ring slot
            // (and its bucket note) of the position that just aged out.
            let pos = window.position();
            if window.advance(byte).is_some() {
                index.expire(pos - WINDOW_SIZE);
            }
            if window.lookahead_len() >= MIN_MATCH - 1 {
                index.insert([byte, window.lookahead_at(0), window.lookahead_at(1)], pos);
            }
        }
    }

    let body = bw.finish().map_err(CodecError::SinkIo)?;
    debug!(
        "encoded {} bytes as {} literals + {} matches, {} byte body",
        length, literals, matches, body
    );
    Ok(Totals {
        raw_bytes: length,
        coded_bytes: body + 4,
    })
}

/// Pull one byte from the source, or None at end of stream.
fn next_byte<R: Read>(source: &mut R) -> Result<Option<u8>, CodecError> {
    let mut byte = [0_u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::SourceIo(e)),
        }
    }
}

fn short_source() -> CodecError {
    CodecError::SourceIo(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "source ended before the declared length",
    ))
}
