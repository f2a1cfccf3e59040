//! The bitstream module forms the bit-level I/O subsystem for lzhuf.
//!
//! Huffman codes and the verbatim remainder bits of match distances are not
//! byte aligned, so everything between the length header and the end of the
//! file flows through these two types. Bits are packed most significant
//! first; the writer pads the final partial byte with zeros.
//!
//! Both types are generic over the standard Read/Write traits and buffer
//! their transfers, so the drivers can hand them files, sockets or plain
//! byte slices.
pub mod bitreader;
pub mod bitwriter;
