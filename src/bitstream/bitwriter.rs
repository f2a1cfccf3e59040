use std::io::{self, Write};

/// Packed bytes are staged here and pushed to the sink in blocks.
const FLUSH_SIZE: usize = 1 << 16;

/// Packs variable length bit codes into a byte stream for output.
pub struct BitWriter<W: Write> {
    /// Staging buffer between the bit queue and the sink.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u32,
    /// Count of bytes pushed to the sink so far.
    written: u64,
    /// Handle to the output stream.
    sink: W,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            output: Vec::with_capacity(FLUSH_SIZE),
            queue: 0,
            q_bits: 0,
            written: 0,
            sink,
        }
    }

    /// Append the low `count` bits of `value` to the stream, most
    /// significant bit first. `count` must be 24 or less.
    pub fn put_bits(&mut self, value: u32, count: u32) -> io::Result<()> {
        debug_assert!(count <= 24, "bit field of {} bits", count);
        self.queue <<= count;
        self.queue |= value as u64 & ((1 << count) - 1);
        self.q_bits += count;
        // Drain whole bytes into the staging buffer.
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        if self.output.len() >= FLUSH_SIZE {
            self.push_to_sink()?;
        }
        Ok(())
    }

    fn push_to_sink(&mut self) -> io::Result<()> {
        self.sink.write_all(&self.output)?;
        self.written += self.output.len() as u64;
        self.output.clear();
        Ok(())
    }

    /// Pad the remaining bits (1-7) with zeros in the least significant
    /// positions, push everything to the sink and flush it. Returns the
    /// total byte count written over the life of the writer.
    pub fn finish(mut self) -> io::Result<u64> {
        if self.q_bits > 0 {
            let pad = 8 - self.q_bits;
            self.queue <<= pad;
            self.output.push(self.queue as u8);
            self.q_bits = 0;
        }
        self.push_to_sink()?;
        self.sink.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn pad_test() {
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        bw.put_bits(0b101, 3).unwrap();
        assert_eq!(bw.finish().unwrap(), 1);
        assert_eq!(out, vec![0b1010_0000]);
    }

    #[test]
    fn cross_byte_test() {
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        bw.put_bits(0xff, 8).unwrap();
        bw.put_bits(0, 1).unwrap();
        bw.put_bits(0b11, 2).unwrap();
        bw.finish().unwrap();
        assert_eq!(out, vec![0xff, 0b0110_0000]);
    }

    #[test]
    fn high_bits_masked_test() {
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        // Only the low 4 bits of the value may appear on the stream.
        bw.put_bits(0xfff2, 4).unwrap();
        bw.put_bits(0x3, 4).unwrap();
        bw.finish().unwrap();
        assert_eq!(out, vec![0x23]);
    }

    #[test]
    fn zero_width_test() {
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        bw.put_bits(0xff, 0).unwrap();
        assert_eq!(bw.finish().unwrap(), 0);
        assert!(out.is_empty());
    }
}
