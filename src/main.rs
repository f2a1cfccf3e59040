//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::process::exit;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use lzhuf::compression::compress::compress;
use lzhuf::compression::decompress::decompress;
use lzhuf::error::CodecError;
use lzhuf::tools::cli::{self, Mode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    // Parse the command line; this also caps the log level from -v.
    let args = cli::init();

    //----- Figure out what we need to do and go do it
    let result = match &args.mode {
        Mode::Encode { input, output } => encode_file(input, output),
        Mode::Decode { input, output } => decode_file(input, output),
    };

    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
    info!("Done.\n");
}

/// Compress `input` into `output` and report the ratio.
fn encode_file(input: &str, output: &str) -> Result<(), CodecError> {
    let length = fs::metadata(input).map_err(CodecError::SourceIo)?.len();
    let fin = File::open(input).map_err(CodecError::SourceIo)?;
    let fout = File::create(output).map_err(CodecError::SinkIo)?;

    let totals = compress(BufReader::new(fin), length, BufWriter::new(fout))?;
    if totals.raw_bytes > 0 {
        info!(
            "compressed {}/{} = {} percent",
            totals.coded_bytes,
            totals.raw_bytes,
            totals.raw_bytes.saturating_sub(totals.coded_bytes) * 100 / totals.raw_bytes
        );
    }
    Ok(())
}

/// Expand a compressed `input` into `output`.
fn decode_file(input: &str, output: &str) -> Result<(), CodecError> {
    let fin = File::open(input).map_err(CodecError::SourceIo)?;
    let fout = File::create(output).map_err(CodecError::SinkIo)?;

    let emitted = decompress(BufReader::new(fin), BufWriter::new(fout))?;
    info!("expanded to {} bytes", emitted);
    Ok(())
}
