use clap::{Parser, Subcommand};

/// Command Line Interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "An LZSS + adaptive Huffman file compressor",
    long_about = "
    lzhuf pairs a sliding-window string matcher with a pair of adaptive
    Huffman code trees, the scheme used by the classic LZHUF tool and the
    FBB message forwarding protocol. One invocation processes exactly one
    stream; there is no archive or multi-file handling."
)]
pub struct LzhufArgs {
    #[clap(subcommand)]
    pub mode: Mode,

    /// Sets verbosity. -v 0 shows nothing, -v 5 is chatty.
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

/// The two invocation forms: `lzhuf e file1 file2` compresses file1 into
/// file2, `lzhuf d file2 file1` expands it back.
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Compress INPUT into OUTPUT
    #[clap(name = "e")]
    Encode { input: String, output: String },
    /// Expand a compressed INPUT into OUTPUT
    #[clap(name = "d")]
    Decode { input: String, output: String },
}

/// Parse the command line and set the global log level from -v. Invalid
/// modes and argument counts never get past this point.
pub fn init() -> LzhufArgs {
    let args = LzhufArgs::parse();
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    args
}
