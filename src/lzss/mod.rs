//! The lzss module implements the dictionary half of lzhuf: a sliding
//! window over the most recently processed bytes and a prefix-keyed index
//! used to find the longest earlier occurrence of the bytes waiting in the
//! lookahead.
//!
//! The window, index and lookahead belong to exactly one running transform.
//! The encoder feeds every consumed byte through both structures; the
//! decoder only needs the window, since it copies matches instead of
//! finding them.
pub mod match_finder;
pub mod window;

/// Dictionary capacity of the sliding window in bytes. A power of two so
/// ring arithmetic can mask instead of divide.
pub const WINDOW_SIZE: usize = 4096;
/// log2 of WINDOW_SIZE, which is also the largest distance class.
pub const WINDOW_BITS: usize = 12;
/// Longest run a match token can describe, and the lookahead capacity.
pub const MAX_MATCH: usize = 60;
/// Below this length a match costs more bits than the literals it replaces.
pub const MIN_MATCH: usize = 3;
