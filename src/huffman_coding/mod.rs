//! The huffman_coding module entropy codes the token stream for lzhuf.
//!
//! Unlike a two-pass Huffman coder, the code trees here are adaptive: every
//! symbol processed bumps its frequency and may reshuffle the tree, so the
//! codes for frequent symbols shrink as the stream progresses. Encoder and
//! decoder each hold their own instances and apply identical updates after
//! every symbol, which keeps the two sides in lockstep without writing any
//! table to the stream.
//!
//! Two independent tables run within one transform: one over the 314
//! literal/length symbols and one over the 13 distance classes, since the
//! two distributions have nothing in common and sharing a tree would dilute
//! both.
pub mod adaptive;
pub mod alphabet;
