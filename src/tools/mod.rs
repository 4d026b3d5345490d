//! The tools module provides helper functions around the in-place length
//! allocator.
//!
//! The allocator itself insists on a frequency table sorted low to high and
//! answers in that same order. A real Huffman stage holds its frequencies
//! indexed by symbol, so the helpers here carry the sort and un-sort
//! bookkeeping.
//!
//! The tools are:
//! - freq_lengths: per-symbol code lengths from an unsorted frequency table.
//!
pub mod freq_lengths;
