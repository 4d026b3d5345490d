//! Length-limited canonical Huffman code length allocation, as used by the
//! bzip2 family of compressors.
//!
//! Version 0.1.0
//! (This crate computes code *lengths* only. It does not assign code words.)
//!
//! Given a table of symbol frequencies sorted in non-decreasing order, the
//! allocator rewrites the table in place into canonical Huffman code lengths,
//! with no length exceeding a caller-supplied maximum. The whole computation
//! runs inside the caller's buffer: the same slots hold frequencies, then an
//! implicit binary tree, then the finished lengths. This is the allocation
//! scheme bzip2 relies on to keep every code within its 17 bit wire limit
//! without a retry loop.
//!
//! Basic usage over a sorted frequency table is as follows:
//!
//! `allocate_huffman_code_lengths(&mut table, 17);`
//!
//! The surrounding codec owns everything else: counting and sorting the
//! frequencies, choosing the maximum length its wire format can describe, and
//! turning the returned lengths into actual code words.
//!
pub mod length_allocation;
pub mod tools;
