//! The length_allocation module computes length-limited canonical Huffman
//! code lengths over one caller-owned buffer.
//!
//! The allocator makes three passes, every pass consuming the previous pass's
//! view of the same slots:
//! - Pass 1 (parent_pointers): merge the sorted weights into an implicit
//!   binary tree held as "extended parent pointers" inside the buffer.
//! - Pass 2 (node_depths): count how many of the deepest nodes would exceed
//!   the maximum code length and must be relocated shallower. Read-only.
//! - Pass 3 (node_depths): walk the tree level by level and write the final
//!   depth of each leaf into the tail of the buffer, either straight from the
//!   tree or with the relocated nodes reinserted at a computed depth.
//!
//! Because both the unmerged leaves and the emerging internal nodes are
//! individually sorted, pass 1 is a two-pointer merge rather than a heap, and
//! the whole pipeline needs no allocation beyond the input buffer itself.
//!
//! The process is inherently sequential and does not benefit from
//! multithreading.
//!
pub mod allocate;
pub mod node_depths;
pub mod parent_pointers;
