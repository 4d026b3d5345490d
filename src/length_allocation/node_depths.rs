//! Passes 2 and 3 of the allocator: decide how many nodes sit too deep, then
//! walk the implicit tree level by level and write the finished depths.
//!
//! Both passes read the extended parent pointer form through first(); the
//! assigners overwrite the buffer strictly from the tail backward, so the
//! head of the buffer still holds valid tree encoding for every slot they
//! have yet to read.
//!

use super::parent_pointers::first;

/// Pass 2: how many of the deepest nodes exceed maximum_length and must be
/// relocated to a shallower level. Climbs one tree level per step, root
/// downward, and returns the boundary index where the climb ran out of
/// allowed depth. Does not mutate the buffer.
pub fn find_nodes_to_relocate(array: &[u32], maximum_length: u32) -> isize {
    let mut current_node = array.len() as isize - 2;
    let mut current_depth = 1;
    while current_depth < maximum_length - 1 && current_node > 1 {
        current_node = first(array, current_node - 1, 0);
        current_depth += 1;
    }
    current_node
}

/// Pass 3, unlimited variant: write each leaf's depth into the tail of the
/// buffer, walking the tree from the root down.
///
/// At each depth the nodes between first_node and last_node are the internal
/// nodes of that level; whatever is left of the doubled node budget must be
/// leaves, and each leaf costs one output slot. High-index slots are written
/// first, so the highest-frequency symbols receive the shallowest depths.
pub fn allocate_node_lengths(array: &mut [u32]) {
    let mut first_node = array.len() as isize - 2;
    let mut next_node = array.len() as isize - 1;

    let mut current_depth = 1;
    let mut available_nodes = 2;
    while available_nodes > 0 {
        let last_node = first_node;
        first_node = first(array, last_node - 1, 0);

        for _ in 0..available_nodes - (last_node - first_node) {
            array[next_node as usize] = current_depth;
            next_node -= 1;
        }

        available_nodes = (last_node - first_node) << 1;
        current_depth += 1;
    }
}

/// Pass 3, limited variant: the same level walk, but the nodes_to_move
/// deepest nodes are not read from the tree. From insert_depth on, up to
/// 2^(current_depth - insert_depth) of them are grafted into each level until
/// none are left. The graft budget doubles with the level, matching the
/// capacity of the subtree rooted at the graft point, so the Kraft sum stays
/// at one.
pub fn allocate_node_lengths_with_relocation(
    array: &mut [u32],
    nodes_to_move: isize,
    insert_depth: u32,
) {
    let mut first_node = array.len() as isize - 2;
    let mut next_node = array.len() as isize - 1;

    // An insert_depth of 1 means the graft point is a direct child of the
    // root, which consumes two of the moved nodes up front.
    let mut current_depth = if insert_depth == 1 { 2 } else { 1 };
    let mut nodes_left_to_move = if insert_depth == 1 {
        nodes_to_move - 2
    } else {
        nodes_to_move
    };

    let mut available_nodes = (current_depth as isize) << 1;
    while available_nodes > 0 {
        let last_node = first_node;
        // Once the walk reaches the relocated region the natural boundary is
        // pinned; first() must not descend into the moved nodes.
        first_node = if first_node <= nodes_to_move {
            first_node
        } else {
            first(array, last_node - 1, nodes_to_move)
        };

        let mut offset = 0;
        if current_depth >= insert_depth {
            offset = nodes_left_to_move.min(1 << (current_depth - insert_depth));
        } else if current_depth == insert_depth - 1 {
            // One level above the graft point, one slot is reserved for the
            // internal node that will absorb the relocated subtree. If the
            // boundary slot was the first child of last_node it shifts by
            // one; the raw (unreduced) pointer value makes that visible.
            offset = 1;
            if array[first_node as usize] as isize == last_node {
                first_node += 1;
            }
        }

        for _ in 0..available_nodes - (last_node - first_node + offset) {
            array[next_node as usize] = current_depth;
            next_node -= 1;
        }

        nodes_left_to_move -= offset;
        available_nodes = (last_node - first_node + offset) << 1;
        current_depth += 1;
    }
}
