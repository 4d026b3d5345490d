use log::trace;

use crate::length_allocation::allocate::allocate_huffman_code_lengths;

/// Compute per-symbol code lengths, at most maximum_length bits each, from a
/// frequency table indexed by symbol. Returns the lengths in the same symbol
/// order. The sortedness the allocator requires is handled here: frequencies
/// are paired with their symbols, sorted, allocated, and scattered back.
///
/// Ties sort by symbol index, so equal frequencies always land the same way
/// and the output is reproducible run to run.
pub fn code_lengths_from_frequencies(frequencies: &[u32], maximum_length: u32) -> Vec<u32> {
    // Pair each frequency with its symbol so the sort can be undone later.
    let mut freq_sym: Vec<(u32, u16)> = frequencies
        .iter()
        .enumerate()
        .map(|(sym, &freq)| (freq, sym as u16))
        .collect();
    freq_sym.sort_unstable();

    // The allocator overwrites the sorted weights with sorted lengths.
    let mut sorted: Vec<u32> = freq_sym.iter().map(|&(freq, _)| freq).collect();
    allocate_huffman_code_lengths(&mut sorted, maximum_length);

    // Scatter the lengths back to symbol order.
    let mut lengths = vec![0_u32; frequencies.len()];
    for (&(_, sym), &len) in freq_sym.iter().zip(sorted.iter()) {
        lengths[sym as usize] = len;
    }

    if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
        trace!(
            "{} symbols coded in {}-{} bits (limit {})",
            lengths.len(),
            min,
            max,
            maximum_length
        );
    }
    lengths
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symbol_order_test() {
        // Sorted low to high this is 1,1,2,2,4 -> 3,3,2,2,2; the answer must
        // come back keyed by symbol, not by rank.
        let lengths = code_lengths_from_frequencies(&[4, 1, 2, 1, 2], 4);
        assert_eq!(lengths, [2, 3, 2, 3, 2]);
    }

    #[test]
    fn relocation_through_wrapper_test() {
        // Interleaved power-of-two weights, 4 bit cap. The two most frequent
        // symbols sit at indices 0 and 2.
        let lengths = code_lengths_from_frequencies(&[128, 1, 64, 2, 32, 4, 16, 8], 4);
        assert_eq!(lengths, [1, 4, 3, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn tie_break_test() {
        // Six equal frequencies cannot all get the same length. Ties resolve
        // by symbol index, so the shorter codes go to the highest symbols.
        let lengths = code_lengths_from_frequencies(&[5, 5, 5, 5, 5, 5], 3);
        assert_eq!(lengths, [3, 3, 3, 3, 2, 2]);
    }

    #[test]
    fn already_sorted_test() {
        let lengths = code_lengths_from_frequencies(&[1, 1, 2, 2, 4], 4);
        assert_eq!(lengths, [3, 3, 2, 2, 2]);
    }

    #[test]
    fn empty_and_tiny_tables_test() {
        assert!(code_lengths_from_frequencies(&[], 17).is_empty());
        assert_eq!(code_lengths_from_frequencies(&[7], 17), [1]);
        assert_eq!(code_lengths_from_frequencies(&[9, 1], 17), [1, 1]);
    }
}
