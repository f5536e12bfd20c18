//! Counting sort over small dense keys.

/// Stable counting sort of item indices `0..keys.len()` by `keys[i]`.
///
/// Returns the permutation: `order[p]` is the item placed at position `p`.
/// Items with equal keys keep their relative order.
///
/// # Panics
/// Panics if a key is `>= num_keys`.
pub fn counting_sort_order(keys: &[usize], num_keys: usize) -> Vec<usize> {
    let mut start = vec![0usize; num_keys + 1];
    for &k in keys {
        start[k + 1] += 1;
    }
    for k in 0..num_keys {
        start[k + 1] += start[k];
    }

    let mut order = vec![0usize; keys.len()];
    for (i, &k) in keys.iter().enumerate() {
        order[start[k]] = i;
        start[k] += 1;
    }
    order
}

/// Inverse of a permutation returned by [`counting_sort_order`].
pub fn inverse_permutation(order: &[usize]) -> Vec<usize> {
    let mut position = vec![0usize; order.len()];
    for (p, &i) in order.iter().enumerate() {
        position[i] = p;
    }
    position
}
