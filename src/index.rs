//! Index arithmetic for a complete binary tree stored in a slice, root at `0`.
//!
//! ```text
//!               0
//!            /     \
//!          1         2
//!        /   \     /   \
//!       3     4   5     6
//! ```
//!
//! None of these check bounds: compare the result against the heap length before indexing.

/// O(1). `node` must not be the root.
#[inline]
pub const fn parent(node: usize) -> usize {
    debug_assert!(node != 0);
    (node - 1) / 2
}

/// O(1)
#[inline]
pub const fn left(node: usize) -> usize {
    2 * node + 1
}

/// O(1)
#[inline]
pub const fn right(node: usize) -> usize {
    2 * node + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_point_back_to_parent() {
        for node in 0..1024 {
            assert_eq!(parent(left(node)), node);
            assert_eq!(parent(right(node)), node);
            assert_eq!(right(node), left(node) + 1);
        }
    }

    #[test]
    fn first_levels() {
        assert_eq!((left(0), right(0)), (1, 2));
        assert_eq!((left(1), right(1)), (3, 4));
        assert_eq!((left(2), right(2)), (5, 6));
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
    }
}
