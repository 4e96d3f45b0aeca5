use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub type Pair<T> = (T, T);
pub type Vec2<T> = Vec<Vec<T>>;
pub type Vec3<T> = Vec<Vec<Vec<T>>>;
pub type MaxHeap<T> = BinaryHeap<T>;
pub type MinHeap<T> = BinaryHeap<Reverse<T>>;

#[cfg(test)]
mod aliases_tests {
    use super::{MinHeap, Pair, Vec2};
    use std::cmp::Reverse;

    #[test]
    fn min_heap_pops_smallest() {
        let mut heap = MinHeap::new();
        for x in [5, 1, 3] {
            heap.push(Reverse(x));
        }
        assert_eq!(heap.pop(), Some(Reverse(1)));
    }

    #[test]
    fn grid_shorthands() {
        let grid: Vec2<u8> = vec![vec![0; 3]; 2];
        let cell: Pair<usize> = (1, 2);
        assert_eq!(grid[cell.0][cell.1], 0);
    }
}
