/// Property checks for the heap and its sift routines.
///
/// These tests verify:
/// 1. **Heap order** holds after arbitrary push/pop/update/remove sequences
/// 2. **Size accounting** - `len` tracks pushes minus pops
/// 3. **Extraction order** - pops are non-increasing under `Max`
/// 4. **Equivalence** - the heap agrees with `std::collections::BinaryHeap`
/// 5. **Shared use** - a mutex-guarded heap stays consistent across threads
#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Mutex;

    use crate::order::{Max, Min};
    use crate::sift;
    use crate::sort;
    use crate::{BinaryHeap, HeapError, IntHeap};

    const SEEDS: &[u64] = &[1, 7, 42, 1234, 0xDEAD_BEEF];

    fn random_values(rng: &mut StdRng, n: usize, range: i64) -> Vec<i64> {
        (0..n).map(|_| rng.gen_range(-range..range)).collect()
    }

    /// Checks every parent/child pair explicitly, independent of `is_heap`.
    fn assert_heap_order(heap: &IntHeap) {
        let data = heap.as_slice();
        for i in 0..data.len() {
            for c in [2 * i + 1, 2 * i + 2] {
                if c < data.len() {
                    assert!(
                        data[i] >= data[c],
                        "parent {} at {} below child {} at {}",
                        data[i],
                        i,
                        data[c],
                        c
                    );
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Fixed vectors
    // ---------------------------------------------------------------

    #[test]
    fn test_round_trip_vector() {
        let mut heap = IntHeap::new();
        for v in [5, 1, 8, 3, 9, 2] {
            heap.push(v);
        }
        let out: Vec<i64> = heap.into_iter_sorted().collect();
        assert_eq!(out, vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_heapify_vector() {
        let mut heap = IntHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_heap_order(&heap);
        assert_eq!(heap.pop(), Ok(9));
        assert_eq!(heap.len(), 7);
        assert_heap_order(&heap);
    }

    #[test]
    fn test_empty_pop_is_error() {
        let mut heap = IntHeap::new();
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        // Still an error on repeat, and still empty.
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    // ---------------------------------------------------------------
    // Randomised operation sequences
    // ---------------------------------------------------------------

    #[test]
    fn test_random_push_pop_sequences() {
        for &seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut heap = IntHeap::new();
            let mut pushes = 0usize;
            let mut pops = 0usize;

            for _ in 0..2000 {
                if rng.gen_bool(0.6) || heap.is_empty() {
                    heap.push(rng.gen_range(-1000..1000));
                    pushes += 1;
                } else {
                    let top = *heap.peek().unwrap();
                    assert_eq!(heap.pop(), Ok(top));
                    pops += 1;
                }
                assert_eq!(heap.len(), pushes - pops);
            }
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn test_extraction_order_non_increasing() {
        for &seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let heap: IntHeap = random_values(&mut rng, 777, 50).into_iter().collect();
            let out: Vec<i64> = heap.into_iter_sorted().collect();
            assert_eq!(out.len(), 777);
            for pair in out.windows(2) {
                assert!(pair[0] >= pair[1], "{} popped before {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_matches_std_binary_heap() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut ours = IntHeap::new();
        let mut reference = std::collections::BinaryHeap::new();
        for _ in 0..5000 {
            if rng.gen_bool(0.55) {
                let v = rng.gen_range(0..10_000);
                ours.push(v);
                reference.push(v);
            } else {
                assert_eq!(ours.pop().ok(), reference.pop());
            }
            assert_eq!(ours.peek(), reference.peek());
        }
    }

    #[test]
    fn test_random_update_and_remove() {
        for &seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut heap = IntHeap::from_vec(random_values(&mut rng, 300, 1000));
            for _ in 0..300 {
                let idx = rng.gen_range(0..heap.len());
                if rng.gen_bool(0.5) {
                    let delta = rng.gen_range(-500..500);
                    heap.update(idx, |v| *v += delta).unwrap();
                } else {
                    heap.remove(idx).unwrap();
                    heap.push(rng.gen_range(-1000..1000));
                }
                assert!(sift::is_heap(&heap));
            }
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn test_min_heap_mirrors_max() {
        let mut rng = StdRng::seed_from_u64(5);
        let values = random_values(&mut rng, 200, 100);
        let max: BinaryHeap<i64, Max> = values.iter().copied().collect();
        let min: BinaryHeap<i64, Min> = values.iter().copied().collect();
        let mut from_max: Vec<i64> = max.into_iter_sorted().collect();
        let from_min: Vec<i64> = min.into_iter_sorted().collect();
        from_max.reverse();
        assert_eq!(from_max, from_min);
    }

    #[test]
    fn test_heap_sort_random() {
        for &seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut xs = random_values(&mut rng, 1024, 1 << 20);
            let mut expected = xs.clone();
            expected.sort_unstable();
            sort::heap_sort(&mut xs);
            assert_eq!(xs, expected);
        }
    }

    #[test]
    fn test_heapify_at_tree_boundaries() {
        // Sizes around powers of two exercise the last-parent index.
        for n in [0usize, 1, 2, 3, 4, 7, 8, 9, 15, 16, 17, 31, 32, 33] {
            let heap = IntHeap::from_vec((0..n as i64).collect());
            assert_eq!(heap.len(), n);
            assert!(sift::is_heap(&heap), "not a heap at n={n}");
            if n > 0 {
                assert_eq!(heap.peek(), Some(&(n as i64 - 1)));
            }
        }
    }

    // ---------------------------------------------------------------
    // Shared use behind a lock
    // ---------------------------------------------------------------

    #[test]
    fn test_mutex_guarded_heap_across_threads() {
        const THREADS: i64 = 4;
        const PER_THREAD: i64 = 250;
        let shared = Mutex::new(IntHeap::new());

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let shared = &shared;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        shared.lock().unwrap().push(t * PER_THREAD + i);
                    }
                });
            }
        });

        let heap = shared.into_inner().unwrap();
        assert_eq!(heap.len() as i64, THREADS * PER_THREAD);
        assert!(sift::is_heap(&heap));
        let out: Vec<i64> = heap.into_iter_sorted().collect();
        let expected: Vec<i64> = (0..THREADS * PER_THREAD).rev().collect();
        assert_eq!(out, expected);
    }
}
