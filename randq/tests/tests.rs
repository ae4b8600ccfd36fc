use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use randq::{Error, RandomizedQueue};

////////////////////////////////////////////////////////////////////////////////

fn seeded<T>(seed: u64) -> RandomizedQueue<T, StdRng> {
    RandomizedQueue::with_rng(StdRng::seed_from_u64(seed))
}

#[test]
fn empty() {
    let mut queue = RandomizedQueue::<i32>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.capacity(), 1);
    assert_eq!(queue.dequeue(), Err(Error::Empty));
    assert_eq!(queue.sample(), Err(Error::Empty));
    assert_eq!(queue.iter().next(), None);
    assert_eq!(Error::Empty.to_string(), "queue is empty");
}

#[test]
fn last_item_is_the_one_left() {
    let items = [3, 42, 12, 64, 34];
    let mut queue = seeded(5);
    for item in items {
        queue.enqueue(item);
    }
    assert_eq!(queue.size(), 5);

    let mut removed = Vec::new();
    for _ in 0..4 {
        removed.push(queue.dequeue().unwrap());
    }
    assert_eq!(queue.size(), 1);

    let left = *queue.sample().unwrap();
    assert!(!removed.contains(&left));
    removed.push(left);
    removed.sort();
    assert_eq!(removed, vec![3, 12, 34, 42, 64]);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![left]);
}

#[test]
fn sample_does_not_remove() {
    let mut queue = seeded(1);
    queue.extend(["a", "b", "c"]);
    for _ in 0..20 {
        let item = *queue.sample().unwrap();
        assert!(["a", "b", "c"].contains(&item));
    }
    assert_eq!(queue.size(), 3);
}

#[test]
fn size_tracks_operations() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut queue = seeded(100);
    let mut expected = 0usize;
    for i in 0..5_000 {
        if rng.gen_bool(0.55) {
            queue.enqueue(i);
            expected += 1;
        } else {
            match queue.dequeue() {
                Ok(_) => expected -= 1,
                Err(err) => {
                    assert_eq!(err, Error::Empty);
                    assert_eq!(expected, 0);
                }
            }
        }
        assert_eq!(queue.size(), expected);
        assert_eq!(queue.is_empty(), expected == 0);
    }
}

#[test]
fn capacity_follows_size() {
    let mut queue = seeded(2);
    let mut capacities = Vec::new();
    for i in 0..5 {
        queue.enqueue(i);
        capacities.push(queue.capacity());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8]);

    capacities.clear();
    while queue.dequeue().is_ok() {
        capacities.push(queue.capacity());
    }
    assert_eq!(capacities, vec![8, 8, 4, 2, 1]);

    let mut rng = StdRng::seed_from_u64(3);
    for i in 0..10_000 {
        if rng.gen_bool(0.5) {
            queue.enqueue(i);
        } else {
            let _ = queue.dequeue();
        }
        assert!(queue.capacity() >= queue.size());
        assert!(queue.capacity() >= 1);
        if !queue.is_empty() {
            assert!(queue.capacity() < 4 * queue.size());
        }
    }
}

#[test]
fn dequeue_drains_everything_once() {
    let mut queue = seeded(4);
    queue.extend(0..1000);
    let mut seen = HashSet::new();
    while let Ok(item) = queue.dequeue() {
        assert!(seen.insert(item));
    }
    assert_eq!(seen.len(), 1000);
}

#[test]
fn dequeue_is_uniform() {
    let mut counts = [0usize; 4];
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20_000 {
        let mut queue = RandomizedQueue::with_rng(&mut rng);
        queue.extend(0..4);
        counts[queue.dequeue().unwrap()] += 1;
    }
    for count in counts {
        assert!((4_500..5_500).contains(&count), "counts = {counts:?}");
    }
}

#[test]
fn iterator_visits_each_item_once() {
    let queue = (0..100).collect::<RandomizedQueue<_>>();
    let mut iter = queue.iter();
    assert_eq!(iter.len(), 100);
    iter.next();
    assert_eq!(iter.len(), 99);

    let mut visited = queue.iter().copied().collect::<Vec<_>>();
    visited.sort();
    assert_eq!(visited, (0..100).collect::<Vec<_>>());
    assert_eq!(queue.size(), 100);
}

#[test]
fn exhausted_iterators_stay_exhausted() {
    fn assert_fused<I: std::iter::FusedIterator>(_: &I) {}

    let queue = (0..3).collect::<RandomizedQueue<_>>();
    let mut iter = queue.iter_with(StdRng::seed_from_u64(6));
    assert_fused(&iter);
    assert_eq!(iter.by_ref().count(), 3);
    for _ in 0..3 {
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    let mut owned = queue.into_iter();
    assert_fused(&owned);
    assert_eq!(owned.by_ref().count(), 3);
    assert_eq!(owned.next(), None);
    assert_eq!(owned.next(), None);
}

#[test]
fn iterators_have_independent_orders() {
    let queue = (1..=5).collect::<RandomizedQueue<_>>();
    let differs = (0..20).any(|_| {
        let first = queue.iter().collect::<Vec<_>>();
        let second = queue.iter().collect::<Vec<_>>();
        first != second
    });
    assert!(differs);

    let orders = (0..50)
        .map(|seed| {
            queue
                .iter_with(StdRng::seed_from_u64(seed))
                .copied()
                .collect::<Vec<_>>()
        })
        .collect::<HashSet<_>>();
    assert!(orders.len() > 1);
}

#[test]
fn nested_iterators() {
    let queue = (0..4).collect::<RandomizedQueue<_>>();
    let mut pairs = 0;
    for a in &queue {
        for b in &queue {
            assert!(a < &4 && b < &4);
            pairs += 1;
        }
    }
    assert_eq!(pairs, 16);
}

#[test]
fn into_iter_yields_all() {
    let queue = seeded::<String>(8);
    assert_eq!(queue.into_iter().count(), 0);

    let mut queue = seeded(9);
    queue.extend(["x", "y", "z"].map(String::from));
    let mut drained = queue.into_iter().collect::<Vec<_>>();
    drained.sort();
    assert_eq!(drained, vec!["x", "y", "z"]);
}
