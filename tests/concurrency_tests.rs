use keyarray::prelude::*;
use rand::Rng;
use std::sync::Barrier;
use std::thread;

const WRITERS: u32 = 8;
const KEYS_PER_WRITER: u32 = 2_000;

#[test]
fn test_disjoint_writers_lose_nothing() {
    let array = ConcurrentSortedArray::new();
    let barrier = Barrier::new(WRITERS as usize);

    thread::scope(|s| {
        for t in 0..WRITERS {
            let (array, barrier) = (&array, &barrier);
            s.spawn(move || {
                barrier.wait();
                // Interleave key spaces so every writer touches the whole range.
                for i in 0..KEYS_PER_WRITER {
                    array.insert(i * WRITERS + t, t);
                }
            });
        }
    });

    let snapshot = array.snapshot();
    assert_eq!(snapshot.len(), (WRITERS * KEYS_PER_WRITER) as usize);
    for (i, (key, writer)) in snapshot.iter().enumerate() {
        assert_eq!(*key, i as u32);
        assert_eq!(*writer, key % WRITERS);
    }
    array.read(|a| a.check()).unwrap();
}

#[test]
fn test_readers_never_see_unsorted_state() {
    let array: ConcurrentSortedArray<u64, u64> = ConcurrentSortedArray::new();
    let barrier = Barrier::new(6);

    thread::scope(|s| {
        for _ in 0..2 {
            let (array, barrier) = (&array, &barrier);
            s.spawn(move || {
                let mut rng = rand::rng();
                barrier.wait();
                for _ in 0..5_000 {
                    let key = rng.random_range(0..1_000);
                    if rng.random_bool(0.7) {
                        array.insert(key, key);
                    } else {
                        array.delete(key);
                    }
                }
            });
        }
        for _ in 0..4 {
            let (array, barrier) = (&array, &barrier);
            s.spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    let snapshot: Vec<u64> = array.iter().map(|(k, _)| k).collect();
                    assert!(snapshot.windows(2).all(|w| w[0] < w[1]));

                    let mut prev = None;
                    array.ascend(|k, &v| {
                        assert_eq!(k, v);
                        assert!(prev.is_none_or(|p| p < k));
                        prev = Some(k);
                        true
                    });
                }
            });
        }
    });

    array.read(|a| a.check()).unwrap();
}

#[test]
fn test_concurrent_delete_reports_once() {
    let array: ConcurrentSortedArray<u32, ()> = (0..1_000).map(|k| (k, ())).collect();
    let barrier = Barrier::new(4);

    let deleted: u32 = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let (array, barrier) = (&array, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    (0..1_000).filter(|&k| array.delete(k)).count() as u32
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(deleted, 1_000);
    assert!(array.is_empty());
}

#[test]
fn test_bulk_load_is_atomic_for_readers() {
    let array: ConcurrentSortedArray<u32, u32> = ConcurrentSortedArray::new();
    let barrier = Barrier::new(2);

    thread::scope(|s| {
        s.spawn(|| {
            barrier.wait();
            for round in 0..200u32 {
                array.bulk_load((0..64).rev().map(|k| (k, round)));
            }
        });
        s.spawn(|| {
            barrier.wait();
            for _ in 0..2_000 {
                let snapshot = array.snapshot();
                if let Some(&(_, round)) = snapshot.first() {
                    assert_eq!(snapshot.len(), 64);
                    assert!(snapshot.iter().all(|&(_, r)| r == round));
                }
            }
        });
    });

    assert_eq!(array.into_inner().len(), 64);
}
