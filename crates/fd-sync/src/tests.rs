//! Tests for the round barrier and shared storage.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::{RoundBarrier, SharedStorage, SyncError};

// ── RoundBarrier ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod barrier_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn too_few_parties_rejected() {
        assert_eq!(RoundBarrier::new(0).unwrap_err(), SyncError::TooFewParties(0));
        assert_eq!(RoundBarrier::new(1).unwrap_err(), SyncError::TooFewParties(1));
        assert!(RoundBarrier::new(2).is_ok());
    }

    #[test]
    fn reusable_across_many_generations() {
        const PARTIES: usize = 4;
        const ROUNDS: u64 = 200;

        let barrier = Arc::new(RoundBarrier::new(PARTIES).unwrap());
        let leaders = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..PARTIES)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let leaders = Arc::clone(&leaders);
                thread::spawn(move || {
                    let party = barrier.join();
                    for round in 0..ROUNDS {
                        let res = party.wait().unwrap();
                        assert_eq!(res.generation, round);
                        if res.is_leader() {
                            leaders.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                    party.leave();
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(barrier.generation(), ROUNDS);
        assert_eq!(leaders.load(Ordering::SeqCst), ROUNDS as usize);
        assert!(!barrier.is_broken());
    }

    #[test]
    fn nobody_passes_before_the_last_arrival() {
        let barrier = Arc::new(RoundBarrier::new(3).unwrap());
        let passed = Arc::new(AtomicUsize::new(0));

        let waiters: Vec<_> = (0..2)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let passed = Arc::clone(&passed);
                thread::spawn(move || {
                    barrier.wait().unwrap();
                    passed.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(passed.load(Ordering::SeqCst), 0);

        assert!(barrier.wait().unwrap().is_leader());
        for w in waiters {
            w.join().unwrap();
        }
        assert_eq!(passed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropped_party_releases_waiters_with_broken() {
        let barrier = Arc::new(RoundBarrier::new(3).unwrap());

        let waiters: Vec<_> = (0..2)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let party = barrier.join();
                    let res = party.wait();
                    party.leave();
                    res
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        drop(barrier.join());

        for w in waiters {
            assert_eq!(w.join().unwrap().unwrap_err(), SyncError::BarrierBroken);
        }
        assert!(barrier.is_broken());
        // Later arrivals fail immediately rather than hang.
        assert_eq!(barrier.wait().unwrap_err(), SyncError::BarrierBroken);
    }

    #[test]
    fn panicking_party_breaks_the_barrier() {
        let barrier = Arc::new(RoundBarrier::new(2).unwrap());

        let doomed = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let _party = barrier.join();
                panic!("fault before arriving");
            })
        };

        assert_eq!(barrier.wait().unwrap_err(), SyncError::BarrierBroken);
        assert!(doomed.join().is_err());
    }

    #[test]
    fn interrupt_releases_waiters_with_interrupted() {
        let barrier = Arc::new(RoundBarrier::new(2).unwrap());
        let handle = barrier.interrupt_handle();

        let waiter = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || barrier.wait())
        };

        thread::sleep(Duration::from_millis(20));
        handle.interrupt();
        assert_eq!(waiter.join().unwrap().unwrap_err(), SyncError::Interrupted);
    }

    #[test]
    fn first_break_cause_wins() {
        let barrier = Arc::new(RoundBarrier::new(2).unwrap());
        barrier.interrupt_handle().interrupt();
        drop(barrier.join());
        assert_eq!(barrier.wait().unwrap_err(), SyncError::Interrupted);
    }

    #[test]
    fn leave_does_not_break() {
        let barrier = Arc::new(RoundBarrier::new(2).unwrap());
        barrier.join().leave();
        assert!(!barrier.is_broken());
    }
}

// ── SharedStorage ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(SharedStorage::<u8>::new(0).unwrap_err(), SyncError::ZeroCapacity);
    }

    #[test]
    fn take_from_empty_returns_nothing() {
        let storage = SharedStorage::<u8>::new(10).unwrap();
        assert!(storage.take_up_to(5).is_empty());
        assert!(storage.is_empty());
    }

    #[test]
    fn take_returns_at_most_max() {
        let storage = SharedStorage::new(10).unwrap();
        for i in 0..7 {
            storage.try_add(i).unwrap();
        }
        assert_eq!(storage.take_up_to(5).len(), 5);
        assert_eq!(storage.take_up_to(5).len(), 2);
        assert!(storage.take_up_to(5).is_empty());
    }

    #[test]
    fn try_add_respects_capacity() {
        let storage = SharedStorage::new(2).unwrap();
        assert!(storage.try_add('a').is_ok());
        assert!(storage.try_add('b').is_ok());
        assert_eq!(storage.try_add('c'), Err('c'));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn blocking_add_resumes_after_take() {
        let storage = Arc::new(SharedStorage::new(1).unwrap());
        storage.add(1u32);

        let producer = {
            let storage = Arc::clone(&storage);
            thread::spawn(move || storage.add(2u32))
        };

        thread::sleep(Duration::from_millis(20));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.take_up_to(1), vec![1]);

        producer.join().unwrap();
        assert_eq!(storage.take_up_to(1), vec![2]);
    }

    #[test]
    fn concurrent_takers_neither_lose_nor_duplicate() {
        const UNITS: u32 = 1_000;
        let storage = Arc::new(SharedStorage::new(UNITS as usize).unwrap());
        for i in 0..UNITS {
            storage.try_add(i).unwrap();
        }

        let takers: Vec<_> = (0..4)
            .map(|_| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    let mut got = Vec::new();
                    loop {
                        let batch = storage.take_up_to(5);
                        if batch.is_empty() {
                            break got;
                        }
                        got.extend(batch);
                    }
                })
            })
            .collect();

        let mut all: Vec<u32> = takers.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        assert_eq!(all, (0..UNITS).collect::<Vec<_>>());
    }
}
