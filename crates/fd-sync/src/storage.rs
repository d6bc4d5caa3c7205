//! Bounded, internally locked storage shared by one producer and many takers.
//!
//! The lock is held only for the duration of a single container mutation.
//! Takers never wait: [`SharedStorage::take_up_to`] returns whatever is
//! present, possibly nothing.  Only [`SharedStorage::add`] may sleep, and
//! only while the storage is full.
//!
//! Which units a taker receives is unspecified; concurrent takers race for
//! the same pool and the first to lock wins.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::{SyncError, SyncResult};

#[derive(Debug)]
pub struct SharedStorage<T> {
    capacity: usize,
    items:    Mutex<VecDeque<T>>,
    not_full: Condvar,
}

impl<T> SharedStorage<T> {
    pub fn new(capacity: usize) -> SyncResult<Self> {
        if capacity == 0 {
            return Err(SyncError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            items:    Mutex::new(VecDeque::with_capacity(capacity)),
            not_full: Condvar::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Add `item` if there is room.  A full storage hands the item back.
    pub fn try_add(&self, item: T) -> Result<(), T> {
        let mut items = self.lock();
        if items.len() >= self.capacity {
            return Err(item);
        }
        items.push_back(item);
        Ok(())
    }

    /// Add `item`, sleeping while the storage is full.
    pub fn add(&self, item: T) {
        let mut items = self.lock();
        while items.len() >= self.capacity {
            items = self.not_full.wait(items).unwrap_or_else(PoisonError::into_inner);
        }
        items.push_back(item);
    }

    /// Remove up to `max` units.  Returns fewer when fewer are stored and an
    /// empty `Vec` when the storage is empty; never waits for more to arrive.
    pub fn take_up_to(&self, max: usize) -> Vec<T> {
        let taken: Vec<T> = {
            let mut items = self.lock();
            let n = max.min(items.len());
            items.drain(..n).collect()
        };
        if !taken.is_empty() {
            self.not_full.notify_all();
        }
        taken
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
