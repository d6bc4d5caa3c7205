//! `fd-sync` — the two coordination primitives shared between worker threads.
//!
//! | Type                | Role                                                    |
//! |---------------------|---------------------------------------------------------|
//! | [`RoundBarrier`]    | Cyclic N-party rendezvous; breaks instead of hanging    |
//! | [`SharedStorage`]   | Bounded multiset; never blocks a taker                  |
//!
//! Both are internally synchronised and meant to be shared through `Arc`.
//! Callers never lock anything themselves.
//!
//! # Breaking a round
//!
//! A worker registers with [`RoundBarrier::join`] and receives a [`Party`].
//! If the `Party` is dropped before [`Party::leave`] — an early `?` return or
//! a panic unwinding through the worker — the barrier is broken and every
//! current and future waiter gets [`SyncError::BarrierBroken`].
//! [`InterruptHandle::interrupt`] breaks it with [`SyncError::Interrupted`].

pub mod barrier;
pub mod error;
pub mod storage;

#[cfg(test)]
mod tests;

pub use barrier::{BarrierWaitResult, InterruptHandle, Party, RoundBarrier};
pub use error::{SyncError, SyncResult};
pub use storage::SharedStorage;
