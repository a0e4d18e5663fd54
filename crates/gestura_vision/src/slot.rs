//! Latest-sample hand-off between detector and frame loop
//!
//! Camera frame arrival is not synchronized to display refresh, so the
//! detector side publishes into a single-slot cell and the frame loop reads
//! whatever is latest at tick time. Overwrite-on-write, no queueing: stale
//! or skipped detector frames are silently dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::sample::GestureSample;

/// Shared single-slot holder for the most recent [`GestureSample`].
///
/// Clone the slot to hand one end to the producer thread; all clones share
/// the same cell. Starts out holding [`GestureSample::ABSENT`], so a consumer
/// that ticks before the detector ever produces sees a valid absent sample.
#[derive(Clone, Debug, Default)]
pub struct SampleSlot {
    inner: Arc<Mutex<GestureSample>>,
}

impl SampleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new sample, replacing whatever was there.
    pub fn publish(&self, sample: GestureSample) {
        *self.lock() = sample;
    }

    /// Read the most recently published sample.
    pub fn latest(&self) -> GestureSample {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, GestureSample> {
        // A poisoned lock just means a producer panicked mid-store of a Copy
        // value; the slot contents are still a valid sample.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
