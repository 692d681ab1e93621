//! Outbox of pending remote-mirror writes (FIFO).
//!
//! Local commits never wait on the mirror. Writes queue here and are pushed
//! on `flush`; a write the mirror refuses is logged and dropped, and local
//! state is never rolled back.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::RecordId;
use crate::error::SyncError;
use crate::records::{PitchingPlayRecord, PlateAppearanceRecord};

/// One write destined for the remote mirror.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MirrorWrite {
    PlateAppearance(PlateAppearanceRecord),
    PitchingPlay(PitchingPlayRecord),
    /// An operator deletion of a record.
    Delete(RecordId),
}

impl MirrorWrite {
    /// Id of the record this write concerns.
    #[must_use]
    pub fn record_id(&self) -> RecordId {
        match self {
            MirrorWrite::PlateAppearance(record) => record.id,
            MirrorWrite::PitchingPlay(record) => record.id,
            MirrorWrite::Delete(id) => *id,
        }
    }
}

/// A remote copy of the record log.
pub trait RemoteMirror {
    /// Push one write. Errors are reported to the outbox, which logs them.
    fn push(&mut self, write: &MirrorWrite) -> Result<(), SyncError>;
}

/// Mirror that accepts everything and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMirror;

impl RemoteMirror for NoopMirror {
    fn push(&mut self, _write: &MirrorWrite) -> Result<(), SyncError> {
        Ok(())
    }
}

/// Result of one flush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub sent: usize,
    pub dropped: usize,
}

/// Pending mirror writes.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: VecDeque<MirrorWrite>,
}

impl Outbox {
    /// Create an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queue a write.
    pub fn enqueue(&mut self, write: MirrorWrite) {
        self.queue.push_back(write);
    }

    /// Number of queued writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every queued write without sending it.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Push every queued write in order. Failed writes are dropped.
    pub fn flush(&mut self, mirror: &mut dyn RemoteMirror) -> FlushReport {
        let mut report = FlushReport::default();
        while let Some(write) = self.queue.pop_front() {
            match mirror.push(&write) {
                Ok(()) => report.sent += 1,
                Err(err) => {
                    log::warn!("mirror write for {} dropped: {err}", write.record_id());
                    report.dropped += 1;
                }
            }
        }
        report
    }
}
