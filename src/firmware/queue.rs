//! Bounded FIFO of artifacts awaiting transfer. Owned by the scheduler
//! and passed explicitly to the transfer agent; there is no ambient
//! global file list.

use heapless::Deque;

use super::types::{Artifact, UPLOAD_QUEUE_SLOTS};

/// Enqueue was refused because the queue is at capacity. The decision
/// here is reject-newest: the caller keeps the artifact's file on
/// storage and logs the drop instead of silently overwriting history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueFull;

pub struct UploadQueue {
    items: Deque<Artifact, UPLOAD_QUEUE_SLOTS>,
    capacity: usize,
}

impl UploadQueue {
    /// Capacity is fixed for the queue's lifetime and clamped to the
    /// compile-time slot count.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Deque::new(),
            capacity: capacity.clamp(1, UPLOAD_QUEUE_SLOTS),
        }
    }

    pub fn enqueue(&mut self, artifact: Artifact) -> Result<(), QueueFull> {
        if self.items.len() >= self.capacity {
            return Err(QueueFull);
        }
        // Cannot fail: capacity never exceeds the backing slots.
        self.items.push_back(artifact).map_err(|_| QueueFull)
    }

    /// FIFO removal. A consumer that aborts mid-drain simply stops
    /// popping; everything unconsumed stays queued in order.
    pub fn pop_front(&mut self) -> Option<Artifact> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.items.iter()
    }
}
