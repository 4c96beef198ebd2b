//! Identifiers and a simple allocator for clips held by a store.

use serde::{Deserialize, Serialize};

/// Opaque handle to a clip owned by a [`crate::store::ClipStore`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ClipId(pub u32);

/// Monotonic allocator for ClipId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_clip: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_clip(&mut self) -> ClipId {
        let id = ClipId(self.next_clip);
        self.next_clip = self.next_clip.wrapping_add(1);
        id
    }
}
