//! Host storage contract for clips.
//!
//! Editors and file-backed tools implement [`ClipStore`]; the blender and
//! clipper only ever talk to clips through it. [`MemoryClipStore`] is the
//! in-process implementation used by tests and by the CLI's directory store.

use indexmap::IndexMap;

use crate::data::{AnimationClip, ClipSettings, Curve, CurveBinding, WrapMode};
use crate::error::{LoopFixError, Result};
use crate::ids::{ClipId, IdAllocator};

/// Operations the core needs from its host.
pub trait ClipStore {
    /// All curve bindings of a clip, in the clip's order.
    fn curve_bindings(&self, clip: ClipId) -> Result<Vec<CurveBinding>>;

    /// Curve for a binding, or `None` when the clip has no such binding.
    fn curve(&self, clip: ClipId, binding: &CurveBinding) -> Result<Option<Curve>>;

    /// Write a curve; `None` deletes the binding.
    fn set_curve(&mut self, clip: ClipId, binding: &CurveBinding, curve: Option<Curve>)
        -> Result<()>;

    /// Name, frame rate and wrap mode of a clip.
    fn clip_settings(&self, clip: ClipId) -> Result<ClipSettings>;

    /// Create an empty clip.
    fn create_clip(&mut self, name: &str, frame_rate: f32, wrap_mode: WrapMode) -> Result<ClipId>;

    /// Commit a clip to durable storage.
    fn persist(&mut self, clip: ClipId) -> Result<()>;
}

#[derive(Debug)]
struct Entry {
    clip: AnimationClip,
    persisted: bool,
}

/// Clips held in memory. `persist` only marks the clip as committed.
#[derive(Debug, Default)]
pub struct MemoryClipStore {
    ids: IdAllocator,
    clips: IndexMap<ClipId, Entry>,
}

impl MemoryClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an existing clip and return its handle.
    pub fn insert(&mut self, clip: AnimationClip) -> ClipId {
        let id = self.ids.alloc_clip();
        self.clips.insert(
            id,
            Entry {
                clip,
                persisted: false,
            },
        );
        id
    }

    pub fn get(&self, id: ClipId) -> Option<&AnimationClip> {
        self.clips.get(&id).map(|e| &e.clip)
    }

    pub fn is_persisted(&self, id: ClipId) -> bool {
        self.clips.get(&id).is_some_and(|e| e.persisted)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    fn entry(&self, id: ClipId) -> Result<&Entry> {
        self.clips.get(&id).ok_or(LoopFixError::UnknownClip { id })
    }

    fn entry_mut(&mut self, id: ClipId) -> Result<&mut Entry> {
        self.clips
            .get_mut(&id)
            .ok_or(LoopFixError::UnknownClip { id })
    }
}

impl ClipStore for MemoryClipStore {
    fn curve_bindings(&self, clip: ClipId) -> Result<Vec<CurveBinding>> {
        Ok(self.entry(clip)?.clip.bindings().cloned().collect())
    }

    fn curve(&self, clip: ClipId, binding: &CurveBinding) -> Result<Option<Curve>> {
        Ok(self.entry(clip)?.clip.curve(binding).cloned())
    }

    fn set_curve(
        &mut self,
        clip: ClipId,
        binding: &CurveBinding,
        curve: Option<Curve>,
    ) -> Result<()> {
        let entry = self.entry_mut(clip)?;
        entry.clip.set_curve(binding.clone(), curve);
        entry.persisted = false;
        Ok(())
    }

    fn clip_settings(&self, clip: ClipId) -> Result<ClipSettings> {
        Ok(self.entry(clip)?.clip.settings())
    }

    fn create_clip(&mut self, name: &str, frame_rate: f32, wrap_mode: WrapMode) -> Result<ClipId> {
        Ok(self.insert(AnimationClip::new(name, frame_rate, wrap_mode)))
    }

    fn persist(&mut self, clip: ClipId) -> Result<()> {
        self.entry_mut(clip)?.persisted = true;
        Ok(())
    }
}
