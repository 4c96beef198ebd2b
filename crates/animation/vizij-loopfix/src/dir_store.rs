//! Clip store backed by JSON documents on disk.
//!
//! Source clips are loaded from arbitrary paths; persisted clips are written
//! to `<out_dir>/<name>.anim.json`, overwriting an existing file of the same
//! name unless that file is one of the loaded sources.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use vizij_loopfix_core::{
    clip_to_json, parse_clip_json, AnimationClip, ClipId, ClipSettings, ClipStore, Curve,
    CurveBinding, LoopFixError, MemoryClipStore, WrapMode,
};

pub const CLIP_EXTENSION: &str = "anim.json";

type Result<T> = std::result::Result<T, LoopFixError>;

#[derive(Debug)]
pub struct DirectoryClipStore {
    out_dir: PathBuf,
    clips: MemoryClipStore,
    sources: Vec<PathBuf>,
}

impl DirectoryClipStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            clips: MemoryClipStore::new(),
            sources: Vec::new(),
        }
    }

    /// Read a clip document and register it as a source clip.
    pub fn load(&mut self, path: &Path) -> Result<ClipId> {
        let text = fs::read_to_string(path)
            .map_err(|e| LoopFixError::store(format!("read {}: {e}", path.display())))?;
        let clip = parse_clip_json(&text)?;
        debug!(
            "loaded clip '{}' ({} curves) from {}",
            clip.name,
            clip.curve_count(),
            path.display()
        );
        if let Ok(canonical) = fs::canonicalize(path) {
            self.sources.push(canonical);
        }
        Ok(self.clips.insert(clip))
    }

    pub fn clip(&self, id: ClipId) -> Option<&AnimationClip> {
        self.clips.get(id)
    }

    /// Destination file for a clip named `name`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.{CLIP_EXTENSION}"))
    }
}

impl ClipStore for DirectoryClipStore {
    fn curve_bindings(&self, clip: ClipId) -> Result<Vec<CurveBinding>> {
        self.clips.curve_bindings(clip)
    }

    fn curve(&self, clip: ClipId, binding: &CurveBinding) -> Result<Option<Curve>> {
        self.clips.curve(clip, binding)
    }

    fn set_curve(
        &mut self,
        clip: ClipId,
        binding: &CurveBinding,
        curve: Option<Curve>,
    ) -> Result<()> {
        self.clips.set_curve(clip, binding, curve)
    }

    fn clip_settings(&self, clip: ClipId) -> Result<ClipSettings> {
        self.clips.clip_settings(clip)
    }

    fn create_clip(&mut self, name: &str, frame_rate: f32, wrap_mode: WrapMode) -> Result<ClipId> {
        self.clips.create_clip(name, frame_rate, wrap_mode)
    }

    fn persist(&mut self, clip: ClipId) -> Result<()> {
        let data = self
            .clips
            .get(clip)
            .ok_or(LoopFixError::UnknownClip { id: clip })?;
        let text = clip_to_json(data)?;
        let path = self.output_path(&data.name);
        if let Ok(canonical) = fs::canonicalize(&path) {
            if self.sources.contains(&canonical) {
                return Err(LoopFixError::store(format!(
                    "refusing to overwrite source clip {}",
                    path.display()
                )));
            }
        }
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| LoopFixError::store(format!("create {}: {e}", self.out_dir.display())))?;
        fs::write(&path, text)
            .map_err(|e| LoopFixError::store(format!("write {}: {e}", path.display())))?;
        debug!("persisted clip '{}' to {}", data.name, path.display());
        self.clips.persist(clip)
    }
}
