//! Canonical clip data model: keyframes, curves, curve bindings and clips.
//!
//! Keyframes are plain `Copy` values. Edits never reach into a curve's
//! storage; a changed key is built with the `with_*` helpers and swapped in
//! through [`Curve::move_key`], which re-checks the ordering invariant.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LoopFixError, Result};

/// How a key's tangent on one side is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TangentMode {
    /// Tangent is authored and kept as stored.
    #[default]
    Free,
    /// Smooth tangent recomputed from neighbouring keys.
    Auto,
    /// Like `Auto` but flattened at extrema and clamped against overshoot.
    ClampedAuto,
    /// Points straight at the neighbouring key.
    Linear,
    /// Holds the value until the next key.
    Constant,
}

impl TangentMode {
    /// True for the modes the smoother recomputes.
    #[inline]
    pub fn is_auto(self) -> bool {
        matches!(self, TangentMode::Auto | TangentMode::ClampedAuto)
    }
}

/// Engine wrap mode carried by a clip. Copied verbatim on duplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapMode {
    #[default]
    Default,
    Once,
    Loop,
    PingPong,
    ClampForever,
}

/// A single (time, value, tangent) sample on a curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Time in seconds from clip start.
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
    #[serde(default)]
    pub left_mode: TangentMode,
    #[serde(default)]
    pub right_mode: TangentMode,
}

impl Keyframe {
    /// Key with flat, free tangents.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
            left_mode: TangentMode::Free,
            right_mode: TangentMode::Free,
        }
    }

    #[must_use]
    pub fn with_value(self, value: f32) -> Self {
        Self { value, ..self }
    }

    #[must_use]
    pub fn with_tangents(self, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            in_tangent,
            out_tangent,
            ..self
        }
    }

    #[must_use]
    pub fn with_modes(self, left_mode: TangentMode, right_mode: TangentMode) -> Self {
        Self {
            left_mode,
            right_mode,
            ..self
        }
    }
}

/// Time-ordered sequence of keyframes for one animated property.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Build a curve, rejecting non-finite samples and non-ascending times.
    pub fn new(keys: Vec<Keyframe>) -> Result<Self> {
        validate_keys(&keys)?;
        Ok(Self { keys })
    }

    /// Convenience for scalar (time, value) pairs with flat tangents.
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self> {
        Self::new(points.iter().map(|&(t, v)| Keyframe::new(t, v)).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn key(&self, index: usize) -> Option<&Keyframe> {
        self.keys.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    /// Replace the key at `index` wholesale. The replacement must keep the
    /// curve's times strictly ascending.
    pub fn move_key(&mut self, index: usize, key: Keyframe) -> Result<()> {
        let len = self.keys.len();
        if index >= len {
            return Err(LoopFixError::invalid_curve(format!(
                "key index {index} out of range for curve of {len} keys"
            )));
        }
        if !key.time.is_finite() || !key.value.is_finite() {
            return Err(LoopFixError::invalid_curve(format!(
                "key {index} must have finite time and value"
            )));
        }
        if index > 0 && self.keys[index - 1].time >= key.time {
            return Err(LoopFixError::invalid_curve(format!(
                "key {index} at t={} would not follow t={}",
                key.time,
                self.keys[index - 1].time
            )));
        }
        if index + 1 < len && self.keys[index + 1].time <= key.time {
            return Err(LoopFixError::invalid_curve(format!(
                "key {index} at t={} would not precede t={}",
                key.time,
                self.keys[index + 1].time
            )));
        }
        self.keys[index] = key;
        Ok(())
    }

    /// Copy of the first `len` keys. Ordering is inherited from `self`.
    pub fn prefix(&self, len: usize) -> Curve {
        let len = len.min(self.keys.len());
        Curve {
            keys: self.keys[..len].to_vec(),
        }
    }

    /// Time span covered by the keys (zero for fewer than two keys).
    pub fn duration(&self) -> f32 {
        match (self.keys.first(), self.keys.last()) {
            (Some(a), Some(b)) => b.time - a.time,
            _ => 0.0,
        }
    }

    /// Difference between the last and first values; zero on a closed loop.
    pub fn seam_gap(&self) -> f32 {
        match (self.keys.first(), self.keys.last()) {
            (Some(a), Some(b)) => b.value - a.value,
            _ => 0.0,
        }
    }
}

fn validate_keys(keys: &[Keyframe]) -> Result<()> {
    let mut last = f32::NEG_INFINITY;
    for (i, k) in keys.iter().enumerate() {
        if !k.time.is_finite() || !k.value.is_finite() {
            return Err(LoopFixError::invalid_curve(format!(
                "key {i} must have finite time and value"
            )));
        }
        if k.time <= last {
            return Err(LoopFixError::invalid_curve(format!(
                "key times must be strictly ascending (key {i} at t={} after t={last})",
                k.time
            )));
        }
        last = k.time;
    }
    Ok(())
}

/// Identifies one animated property within a clip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveBinding {
    /// Transform path relative to the animated root ("" for the root itself).
    #[serde(default)]
    pub path: String,
    /// Animated property, e.g. "RootT.x" or "m_LocalPosition.y".
    pub property_name: String,
    /// Component type the property lives on, e.g. "Animator".
    #[serde(rename = "type", default)]
    pub type_name: String,
}

impl CurveBinding {
    pub fn new(
        path: impl Into<String>,
        property_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            property_name: property_name.into(),
            type_name: type_name.into(),
        }
    }

    /// Root-level Animator property (the common case for humanoid muscles).
    pub fn animator(property_name: impl Into<String>) -> Self {
        Self::new("", property_name, "Animator")
    }
}

impl fmt::Display for CurveBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.property_name)
        } else {
            write!(f, "{}:{}", self.path, self.property_name)
        }
    }
}

/// Clip-level metadata copied on duplication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSettings {
    pub name: String,
    pub frame_rate: f32,
    pub wrap_mode: WrapMode,
}

/// Named mapping from curve binding to curve, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub frame_rate: f32,
    pub wrap_mode: WrapMode,
    curves: IndexMap<CurveBinding, Curve>,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, frame_rate: f32, wrap_mode: WrapMode) -> Self {
        Self {
            name: name.into(),
            frame_rate,
            wrap_mode,
            curves: IndexMap::new(),
        }
    }

    pub fn settings(&self) -> ClipSettings {
        ClipSettings {
            name: self.name.clone(),
            frame_rate: self.frame_rate,
            wrap_mode: self.wrap_mode,
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &CurveBinding> {
        self.curves.keys()
    }

    pub fn curves(&self) -> impl Iterator<Item = (&CurveBinding, &Curve)> {
        self.curves.iter()
    }

    pub fn curve(&self, binding: &CurveBinding) -> Option<&Curve> {
        self.curves.get(binding)
    }

    /// Find a curve by property name alone (first match in binding order).
    pub fn curve_by_property(&self, property_name: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|(b, _)| b.property_name == property_name)
            .map(|(_, c)| c)
    }

    /// Write or delete a curve. Existing bindings keep their position.
    pub fn set_curve(&mut self, binding: CurveBinding, curve: Option<Curve>) -> Option<Curve> {
        match curve {
            Some(curve) => self.curves.insert(binding, curve),
            None => self.curves.shift_remove(&binding),
        }
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Longest curve span in the clip.
    pub fn length_seconds(&self) -> f32 {
        self.curves
            .values()
            .filter_map(|c| c.last().map(|k| k.time))
            .fold(0.0, f32::max)
    }
}
