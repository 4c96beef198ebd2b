//! Result contracts returned by the edit entry points.

use serde::{Deserialize, Serialize};

use crate::data::CurveBinding;
use crate::ids::ClipId;

/// What happened to one curve binding during an edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CurveChange {
    /// Tail eased toward the head and tangents smoothed.
    Blended { blended_keys: usize },
    /// Kept verbatim because the property is never blended.
    Skipped,
    /// Deleted by a property filter.
    Removed,
    /// Trailing keys dropped.
    Clipped { removed: usize },
    /// Too short to edit; copied as is.
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveReport {
    pub binding: CurveBinding,
    pub change: CurveChange,
}

/// Handle of the persisted output clip plus a human-readable notice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditOutcome {
    pub clip: ClipId,
    pub message: String,
    pub curves: Vec<CurveReport>,
}

impl EditOutcome {
    pub fn count(&self, pred: impl Fn(&CurveChange) -> bool) -> usize {
        self.curves.iter().filter(|r| pred(&r.change)).count()
    }

    pub fn change_for(&self, property_name: &str) -> Option<&CurveChange> {
        self.curves
            .iter()
            .find(|r| r.binding.property_name == property_name)
            .map(|r| &r.change)
    }
}
