//! Clip command implementation

use anyhow::{Context, Result};
use std::path::Path;
use vizij_loopfix_core::{clip_keyframes, ClipConfig, EditOutcome};

use super::reporting::print_outcome;
use crate::dir_store::DirectoryClipStore;

/// Run the clip command
///
/// # Arguments
/// * `input` - Source clip document; `None` is reported as invalid input
/// * `out_dir` - Directory receiving `<name>.anim.json`
/// * `cfg` - New clip name and number of trailing keys to drop
/// * `json_output` - Whether to print the outcome as JSON
pub fn run(
    input: Option<&Path>,
    out_dir: &Path,
    cfg: &ClipConfig,
    json_output: bool,
) -> Result<EditOutcome> {
    let mut store = DirectoryClipStore::new(out_dir);
    let original = input
        .map(|path| store.load(path))
        .transpose()
        .context("Failed to load source clip")?;

    let outcome = clip_keyframes(&mut store, original, cfg)?;
    print_outcome(&outcome, &store.output_path(&cfg.new_clip_name), json_output)?;
    Ok(outcome)
}
