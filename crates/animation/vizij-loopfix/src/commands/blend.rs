//! Blend command implementation
//!
//! Loads a source clip, loop-blends it into a new clip and writes the result
//! into the output directory. Settings come from an optional JSON file and
//! are then overridden by command-line flags.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vizij_loopfix_core::{blend_loop, EditOutcome, LoopBlendConfig, TangentMode};

use super::reporting::print_outcome;
use crate::dir_store::DirectoryClipStore;

/// Tangent modes selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TangentArg {
    Auto,
    ClampedAuto,
}

impl From<TangentArg> for TangentMode {
    fn from(arg: TangentArg) -> Self {
        match arg {
            TangentArg::Auto => TangentMode::Auto,
            TangentArg::ClampedAuto => TangentMode::ClampedAuto,
        }
    }
}

/// Flag values layered on top of the settings file.
#[derive(Clone, Debug, Default)]
pub struct BlendOverrides {
    pub name: Option<String>,
    pub blend_keyframes: Option<usize>,
    pub easing_influence: Option<f32>,
    pub tangent_mode: Option<TangentArg>,
    pub remove_root_tx: bool,
    pub remove_root_ty: bool,
    pub remove_root_tz: bool,
    pub remove_root_qx: bool,
    pub remove_root_qy: bool,
    pub remove_root_qz: bool,
    pub exclude: Vec<String>,
}

impl BlendOverrides {
    /// Flags only ever switch filters on; a filter enabled in the settings
    /// file cannot be disabled from the command line.
    pub fn apply(&self, cfg: &mut LoopBlendConfig) {
        if let Some(name) = &self.name {
            cfg.new_clip_name = name.clone();
        }
        if let Some(n) = self.blend_keyframes {
            cfg.blend_keyframes = n;
        }
        if let Some(k) = self.easing_influence {
            cfg.easing_influence = k;
        }
        if let Some(mode) = self.tangent_mode {
            cfg.tangent_mode = mode.into();
        }
        let f = &mut cfg.filter;
        f.remove_root_tx |= self.remove_root_tx;
        f.remove_root_ty |= self.remove_root_ty;
        f.remove_root_tz |= self.remove_root_tz;
        f.remove_root_qx |= self.remove_root_qx;
        f.remove_root_qy |= self.remove_root_qy;
        f.remove_root_qz |= self.remove_root_qz;
        f.extra.extend(self.exclude.iter().cloned());
    }
}

/// Read a settings file, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<LoopBlendConfig> {
    let Some(path) = path else {
        return Ok(LoopBlendConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings: {}", path.display()))
}

/// Run the blend command
///
/// # Arguments
/// * `input` - Source clip document; `None` is reported as invalid input
/// * `config` - Optional JSON settings file
/// * `out_dir` - Directory receiving `<name>.anim.json`
/// * `overrides` - Flag values applied over the settings
/// * `json_output` - Whether to print the outcome as JSON
pub fn run(
    input: Option<&Path>,
    config: Option<&Path>,
    out_dir: &Path,
    overrides: &BlendOverrides,
    json_output: bool,
) -> Result<EditOutcome> {
    let mut cfg = load_config(config)?;
    overrides.apply(&mut cfg);

    let mut store = DirectoryClipStore::new(out_dir);
    let original = input
        .map(|path| store.load(path))
        .transpose()
        .context("Failed to load source clip")?;

    let outcome = blend_loop(&mut store, original, &cfg)?;
    print_outcome(&outcome, &store.output_path(&cfg.new_clip_name), json_output)?;
    Ok(outcome)
}
