//! Inspect command implementation
//!
//! Prints per-curve key counts, spans and the loop seam gap of a clip.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use vizij_loopfix_core::{parse_clip_json, AnimationClip};

/// Gap below which a curve counts as closed.
const SEAM_EPSILON: f32 = 1e-6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSummary {
    pub binding: String,
    pub keys: usize,
    pub duration: f32,
    pub seam_gap: f32,
    pub closed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSummary {
    pub name: String,
    pub frame_rate: f32,
    pub length_seconds: f32,
    pub curves: Vec<CurveSummary>,
}

pub fn summarize(clip: &AnimationClip) -> ClipSummary {
    let curves = clip
        .curves()
        .map(|(binding, curve)| {
            let seam_gap = curve.seam_gap();
            CurveSummary {
                binding: binding.to_string(),
                keys: curve.len(),
                duration: curve.duration(),
                seam_gap,
                closed: seam_gap.abs() <= SEAM_EPSILON,
            }
        })
        .collect();
    ClipSummary {
        name: clip.name.clone(),
        frame_rate: clip.frame_rate,
        length_seconds: clip.length_seconds(),
        curves,
    }
}

/// Run the inspect command
pub fn run(input: &Path, json_output: bool) -> Result<ClipSummary> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read clip: {}", input.display()))?;
    let clip = parse_clip_json(&text)
        .with_context(|| format!("Failed to parse clip: {}", input.display()))?;
    let summary = summarize(&clip);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize clip summary")?
        );
        return Ok(summary);
    }

    println!(
        "{} {} ({} fps, {:.3}s)",
        "Clip:".cyan().bold(),
        summary.name,
        summary.frame_rate,
        summary.length_seconds
    );
    for c in &summary.curves {
        let seam = if c.closed {
            "closed".green().to_string()
        } else {
            format!("gap {:+.4}", c.seam_gap).yellow().to_string()
        };
        println!("  {:<40} {:>4} keys  {}", c.binding, c.keys, seam);
    }
    Ok(summary)
}
