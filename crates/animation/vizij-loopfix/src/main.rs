//! vizij-loopfix - make animation clips loop seamlessly
//!
//! `blend` closes every curve's loop and eases its tail back to the start,
//! `clip` drops trailing keyframes, `inspect` reports seam gaps.

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use vizij_loopfix::commands::{self, blend::BlendOverrides, blend::TangentArg};
use vizij_loopfix_core::{config::DEFAULT_CLIP_NAME, ClipConfig};

/// Loop blending and keyframe clipping for animation clips
#[derive(Parser)]
#[command(name = "vizij-loopfix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Duplicate a clip and blend each curve's end back to its start
    Blend {
        /// Source clip document (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Settings file (JSON) applied before the flags below
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory receiving the new clip
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Name of the new clip
        #[arg(short, long)]
        name: Option<String>,

        /// Number of keyframes to blend at the end
        #[arg(long)]
        blend_keyframes: Option<usize>,

        /// Influence of the easing function
        #[arg(long, allow_negative_numbers = true)]
        easing_influence: Option<f32>,

        /// Tangent mode assigned after blending
        #[arg(long, value_enum)]
        tangent_mode: Option<TangentArg>,

        /// Remove the RootT.x curve
        #[arg(long)]
        remove_root_tx: bool,

        /// Remove the RootT.y curve
        #[arg(long)]
        remove_root_ty: bool,

        /// Remove the RootT.z curve
        #[arg(long)]
        remove_root_tz: bool,

        /// Remove the RootQ.x curve
        #[arg(long)]
        remove_root_qx: bool,

        /// Remove the RootQ.y curve
        #[arg(long)]
        remove_root_qy: bool,

        /// Remove the RootQ.z curve
        #[arg(long)]
        remove_root_qz: bool,

        /// Remove any other property by exact name (repeatable)
        #[arg(long = "exclude", value_name = "PROPERTY")]
        exclude: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Duplicate a clip and drop trailing keyframes from every curve
    Clip {
        /// Source clip document (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory receiving the new clip
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Name of the new clip
        #[arg(short, long, default_value = DEFAULT_CLIP_NAME)]
        name: String,

        /// Number of keyframes to clip from the end
        #[arg(short, long, default_value_t = 1)]
        keyframes: usize,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a clip's curves and loop seams
    Inspect {
        /// Clip document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Blend {
            input,
            config,
            out_dir,
            name,
            blend_keyframes,
            easing_influence,
            tangent_mode,
            remove_root_tx,
            remove_root_ty,
            remove_root_tz,
            remove_root_qx,
            remove_root_qy,
            remove_root_qz,
            exclude,
            json,
        } => {
            let overrides = BlendOverrides {
                name,
                blend_keyframes,
                easing_influence,
                tangent_mode,
                remove_root_tx,
                remove_root_ty,
                remove_root_tz,
                remove_root_qx,
                remove_root_qy,
                remove_root_qz,
                exclude,
            };
            commands::blend::run(
                input.as_deref(),
                config.as_deref(),
                &out_dir,
                &overrides,
                json,
            )
            .map(|_| ())
        }
        Commands::Clip {
            input,
            out_dir,
            name,
            keyframes,
            json,
        } => {
            let cfg = ClipConfig {
                new_clip_name: name,
                keyframes_to_clip: keyframes,
            };
            commands::clip::run(input.as_deref(), &out_dir, &cfg, json).map(|_| ())
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
