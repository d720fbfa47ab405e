//! Command line interface for the mytone engine.

use clap::{Args, Parser, Subcommand};
use mytone::EmotionLabel;
use std::path::PathBuf;

/// MyTone voice styling CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file with default controls
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify text and show the per-category scores
    Analyze(AnalyzeCommand),

    /// Compose a speech request and dispatch it
    Speak(SpeakCommand),

    /// Blend two emotion profiles
    Blend(BlendCommand),

    /// Score text against the current configuration
    Score(ScoreCommand),

    /// List voice cards, auto voices and templates
    Catalog,
}

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Text to classify
    pub text: String,
}

#[derive(Args, Debug)]
pub struct SpeakCommand {
    /// Text to speak
    pub text: String,

    /// Base pitch
    #[arg(long)]
    pub tone: Option<f32>,

    /// Speaking rate
    #[arg(long)]
    pub rate: Option<f32>,

    /// Emotion label (happy, sad, friendly, ...)
    #[arg(long, conflicts_with = "auto")]
    pub emotion: Option<EmotionLabel>,

    /// Use the label detected from the text
    #[arg(long)]
    pub auto: bool,

    /// Language hint, e.g. en-IN
    #[arg(long)]
    pub language: Option<String>,

    /// Speak only the short preview
    #[arg(long)]
    pub preview: bool,
}

#[derive(Args, Debug)]
pub struct BlendCommand {
    /// First emotion profile
    #[arg(long)]
    pub a: Option<EmotionLabel>,

    /// Second emotion profile
    #[arg(long)]
    pub b: Option<EmotionLabel>,

    /// Blend ratio, 0.0 = all A, 1.0 = all B
    #[arg(long)]
    pub ratio: Option<f32>,

    /// Pitch scale applied after blending
    #[arg(long)]
    pub warmth: Option<f32>,

    /// Rate scale applied after blending
    #[arg(long)]
    pub clarity: Option<f32>,

    /// Audition the blend with this text
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct ScoreCommand {
    /// Text to score
    pub text: String,

    /// Base pitch
    #[arg(long)]
    pub tone: Option<f32>,

    /// Emotion label
    #[arg(long)]
    pub emotion: Option<EmotionLabel>,
}
