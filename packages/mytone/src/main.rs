//! MyTone CLI Binary

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{BlendCommand, Cli, Commands, ScoreCommand, SpeakCommand};

use mytone::catalog::{AUTO_VOICES, TEMPLATES, VOICE_CARDS, VoiceSetting, voice_card_name};
use mytone::speech::preview_text;
use mytone::{
    BlendConfig, Language, LogSpeechEngine, MyToneConfig, SimilarityInput, analyze, blend,
    classify, compose_blend_request, compose_request, score, speak,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => MyToneConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MyToneConfig::default(),
    };

    let output = match cli.command {
        Commands::Analyze(cmd) => serde_json::to_value(analyze(&cmd.text))?,
        Commands::Speak(cmd) => run_speak(cmd, &config)?,
        Commands::Blend(cmd) => run_blend(cmd, &config)?,
        Commands::Score(cmd) => run_score(cmd, &config)?,
        Commands::Catalog => json!({
            "voice_cards": settings_json(&VOICE_CARDS),
            "auto_voices": settings_json(&AUTO_VOICES),
            "templates": TEMPLATES
                .iter()
                .map(|(key, text)| json!({ "key": key, "text": text, "emotion": classify(text) }))
                .collect::<Vec<_>>(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn settings_json(table: &[(&str, VoiceSetting)]) -> serde_json::Value {
    table
        .iter()
        .map(|(key, setting)| json!({ "key": key, "name": voice_card_name(key), "setting": setting }))
        .collect()
}

fn run_speak(cmd: SpeakCommand, config: &MyToneConfig) -> Result<serde_json::Value> {
    let mut controls = config.controls.clone();
    if let Some(tone) = cmd.tone {
        controls.tone = tone;
    }
    if let Some(rate) = cmd.rate {
        controls.rate = rate;
    }
    if let Some(language) = cmd.language {
        controls.language = Language::new(language);
    }
    let detected = classify(&cmd.text);
    if cmd.auto {
        controls.emotion = detected;
    } else if let Some(emotion) = cmd.emotion {
        controls.emotion = emotion;
    }

    let text = if cmd.preview { preview_text(&cmd.text) } else { cmd.text.as_str() };
    let request = compose_request(text, &controls).context("Failed to compose speech request")?;
    speak(&LogSpeechEngine, &request).context("Speech engine rejected the request")?;
    info!(detected = %detected, emotion = %controls.emotion, "dispatched speech request");

    Ok(json!({
        "detected": detected,
        "detected_badge": detected.pretty(),
        "request": request,
    }))
}

fn run_blend(cmd: BlendCommand, config: &MyToneConfig) -> Result<serde_json::Value> {
    let defaults = config.blend;
    let blend_config = BlendConfig::new(
        cmd.a.unwrap_or(defaults.label_a),
        cmd.b.unwrap_or(defaults.label_b),
        cmd.ratio.unwrap_or(defaults.ratio),
        cmd.warmth.unwrap_or(defaults.warmth),
        cmd.clarity.unwrap_or(defaults.clarity),
    );
    let outcome = blend(&blend_config);

    let request = match cmd.text {
        Some(text) => {
            let request = compose_blend_request(&text, &blend_config, config.controls.language.clone())
                .context("Failed to compose blend audition")?;
            speak(&LogSpeechEngine, &request).context("Speech engine rejected the request")?;
            info!(label = %outcome.label, "auditioning blend");
            Some(request)
        }
        None => None,
    };

    Ok(json!({
        "outcome": outcome,
        "parameters": outcome.parameters(),
        "request": request,
    }))
}

fn run_score(cmd: ScoreCommand, config: &MyToneConfig) -> Result<serde_json::Value> {
    let input = SimilarityInput::new(
        cmd.text,
        cmd.tone.unwrap_or(config.controls.tone),
        cmd.emotion.unwrap_or(config.controls.emotion),
    );
    let result = score(&input);
    Ok(json!({
        "value": result.value,
        "tier": result.tier,
        "tip": result.tier.tip(),
    }))
}
