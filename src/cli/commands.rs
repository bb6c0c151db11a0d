//! Subcommand handlers

use super::output::Output;
use super::repl::run_chat_loop;
use super::{CacheCommands, Cli, Commands};
use crate::api::{AgroApi, HttpAgroApi};
use crate::session::Assistant;
use crate::store::FileStore;
use crate::types::Result;
use crate::utils::config::AgroConfig;
use agrovision_core::{
    CropFormState, PhRange, PredictionStore, RainfallLevel, Season, SoilType, Weather,
};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load configuration, build the client and run the selected subcommand.
pub async fn run(cli: Cli, output: &Output) -> Result<()> {
    if let Commands::Options = cli.command {
        print_options(output);
        return Ok(());
    }

    let mut config = AgroConfig::load(&cli.config)?;
    config.apply_overrides(cli.base_url, cli.cache)?;
    debug!(base_url = %config.api.base_url, cache = %config.cache.path.display(), "Configuration loaded");

    let api = HttpAgroApi::from_config(&config.api)?;
    let store = FileStore::new(&config.cache.path);
    let mut assistant = Assistant::new(api, store);

    match cli.command {
        Commands::Crop {
            soil_type,
            season,
            rainfall,
            weather,
            ph,
        } => {
            assistant.crop.form = CropFormState {
                soil_type,
                season,
                rainfall_level: rainfall,
                weather,
                ph_range: ph,
            };
            recommend(&mut assistant, output).await
        }
        Commands::Disease { image } => detect(&mut assistant, &image, output).await,
        Commands::Chat { question: Some(q) } => ask_once(&mut assistant, &q, output).await,
        Commands::Chat { question: None } => {
            output.banner();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_chat_loop(&mut assistant, stdin, output).await
        }
        Commands::Cache(CacheCommands::Show) => {
            show_cache(&assistant, output);
            Ok(())
        }
        Commands::Cache(CacheCommands::Clear) => {
            assistant.context().clear()?;
            output.success("Cleared cached predictions");
            Ok(())
        }
        Commands::Status => status(&assistant, output).await,
        Commands::Options => Ok(()),
    }
}

async fn recommend<A: AgroApi, S: PredictionStore>(
    assistant: &mut Assistant<A, S>,
    output: &Output,
) -> Result<()> {
    let form = assistant.crop.form;
    output.header("Crop Recommendation");
    output.kv(SoilType::FIELD, form.soil_type.label());
    output.kv(Season::FIELD, form.season.label());
    output.kv(RainfallLevel::FIELD, form.rainfall_level.label());
    output.kv(Weather::FIELD, form.weather.label());
    output.kv(PhRange::FIELD, form.ph_range.label());

    let prediction = assistant.recommend_crops().await?;

    output.header("Recommended Crops");
    if prediction.recommendations.is_empty() {
        output.info("No crops recommended for these conditions");
    }
    for (i, rec) in prediction.recommendations.iter().enumerate() {
        output.ranked(i + 1, &rec.display_line());
    }
    output.hint("Ask the chatbot about these results: agrovision chat");
    Ok(())
}

async fn detect<A: AgroApi, S: PredictionStore>(
    assistant: &mut Assistant<A, S>,
    image: &Path,
    output: &Output,
) -> Result<()> {
    assistant.select_image_file(image)?;
    output.info(&format!("Uploading {}", image.display()));

    let result = assistant.detect_disease().await?;

    output.header("Analysis Result");
    for (label, value) in result.display_rows() {
        output.kv(label, &value);
    }
    Ok(())
}

async fn ask_once<A: AgroApi, S: PredictionStore>(
    assistant: &mut Assistant<A, S>,
    question: &str,
    output: &Output,
) -> Result<()> {
    let exchange = assistant.ask(question).await?;
    output.message(&exchange.reply);
    match exchange.failure {
        Some(failure) => Err(failure.into()),
        None => Ok(()),
    }
}

fn show_cache<A: AgroApi, S: PredictionStore>(assistant: &Assistant<A, S>, output: &Output) {
    let ctx = assistant.context();
    output.header("Cached Predictions");
    print_cached(output, "Crop", ctx.cached_crop());
    print_cached(output, "Disease", ctx.cached_disease());
}

fn print_cached(output: &Output, label: &str, value: Option<Value>) {
    match value {
        Some(v) => {
            let text = serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string());
            output.kv(label, &text);
        }
        None => output.kv(label, "empty"),
    }
}

async fn status<A: AgroApi, S: PredictionStore>(
    assistant: &Assistant<A, S>,
    output: &Output,
) -> Result<()> {
    let health = assistant.health().await?;
    output.success(&format!("Backend is up (status: {})", health.status));
    Ok(())
}

fn print_options(output: &Output) {
    output.header("Crop Form Options");
    let fields: [(&str, Vec<&str>, &str); 5] = [
        (SoilType::FIELD, SoilType::labels(), SoilType::default().label()),
        (Season::FIELD, Season::labels(), Season::default().label()),
        (RainfallLevel::FIELD, RainfallLevel::labels(), RainfallLevel::default().label()),
        (Weather::FIELD, Weather::labels(), Weather::default().label()),
        (PhRange::FIELD, PhRange::labels(), PhRange::default().label()),
    ];
    for (field, labels, default) in fields {
        output.kv(field, &format!("{} (default: {})", labels.join(", "), default));
    }
    output.hint("Values are case-insensitive; quote ones with spaces, e.g. \"hot & humid\".");
}
