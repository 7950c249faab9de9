use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kindeck_anki::{AnkiConnectPackager, DeckPackager, JsonDeckPackager};
use kindeck_config::Config;
use kindeck_core::{Highlighter, KindeckError};
use kindeck_dictionary::{Catalog, ParserRegistry};
use kindeck_fetch::RetrievalSession;
use kindeck_types::{CardOrientation, Language, SourceId};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use self::pipeline::Pipeline;

mod input;
mod logging;
mod pipeline;
mod profile;


/// Turn a Kindle vocabulary list into Anki flashcards
#[derive(Parser, Debug)]
#[command(name = "kindeck", version)]
struct Cli {
    /// JSON profile; environment variables and defaults otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the dictionaries available for a language
    Sources {
        /// Language code, e.g. "en"
        lang: String,
    },
    /// Look up every word and package the resulting cards
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// JSON array of {"word": ..., "usage": ...}
    #[arg(long)]
    words: PathBuf,

    /// Language of the book
    #[arg(long)]
    lang: String,

    /// Dictionary id from `kindeck sources`
    #[arg(long)]
    dictionary: SourceId,

    /// A: word in front, B: redacted definition in front
    #[arg(long, default_value = "A")]
    card_type: CardOrientation,

    /// Deck name
    #[arg(long)]
    deck: String,

    /// Deck file to write, `<deck>.json` by default
    #[arg(long, conflicts_with = "anki")]
    output: Option<PathBuf>,

    /// Add the notes to a running Anki through AnkiConnect
    #[arg(long)]
    anki: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match profile::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kindeck: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_tracing(&config.log_level, cli.json_logs);

    let result = match cli.command {
        Command::Sources { lang } => list_sources(&lang),
        Command::Build(args) => build(args, config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn list_sources(lang: &str) -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    for source in catalog.list_sources(lang)? {
        println!("{}", source.menu_label());
    }
    Ok(())
}

async fn build(args: BuildArgs, config: Config) -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    let lang: Language = args.lang.parse().map_err(KindeckError::from)?;
    let source = catalog.find(lang, args.dictionary)?.clone();
    let parser = ParserRegistry::from_catalog(&catalog).resolve(source.identity())?;

    let words = input::read_words(&args.words)?;
    tracing::info!(
        "Looking up {} words in {} ({}), card type {}: {}",
        words.len(),
        source.name,
        source.description,
        args.card_type,
        args.card_type.describe()
    );

    let packager: Box<dyn DeckPackager> = if args.anki {
        Box::new(AnkiConnectPackager::new(&config.anki))
    } else {
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", args.deck)));
        Box::new(JsonDeckPackager::new(path, config.output.pretty))
    };

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, stopping after the current word");
            ctrl_c.cancel();
        }
    });

    let retriever = RetrievalSession::open(source, &config.network)
        .context("Failed to set up the HTTP client")?;
    let pipeline = Pipeline {
        parser,
        highlighter: Highlighter::for_language(&config.highlight, lang),
        orientation: args.card_type,
        probe: config.network.probe,
    };

    let outcome = pipeline
        .run(
            &args.deck,
            &words,
            Box::new(retriever),
            packager.as_ref(),
            &cancel,
        )
        .await?;

    tracing::info!(
        "Packaged {} notes into {} (deck id {})",
        outcome.receipt.notes,
        outcome.receipt.location,
        outcome.receipt.deck_id
    );
    Ok(())
}
