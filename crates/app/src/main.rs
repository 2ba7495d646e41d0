use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizItem;
use services::{GeminiQuizProvider, ProviderConfig, QuizProvider, gemini_provider};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::strings::WINDOW_TITLE;
use ui::{App, UiApp, build_app_context};

const IMAGE_PREVIEW_CHARS: usize = 48;

/// AI-generated football quiz.
#[derive(Parser, Debug)]
#[command(name = "quiz", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Override the API base URL (QUIZ_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the text model (QUIZ_TEXT_MODEL)
    #[arg(long, global = true)]
    text_model: Option<String>,

    /// Override the image model (QUIZ_IMAGE_MODEL)
    #[arg(long, global = true)]
    image_model: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the desktop window (default)
    Ui,
    /// Fetch one question and print it as JSON
    Fetch {
        /// Print the whole image data URI instead of a preview
        #[arg(long)]
        full_image: bool,
    },
}

impl Cli {
    fn provider_config(&self) -> Result<ProviderConfig, services::ConfigError> {
        let mut config = ProviderConfig::from_env()?;
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = &self.text_model {
            config = config.with_text_model(model);
        }
        if let Some(model) = &self.image_model {
            config = config.with_image_model(model);
        }
        Ok(config)
    }
}

struct DesktopApp {
    provider: Arc<GeminiQuizProvider>,
}

impl UiApp for DesktopApp {
    fn quiz_provider(&self) -> Arc<dyn QuizProvider> {
        self.provider.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn launch_ui(config: &ProviderConfig) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        provider: Arc::new(gemini_provider(config)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    info!(?config, "launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn fetch_once(
    config: &ProviderConfig,
    full_image: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = gemini_provider(config);
    let item = provider.fetch_quiz_item().await?;
    println!("{}", item_json(&item, full_image)?);
    Ok(())
}

fn item_json(item: &QuizItem, full_image: bool) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(item)?;
    if !full_image {
        if let Some(serde_json::Value::String(src)) = value.get_mut("imageUrl") {
            *src = abbreviate(src, IMAGE_PREVIEW_CHARS);
        }
    }
    serde_json::to_string_pretty(&value)
}

fn abbreviate(src: &str, keep: usize) -> String {
    let total = src.chars().count();
    if total <= keep {
        return src.to_string();
    }
    let head: String = src.chars().take(keep).collect();
    format!("{head}... ({total} chars)")
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    // Missing credentials stop here, before any window opens.
    let config = cli.provider_config()?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(&config);
            Ok(())
        }
        Command::Fetch { full_image } => fetch_once(&config, full_image).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
