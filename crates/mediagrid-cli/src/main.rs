//! Mediagrid CLI: render the media gallery and upload new assets.
//!
//! Set MEDIAGRID_API_URL (or API_URL) and optionally BLOB_ACCOUNT.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediagrid_api_client::ApiClient;
use mediagrid_cli::{init_tracing, read_selected_file, write_output, TerminalNotifier};
use mediagrid_core::{GalleryConfig, UrlResolver};
use mediagrid_web::{
    region_markup, render_document, FetchOutcome, Gallery, GalleryRenderer, SubmitOutcome,
    UploadForm, UploadPanel,
};

#[derive(Parser)]
#[command(name = "mediagrid", about = "Media gallery client")]
struct Cli {
    /// API origin (overrides MEDIAGRID_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Storage account base URL (overrides BLOB_ACCOUNT)
    #[arg(long, global = true)]
    blob_account: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the media list and write the gallery page
    Render {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Page title
        #[arg(long, default_value = "Media gallery")]
        title: String,
    },
    /// Render a saved media list response without contacting the API
    Preview {
        /// JSON file holding a `GET /api/images` response body
        records: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Page title
        #[arg(long, default_value = "Media gallery")]
        title: String,
    },
    /// Upload a new asset
    Upload {
        /// Path to the file to upload
        file: PathBuf,
        /// Display name of the asset
        #[arg(long)]
        file_name: String,
        /// Uploader ID
        #[arg(long)]
        user_id: String,
        /// Uploader name
        #[arg(long)]
        user_name: String,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<GalleryConfig> {
    let mut config = GalleryConfig::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(blob_account) = &cli.blob_account {
        config.blob_account = Some(blob_account.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let renderer = GalleryRenderer::new(UrlResolver::new(config.blob_account.clone()));

    match cli.command {
        Commands::Render { out, title } => {
            let client = ApiClient::from_config(&config).context(
                "Failed to create API client. Set MEDIAGRID_API_URL (or API_URL)",
            )?;
            let gallery = Gallery::new(Arc::new(client), renderer);

            match gallery.fetch_and_render().await {
                FetchOutcome::Rendered { cards, errors } => {
                    tracing::info!(cards, errors, "Gallery rendered")
                }
                FetchOutcome::Empty => tracing::info!("No media found"),
                FetchOutcome::Failed => tracing::error!("Gallery shows a fetch error"),
                FetchOutcome::Superseded => {}
            }

            write_output(out.as_deref(), &render_document(&title, &gallery.markup()))?;
        }
        Commands::Preview {
            records,
            out,
            title,
        } => {
            let raw = std::fs::read_to_string(&records)
                .with_context(|| format!("Failed to read {}", records.display()))?;
            let body: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", records.display()))?;

            let list = region_markup(&renderer.render_response(&body));
            write_output(out.as_deref(), &render_document(&title, &list))?;
        }
        Commands::Upload {
            file,
            file_name,
            user_id,
            user_name,
        } => {
            let client = ApiClient::from_config(&config).context(
                "Failed to create API client. Set MEDIAGRID_API_URL (or API_URL)",
            )?;
            let panel = UploadPanel::new(Arc::new(client), Arc::new(TerminalNotifier));
            panel.set_form(UploadForm {
                files: vec![read_selected_file(&file)?],
                file_name,
                user_id,
                user_name,
            });

            match panel.submit().await {
                SubmitOutcome::Uploaded(response) => {
                    let out = serde_json::to_string_pretty(&response)
                        .context("Serialize response")?;
                    println!("{}", out);
                }
                SubmitOutcome::Invalid(err) => return Err(err.into()),
                SubmitOutcome::Failed(message) => return Err(anyhow::anyhow!(message)),
                SubmitOutcome::Busy => {}
            }
        }
    }

    Ok(())
}
