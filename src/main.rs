use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analytics;
mod api;
mod batch;
mod config;
mod error;
mod history;
mod models;
mod reasons;
mod risk;
mod sentiment;
mod service;

use config::ServerConfig;
use sentiment::LexiconScorer;
use service::PredictionService;

#[derive(Parser)]
#[command(name = "student-risk-service")]
#[command(about = "Student academic risk prediction service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "RISK_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "RISK_PORT", default_value_t = 8000)]
        port: u16,
        #[arg(long, env = "RISK_MODEL_PATH", default_value = "models/risk_model.json")]
        model: PathBuf,
        /// Origin allowed to call the API; repeat or comma-separate for several
        #[arg(long = "allowed-origin", env = "RISK_ALLOWED_ORIGINS", value_delimiter = ',')]
        allowed_origins: Vec<String>,
        /// Largest accepted `/csv-upload` request body, in bytes
        #[arg(long, env = "RISK_MAX_UPLOAD_BYTES", default_value_t = config::DEFAULT_MAX_UPLOAD_BYTES)]
        max_upload_bytes: usize,
    },
    /// Score a CSV file offline and print the results
    Score {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, env = "RISK_MODEL_PATH", default_value = "models/risk_model.json")]
        model: PathBuf,
    },
}

fn build_service(model_path: &std::path::Path) -> anyhow::Result<PredictionService> {
    let model = risk::load_model(model_path)?;
    tracing::info!(path = %model_path.display(), nodes = model.nodes.len(), "risk model loaded");
    Ok(PredictionService::new(
        Arc::new(model),
        Arc::new(LexiconScorer::new()),
    ))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let service = build_service(&config.model_path)?;
    let origins = config.origin_headers()?;
    let router = api::build_router(service, origins, config.max_upload_bytes);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!("student risk API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
        .context("server error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_risk_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            model,
            allowed_origins,
            max_upload_bytes,
        } => {
            serve(ServerConfig {
                host,
                port,
                model_path: model,
                allowed_origins,
                max_upload_bytes,
            })
            .await?;
        }
        Commands::Score { csv, model } => {
            let service = build_service(&model)?;
            let content = std::fs::read_to_string(&csv)
                .with_context(|| format!("failed to read {}", csv.display()))?;
            let summary = batch::ingest(&service, &content)
                .with_context(|| format!("failed to score {}", csv.display()))?;

            if summary.results.is_empty() {
                println!("No students found in {}.", csv.display());
                return Ok(());
            }

            println!("Scored {} students:", summary.uploaded_students);
            for record in summary.results.iter() {
                println!(
                    "- marks {:.1}, attendance {:.1}: {} ({})",
                    record.marks, record.attendance, record.risk, record.sentiment
                );
            }

            let snapshot = service.analytics();
            println!(
                "At-risk {:.2}% | average marks {:.2}",
                snapshot.at_risk_percent, snapshot.average_marks
            );
        }
    }

    Ok(())
}
