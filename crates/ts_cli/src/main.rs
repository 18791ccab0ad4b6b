use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use ts_inference::ModelLoader;
use ts_web::{create_app, AppState, CachedModel};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Text summarization demo server", long_about = None)]
pub struct Cli {
    /// Model artifact to load (.pkl or .joblib)
    #[arg(long, env = "TS_MODEL_PATH", default_value = "model.pkl")]
    model_path: PathBuf,
    /// Address to bind the web UI to
    #[arg(long, env = "TS_HOST", default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, env = "TS_PORT", default_value_t = 8501)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    // A missing or broken model is not fatal: the page still renders and
    // reports the problem.
    let loader = Arc::new(ModelLoader::new());
    info!("🧠 Loading model from {}", cli.model_path.display());
    let warm_loader = loader.clone();
    let model_path = cli.model_path.clone();
    match tokio::task::spawn_blocking(move || warm_loader.load(&model_path)).await? {
        Ok(model) => info!("✨ Model ready (using {})", model.name()),
        Err(e) => error!("❌ {}. Summarization is unavailable until the model can be loaded.", e),
    }

    let state = AppState::new(Arc::new(CachedModel::new(loader, cli.model_path)));
    let app = create_app(state);

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Serving on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
