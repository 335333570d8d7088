use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chunk_pull::config::ClientConfig;
use chunk_pull::session::TransferSession;
use chunk_pull::transfer::TransferOutcome;

/// 从服务端拉取最新文件，分片校验后保存到接收目录
#[derive(Debug, Parser)]
#[command(name = "chunk_pull", version)]
struct Args {
    /// 配置文件路径，不存在时写出默认配置
    #[arg(long, default_value = "config/config.toml")]
    config: PathBuf,

    /// 覆盖配置中的接收目录
    #[arg(long)]
    incoming: Option<PathBuf>,

    /// 覆盖配置中的服务端地址
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match ClientConfig::load_or_init(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "加载配置失败");
            return ExitCode::FAILURE;
        }
    };
    if let Some(server_url) = args.server_url {
        config.server_url = server_url;
    }
    if let Some(incoming) = args.incoming {
        config.incoming_dir = incoming;
    }

    let session = match TransferSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "创建传输会话失败");
            return ExitCode::FAILURE;
        }
    };

    let outcome = session
        .build_transfer()
        .incoming_dir(&config.incoming_dir)
        .send()
        .await;

    match outcome {
        Ok(TransferOutcome::Saved(path)) => {
            info!(path = %path.display(), "下载完成");
            ExitCode::SUCCESS
        }
        Ok(TransferOutcome::AlreadyPresent(path)) => {
            info!(path = %path.display(), "文件已存在，无需下载");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, root = %e.root(), "下载失败");
            ExitCode::FAILURE
        }
    }
}
