//! narou-search - 小説家になろう検索クライアント
//!
//! - 无参数启动: TUI
//! - 指定关键词: 检索一次，结果以 markdown 文本输出到 stdout

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use narou_search::application::{Document, SearchNovelsHandler};
use narou_search::config::{load_config, load_config_from_path, print_config, AppConfig};
use narou_search::domain::search::SortOrder;
use narou_search::infrastructure::adapters::{HttpNarouClient, HttpNarouClientConfig};
use narou_search::infrastructure::memory::InMemorySearchSlot;
use narou_search::infrastructure::tui::{self, App};
use narou_search::infrastructure::worker::SearchController;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "narou-search", version, about = "小説家になろう検索")]
struct Cli {
    /// 检索关键词；指定时不启动 TUI
    keyword: Option<String>,

    /// 排序代码（见 --list-orders），默认取配置 search.default_order
    #[arg(short, long)]
    order: Option<SortOrder>,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 列出所有排序方式
    #[arg(long)]
    list_orders: bool,
}

/// 初始化日志
///
/// TUI 占用终端，日志只写入 log.file（未设置则丢弃）
fn init_logging(config: &AppConfig, interactive: bool) -> anyhow::Result<()> {
    let log_filter = format!("{},narou_search={}", config.log.level, config.log.level);
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
    );

    match &config.log.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_orders {
        for order in SortOrder::ALL {
            println!("{:<14} {}", order.code(), order.label());
        }
        return Ok(ExitCode::SUCCESS);
    }

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match &cli.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let interactive = cli.keyword.is_none();
    init_logging(&config, interactive)?;

    tracing::info!("narou-search {}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 API 客户端
    let client_config =
        HttpNarouClientConfig::new(&config.api.url).with_user_agent(&config.api.user_agent);
    let search_api = Arc::new(HttpNarouClient::new(client_config)?);

    let handler = Arc::new(SearchNovelsHandler::new(search_api));
    let slot = Arc::new(InMemorySearchSlot::new());
    let mut controller = SearchController::new(handler, slot);

    let order = cli.order.unwrap_or(config.search.default_order);

    match cli.keyword {
        Some(keyword) => {
            controller.submit(&keyword, order);
            let document = controller.wait().await.cloned().unwrap_or_default();

            let markdown = document.to_markdown();
            if !markdown.is_empty() {
                println!("{}", markdown);
            }
            if matches!(document, Document::Message(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            tracing::info!("Starting TUI...");
            tui::run(App::new(controller, order))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
