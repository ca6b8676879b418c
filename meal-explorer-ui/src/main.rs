//! main.rs
//! Meal Explorer 的程序入口
//!
//! 其执行：
//!
//!     加载配置（配置文件 + 命令行覆盖）
//!     创建 Runtime 并执行初始加载
//!     主循环：同时等待 stdin 的命令与后台查询结果
//!
//! 日志输出到 stderr，stdout 留给 shell 交互。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meal_explorer_ui::backend::{CatalogService, ConfigService, LocalConfigService};
use meal_explorer_ui::shell::{self, ShellCommand, HELP};
use meal_explorer_ui::surface::HeadlessSurface;
use meal_explorer_ui::Runtime;

/// Browse the TheMealDB recipe catalog from a line shell
#[derive(Parser, Debug)]
#[command(name = "meal-explorer")]
#[command(about = "Browse the TheMealDB recipe catalog", long_about = None)]
struct Args {
    /// Config file (defaults to <config_dir>/meal-explorer/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Write the rendered page to this file after every change
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Save the effective config (file plus overrides) and exit
    #[arg(long)]
    write_config: bool,
}

/// 一次 select 的结果
enum Step {
    Line(Option<String>),
    Applied,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    // 1. 配置
    let config_service = match args.config {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new()?,
    };
    let mut config = config_service
        .load()
        .with_context(|| format!("loading {}", config_service.path().display()))?;
    if let Some(base_url) = args.base_url {
        config.api_base_url = base_url;
    }
    tracing::info!("config: {config:?}");

    if args.write_config {
        config_service
            .save(&config)
            .with_context(|| format!("saving {}", config_service.path().display()))?;
        println!("wrote {}", config_service.path().display());
        return Ok(());
    }

    // 2. 运行时
    let catalog = CatalogService::from_config(&config)?;
    let surface = match args.out {
        Some(path) => HeadlessSurface::with_output(path),
        None => HeadlessSurface::new(),
    };
    let mut runtime = Runtime::new(config, catalog, surface);
    runtime.start()?;

    println!("meal-explorer ready, type 'help' for commands");

    // 3. 主循环
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !runtime.should_quit() {
        let step = tokio::select! {
            line = lines.next_line() => Step::Line(line?),
            applied = runtime.next(), if runtime.pending() > 0 => {
                applied?;
                Step::Applied
            }
        };

        let line = match step {
            Step::Applied => continue,
            Step::Line(None) => break,
            Step::Line(Some(line)) => line,
        };

        match shell::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Event(event))) => {
                let seen = runtime.surface().alerts().len();
                runtime.dispatch(event)?;
                for alert in &runtime.surface().alerts()[seen..] {
                    println!("alert: {alert}");
                }
            }
            Ok(Some(ShellCommand::Help)) => println!("{HELP}"),
            Ok(Some(ShellCommand::Show)) => {
                if let Some(document) = runtime.surface().document() {
                    println!("{}", shell::summarize(document));
                }
                let mut targets: Vec<String> = runtime
                    .handlers()
                    .targets()
                    .map(|t| format!("{t:?}"))
                    .collect();
                targets.sort();
                println!("clickable: {}", targets.join(", "));
                if let Some(message) = &runtime.app().status_message {
                    println!("last alert: {message}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}
