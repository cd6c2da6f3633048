mod config;
mod console;

use clap::Parser;
use config::RunConfig;
use console::ConsoleSelector;
use json_adapter::JsonRecordRepository;
use markdown_adapter::MarkdownWriterAdapter;
use notes_core::application::AuthorExportService;
use notes_core::domain::ExportSummary;
use notes_core::error::ExportError;
use notes_core::ports::Result;
use std::env;
use std::io::{self, Write};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exports the messages of one of the most active authors in `data.json` as Markdown
#[derive(Parser, Debug)]
#[command(name = "author-notes", version)]
#[command(about = "Picks one of the top 5 authors in data.json and writes their messages as Markdown")]
struct Cli {}

/// Log filter from `RUST_LOG`-style directives, WARN when none are given
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn init_logging() {
    // stdout is reserved for the menu
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// Runs selection then export, reporting progress on `out`.
fn run(service: &AuthorExportService, out: &mut impl Write) -> Result<Option<ExportSummary>> {
    let Some(selection) = service.select_author()? else {
        return Ok(None);
    };

    writeln!(out, "\n正在过滤 '{}' 的数据并生成 Markdown...", selection.author)
        .map_err(ExportError::Console)?;

    let summary = service.export(&selection.records, &selection.author)?;

    writeln!(
        out,
        "\n--- 成功! ---\n已将 '{}' 的 {} 条数据保存为 Markdown 文件:\n{}",
        summary.author,
        summary.entries,
        summary.path.display()
    )
    .map_err(ExportError::Console)?;

    Ok(Some(summary))
}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    let config = RunConfig::from_environment();
    tracing::debug!(base_dir = %config.base_dir.display(), "resolved base directory");

    // Instantiate concrete implementations of secondary adapters
    let service = AuthorExportService::new(
        Box::new(JsonRecordRepository::new(config.base_dir.clone())),
        Box::new(ConsoleSelector::stdio()),
        Box::new(MarkdownWriterAdapter::new(config.base_dir.clone())),
    )
    .with_top_limit(config.top_limit);

    match run(&service, &mut io::stdout()) {
        Ok(_) => {}
        Err(e) if e.is_fatal() => {
            eprintln!("运行失败: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            println!("{}", e);
        }
    }
}
