// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_blog::{
    deliver, AppError, BlogConfig, BlogService, CommandLineInput, DeliveryTarget, HtmlComposer,
    OutputPlan, OutputReport, PageComposer, PageDelivery, PageRequest, PostSource,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console logs go to stderr so a page printed to stdout stays clean.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_blog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Renders the requested page and delivers it: fetch → compose → deliver.
async fn render_page(config: &BlogConfig) -> Result<(), AppError> {
    let blog = BlogPages::new(config)?;

    let document = match &config.request {
        PageRequest::Post(id) => {
            let post = blog.service.fetch_post(id).await?;
            log::info!(
                "Rendering '{}' ({} blocks)",
                post.metadata.title,
                notion_blog::count_nodes(&post.blocks)
            );
            blog.composer.compose_post(&post)?
        }
        PageRequest::Index => {
            let posts = blog.service.fetch_index().await?;
            log::info!("Rendering index of {} posts", posts.len());
            blog.composer.compose_index(&posts)?
        }
    };

    let report = blog.deliver(document)?;
    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            eprintln!("✓ Page saved to {}", path.display());
        }
    }
    Ok(())
}

/// Wires the blog service, the composer and output delivery for one run.
struct BlogPages<'a> {
    config: &'a BlogConfig,
    service: BlogService,
    composer: HtmlComposer,
}

impl<'a> BlogPages<'a> {
    fn new(config: &'a BlogConfig) -> Result<Self, AppError> {
        let service = BlogService::connect(config.credentials.as_ref())?
            .with_published_status(config.published_status.clone())
            .with_page_limit(config.max_child_pages);
        Ok(Self {
            config,
            service,
            composer: HtmlComposer::new()?,
        })
    }
}

impl PageDelivery for BlogPages<'_> {
    fn deliver(&self, document: String) -> Result<OutputReport, AppError> {
        let plan = OutputPlan::for_document(self.config.output_file.clone(), document);
        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }
        Ok(report)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = BlogConfig::resolve(cli)?;

    render_page(&config).await?;

    Ok(())
}
