use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use docs_ltx::common::{DEFAULT_LOG_SETTINGS, get_max_concurrency, setup_logging};
use docs_ltx::docs_gen::{
    DEFAULT_SIDEBAR_KEY, GeneratorOptions, Sidebar, SiteMeta, url_utils::normalize_site_url, write_llms_txt,
    write_md_mirrors,
};

#[derive(Parser)]
#[command(name = "docs-ltx")]
#[command(about = "Generates llms.txt and Markdown mirrors from a documentation sidebar", long_about = None)]
struct DocsCli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    site: SiteArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the categorized llms.txt index.
    LlmsTxt,

    /// Write a cleaned Markdown file next to every page URL.
    MdUrls,

    /// Write both the index and the Markdown mirrors.
    All,
}

#[derive(Args)]
struct SiteArgs {
    /// Site root. Relative paths below are resolved against it.
    #[arg(short, long, default_value = ".", global = true, value_parser = validate_root_dir)]
    root: PathBuf,

    /// Directory holding the source documents.
    #[arg(long, default_value = "docs", global = true)]
    docs_dir: PathBuf,

    /// Output directory for llms.txt and the Markdown mirrors.
    #[arg(long, default_value = "static", global = true)]
    static_dir: PathBuf,

    /// JSON sidebar configuration.
    #[arg(long, default_value = "sidebars.json", global = true)]
    sidebars: PathBuf,

    /// Site configuration to read the title, tagline and URL from.
    #[arg(long, default_value = "docusaurus.config.js", global = true)]
    site_config: PathBuf,

    /// Which sidebar of the sidebar configuration to use.
    #[arg(long, default_value = DEFAULT_SIDEBAR_KEY, global = true)]
    sidebar_key: String,

    /// Overrides the site URL read from the site configuration.
    #[arg(long, value_parser = validate_url, global = true)]
    site_url: Option<String>,

    /// Overrides the product name used in generated descriptions.
    #[arg(long, global = true)]
    brand: Option<String>,

    /// Maximum number of documents processed at once.
    #[arg(long, global = true)]
    concurrency: Option<usize>,
}

impl SiteArgs {
    fn under_root(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn validate_url(s: &str) -> Result<String, String> {
    normalize_site_url(s).map_err(|e| e.to_string())
}

fn validate_root_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Root path does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Root path is not a directory: {}", path.display()));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file., if it exists
    dotenvy::dotenv().ok();

    setup_logging(DEFAULT_LOG_SETTINGS);

    let cli = DocsCli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1)
    }
}

async fn run(cli: DocsCli) -> anyhow::Result<()> {
    let args = &cli.site;

    let sidebars_path = args.under_root(&args.sidebars);
    let sidebar = Sidebar::load(&sidebars_path, &args.sidebar_key)
        .await
        .with_context(|| format!("Could not load sidebar configuration {}", sidebars_path.display()))?;

    let mut site = SiteMeta::load(&args.under_root(&args.site_config)).await;
    if let Some(site_url) = &args.site_url {
        site.site_url = site_url.clone();
    }

    let concurrency = match args.concurrency {
        Some(c) => c,
        None => get_max_concurrency(None)?,
    };

    let mut builder = GeneratorOptions::builder()
        .docs_dir(args.under_root(&args.docs_dir))
        .static_dir(args.under_root(&args.static_dir))
        .site(site)
        .concurrency(concurrency);
    if let Some(brand) = &args.brand {
        builder = builder.brand(brand.clone());
    }
    let options = builder.build()?;

    tracing::info!(
        "Generating from {} ({} sidebar sections, {} documents)",
        options.docs_dir.display(),
        sidebar.sections.len(),
        sidebar.all_doc_ids().len()
    );

    if matches!(cli.command, Commands::LlmsTxt | Commands::All) {
        let summary = write_llms_txt(&sidebar, &options).await?;
        println!(
            "llms.txt: wrote {} with {} entries in {} sections ({} unresolved)",
            summary.path.display(),
            summary.entries,
            summary.sections,
            summary.unresolved
        );
    }

    if matches!(cli.command, Commands::MdUrls | Commands::All) {
        let summary = write_md_mirrors(&sidebar, &options).await;
        println!(
            "md-urls: wrote {} files, skipped {}",
            summary.written, summary.skipped
        );
    }

    Ok(())
}
