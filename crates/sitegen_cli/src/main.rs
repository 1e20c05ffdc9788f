use std::path::PathBuf;

use clap::Parser;
use sitegen_core::{Config, Site};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static site from Markdown pages")]
struct Cli {
    /// Base path prepended to root-relative links (defaults to the config value, usually "/")
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "sitegen.toml")]
    config: PathBuf,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied as-is
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (cleared before each build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Log every file processed
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_path) = &self.base_path {
            config.site.base_path = base_path.clone();
        }
        if let Some(content) = &self.content {
            config.paths.content = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.paths.static_dir = static_dir.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
        if let Some(template) = &self.template {
            config.paths.template = template.clone();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Load config
    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);
    log::debug!("Using config {:?}", config);

    // Build site
    let site = Site::from_config(&config);
    let report = match site.build() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Built {} pages and copied {} static files into {}",
        report.pages,
        report.static_files,
        site.output.display()
    );
}
