use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use markdown_sections_config::{Config, OutputFormat};
use markdown_sections_engine::{
    Section, categories, categories_under, extract_links_with, io,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markdown-sections")]
#[command(about = "Print the section tree, links or categories of a markdown document", long_about = None)]
struct Args {
    /// Markdown file to parse (defaults to `document` from the config file)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    format: Option<FormatArg>,

    /// Only use the section at this `/`-separated heading path, e.g. "Tools/Editors"
    #[arg(long, short = 's', value_name = "PATH")]
    section: Option<String>,

    /// Print the links found in the selected section's content
    #[arg(long)]
    links: bool,

    /// Print the categories under the category container heading
    #[arg(long, conflicts_with_all = ["section", "links"])]
    categories: bool,

    /// Append this repository path (e.g. "owner/repo") to every printed link
    #[arg(long, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// Keep URLs exactly as parsed instead of appending a trailing `/`
    #[arg(long)]
    no_trailing_slash: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let output = run(&args, &config)?;
    println!("{output}");
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_from_path(path)?
            .ok_or_else(|| anyhow!("Config file not found: {}", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Everything after configuration: parse the document and render the requested view.
fn run(args: &Args, config: &Config) -> Result<String> {
    let path = match (&args.file, &config.document) {
        (Some(file), _) => file.clone(),
        (None, Some(document)) => {
            log::info!("Using document from config: {}", document.display());
            document.clone()
        }
        (None, None) => bail!(
            "No markdown file provided and no `document` set in {}",
            Config::config_path().display()
        ),
    };

    let format = args.format.map(OutputFormat::from).unwrap_or(config.format);
    let mut options = config.link_options();
    if args.no_trailing_slash {
        options.trailing_slash = false;
    }

    let root = io::parse_file(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    if args.categories {
        let mut found = match &config.category_root {
            Some(title) => categories_under(&root, title, &options)
                .ok_or_else(|| anyhow!("No top-level section titled {title:?}"))?,
            None => categories(&root, &options),
        };
        if let Some(repo) = &args.repo {
            found = found.iter().map(|category| category.for_repo(repo)).collect();
        }
        return render(&found, format);
    }

    let section = select_section(&root, args.section.as_deref())?;

    if args.links {
        let mut links = extract_links_with(section.content(), &options);
        if let Some(repo) = &args.repo {
            links = links.iter().map(|link| link.for_repo(repo)).collect();
        }
        return render(&links, format);
    }

    render(section, format)
}

fn select_section<'a>(root: &'a Section, path: Option<&str>) -> Result<&'a Section> {
    let Some(path) = path else {
        return Ok(root);
    };

    let titles: Vec<&str> = path
        .split('/')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .collect();

    root.find(&titles)
        .ok_or_else(|| anyhow!("No section at {path:?}"))
}

fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(output)
}
