//! ngdoc — build module/entity/method documentation from parsed ngdoc comments.
//!
//! Input is JSON produced by a doc-comment parser (one document per file, or
//! a single document on stdin). Two modes:
//!
//! - **stdin mode**: `ngdoc < comments.json` renders the whole tree to stdout
//! - **file mode**: `ngdoc -o docs/api comments/*.json` writes one file per module

mod input;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use ngdoc_mapper::{Module, ParsedComment};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "ngdoc",
    about = "Generate module/entity/method documentation from parsed ngdoc comments"
)]
struct Cli {
    /// Input JSON files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory, one file per module (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Keep only modules whose name matches this regex. Prefix with ! to exclude.
    /// Can be specified multiple times. E.g. --module '^ng' --module '!Mock'
    #[arg(short = 'm', long = "module", value_name = "REGEX")]
    modules: Vec<String>,

    /// Drop modules that document no entities
    #[arg(long)]
    skip_empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let filter = ModuleFilter::new(&cli.modules)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &filter);
    }

    file_mode(&cli, &filter)
}

/// Log to stderr so stdout stays clean for rendered output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "ngdoc=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// stdin mode: read one JSON document, write the rendered tree to stdout.
fn stdin_mode(cli: &Cli, filter: &ModuleFilter) -> Result<()> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;

    let comments = input::parse(&content).context("failed to parse comments from stdin")?;
    let tree = build_tree(&comments, filter, cli.skip_empty)?;

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render_tree(&tree)?);
    Ok(())
}

/// file mode: read every input, map them together, write one file per module.
fn file_mode(cli: &Cli, filter: &ModuleFilter) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut comments: Vec<ParsedComment> = Vec::new();
    for path in &input_files {
        if path.extension().and_then(|e| e.to_str()) != Some(SUPPORTED_EXTENSION) {
            tracing::warn!("skipping {}: not a .{} file", path.display(), SUPPORTED_EXTENSION);
            continue;
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = input::parse(&content)
            .with_context(|| format!("failed to parse comments from {}", path.display()))?;
        tracing::debug!("{}: {} comments", path.display(), parsed.len());
        comments.extend(parsed);
    }

    let tree = build_tree(&comments, filter, cli.skip_empty)?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let mut declared: HashSet<&str> = HashSet::new();
    for (module, name) in tree.iter().zip(output_names(&tree)) {
        if !declared.insert(module.name.as_str()) {
            tracing::warn!("module {} is declared more than once; overwriting", module.name);
        } else if name != output_name(&module.name) {
            tracing::warn!(
                "module {} clashes with another module's file name; writing {}.{}",
                module.name,
                name,
                ext
            );
        }

        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render_module(module)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!("wrote {}", out_path.display());
    }

    Ok(())
}

/// Map comments into the module tree and apply the module filters.
fn build_tree(
    comments: &[ParsedComment],
    filter: &ModuleFilter,
    skip_empty: bool,
) -> Result<Vec<Module>> {
    let mut tree = ngdoc_mapper::map(comments).context("malformed documentation comments")?;
    tracing::debug!("{} comments mapped into {} modules", comments.len(), tree.len());
    filter_modules(&mut tree, filter, skip_empty);
    Ok(tree)
}

/// Input file extension.
const SUPPORTED_EXTENSION: &str = "json";

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for JSON files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for .json files (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(SUPPORTED_EXTENSION)
                {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a module name.
/// "ng" → "ng", "ui/router" → "ui_router"
fn output_name(module: &str) -> String {
    module
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Output file names for every module, in tree order.
///
/// A repeated module name reuses its file. A different module whose name
/// sanitizes to a taken file name gets the first free `-2`, `-3`, ... suffix.
fn output_names(modules: &[Module]) -> Vec<String> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::with_capacity(modules.len());
    for module in modules {
        let base = output_name(&module.name);
        let mut candidate = base.clone();
        let mut suffix = 1;
        loop {
            match owners.get(&candidate) {
                None => {
                    owners.insert(candidate.clone(), &module.name);
                    break;
                }
                Some(owner) if *owner == module.name => break,
                Some(_) => {
                    suffix += 1;
                    candidate = format!("{}-{}", base, suffix);
                }
            }
        }
        names.push(candidate);
    }
    names
}

/// Module name filters from --module.
///
/// Plain patterns include, `!`-prefixed patterns exclude. A module is kept
/// when it matches at least one include (or there are none) and no exclude.
#[derive(Default)]
struct ModuleFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl ModuleFilter {
    fn new(patterns: &[String]) -> Result<Self> {
        let mut filter = ModuleFilter::default();
        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(excluded) => filter.exclude.push(
                    Regex::new(excluded)
                        .with_context(|| format!("invalid module pattern: {}", pattern))?,
                ),
                None => filter.include.push(
                    Regex::new(pattern)
                        .with_context(|| format!("invalid module pattern: {}", pattern))?,
                ),
            }
        }
        Ok(filter)
    }

    fn keeps(&self, name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|re| re.is_match(name));
        included && !self.exclude.iter().any(|re| re.is_match(name))
    }
}

/// Filter modules based on --module and --skip-empty flags.
fn filter_modules(tree: &mut Vec<Module>, filter: &ModuleFilter, skip_empty: bool) {
    tree.retain(|module| {
        if skip_empty && module.entities.is_empty() {
            return false;
        }
        filter.keeps(&module.name)
    });
}
