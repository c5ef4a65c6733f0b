//! undocx CLI - fixed-width document rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use undocx::{Document, LayoutEngine, LayoutOptions, LayoutStats, RenderEvent, RenderResult};

/// Prefix word processors give to lock files next to open documents.
const TEMP_FILE_PREFIX: &str = "~$";

#[derive(Parser)]
#[command(name = "undocx")]
#[command(version)]
#[command(about = "Render document models as fixed-width text", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document model, or a directory of them, to text
    Render {
        /// Input JSON file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file, or output directory when INPUT is a directory
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Layout options file (JSON)
        #[arg(long, value_name = "FILE", env = "UNDOCX_CONFIG")]
        config: Option<PathBuf>,

        /// Paragraph wrap width
        #[arg(long)]
        width: Option<u32>,

        /// Paragraph indent in spaces
        #[arg(long)]
        indent: Option<usize>,

        /// Base table column width
        #[arg(long)]
        base_width: Option<u32>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Write the default layout options to a JSON file
    Config {
        /// Destination file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show document information
    Info {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Layout overrides collected from the command line.
struct LayoutArgs {
    config: Option<PathBuf>,
    width: Option<u32>,
    indent: Option<usize>,
    base_width: Option<u32>,
}

impl LayoutArgs {
    fn into_options(self) -> Result<LayoutOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => LayoutOptions::from_json_file(path)?,
            None => LayoutOptions::default(),
        };
        if let Some(width) = self.width {
            options = options.with_text_width(width);
        }
        if let Some(indent) = self.indent {
            options = options.with_indent(" ".repeat(indent));
        }
        if let Some(base) = self.base_width {
            options = options.with_base_column_width(base);
        }
        options.validate()?;
        Ok(options)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            config,
            width,
            indent,
            base_width,
            recursive,
        } => {
            let layout = LayoutArgs {
                config,
                width,
                indent,
                base_width,
            };
            cmd_render(&input, output.as_deref(), layout, recursive, cli.quiet)
        }
        Commands::Config { path, force } => cmd_config(&path, force),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    layout: LayoutArgs,
    recursive: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = LayoutEngine::new(layout.into_options()?);

    if input.is_dir() {
        render_directory(&engine, input, output, recursive, quiet)
    } else {
        render_single(&engine, input, output, quiet)
    }
}

fn render_single(
    engine: &LayoutEngine,
    input: &Path,
    output: Option<&Path>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_json_file(input)?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(doc.block_count() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} blocks {msg}")?
            .progress_chars("#>-"),
    );

    let result = engine.render_with_listener(&doc, &mut |event: &RenderEvent| match event {
        RenderEvent::Block { .. } => pb.inc(1),
        RenderEvent::TableFailed { index, reason } => {
            pb.println(format!(
                "{} table at block {}: {}",
                "Warning:".yellow(),
                index,
                reason
            ));
        }
        _ => {}
    })?;
    pb.finish_and_clear();

    report_partial(input, &result);

    if let Some(path) = output {
        write_output(path, &result.content)?;
        if !quiet {
            println!("{} {}", "Saved to".green(), path.display());
        }
    } else {
        print!("{}", result.content);
    }

    Ok(())
}

fn render_directory(
    engine: &LayoutEngine,
    root: &Path,
    output: Option<&Path>,
    recursive: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = collect_inputs(root, recursive)?;
    if inputs.is_empty() {
        println!("{} {}", "No document models found in".yellow(), root.display());
        return Ok(());
    }

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(inputs.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut loaded = Vec::with_capacity(inputs.len());
    let mut failed = 0;
    pb.set_message("Loading...");
    for path in inputs {
        match Document::from_json_file(&path) {
            Ok(doc) => loaded.push((path, doc)),
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), path.display(), e));
                failed += 1;
                pb.inc(1);
            }
        }
    }

    pb.set_message("Rendering...");
    let docs: Vec<&Document> = loaded.iter().map(|(_, doc)| doc).collect();
    let results = engine.render_batch(&docs);

    let mut written = 0;
    let mut totals = LayoutStats::new();
    for ((path, _), result) in loaded.iter().zip(results) {
        match result {
            Ok(result) => {
                report_partial(path, &result);
                let target = output_path(path, root, output);
                write_output(&target, &result.content)?;
                log::debug!("{} -> {}", path.display(), target.display());
                totals.merge(&result.stats);
                written += 1;
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), path.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    log::info!(
        "rendered {} blocks and {} tables from {} files",
        totals.block_count,
        totals.table_count,
        written
    );
    if !quiet {
        println!(
            "{} {} rendered, {} failed",
            "Done!".green().bold(),
            written,
            failed
        );
        println!("{}", batch_summary(&totals));
    }
    Ok(())
}

fn cmd_config(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }
    LayoutOptions::default().save_json_file(path)?;
    println!("{} {}", "Wrote default options to".green(), path.display());
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_json_file(input)?;
    let result = LayoutEngine::default().render(&doc)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
        return Ok(());
    }

    let stats = &result.stats;
    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Merged tables".bold(), stats.merged_table_count);
    if stats.failed_table_count > 0 {
        println!(
            "{}: {}",
            "Failed tables".bold(),
            stats.failed_table_count.to_string().red()
        );
    }
    println!("{}: {}", "Output lines".bold(), stats.line_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Fixed-width document rendering tool");
    println!();
    println!("License: MIT");
}

fn report_partial(path: &Path, result: &RenderResult) {
    if let Some(reason) = &result.partial {
        log::warn!("{} is incomplete: {}", path.display(), reason);
    }
}

/// One-line totals for a rendered batch.
fn batch_summary(totals: &LayoutStats) -> String {
    let mut summary = format!(
        "{} blocks, {} tables ({} merged), {} lines",
        totals.block_count, totals.table_count, totals.merged_table_count, totals.line_count
    );
    if totals.failed_table_count > 0 {
        summary.push_str(&format!(", {} tables failed", totals.failed_table_count));
    }
    summary
}

fn write_output(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}

/// Check if a file name marks a word processor lock file.
fn is_temporary(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(TEMP_FILE_PREFIX))
        .unwrap_or(false)
}

/// JSON document models under `dir`, sorted, without lock files.
///
/// Symbolic links are not followed.
fn collect_inputs(dir: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).max_depth(max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json && !is_temporary(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Where the text for `input` goes: next to the input, or mirrored under
/// `out_dir` relative to `root`.
fn output_path(input: &Path, root: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => {
            let relative = input.strip_prefix(root).unwrap_or(input);
            dir.join(relative).with_extension("txt")
        }
        None => input.with_extension("txt"),
    }
}
