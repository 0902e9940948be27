//! pdf-outline CLI - heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::batch::{list_pdf_files, process_directory_with_progress};
use pdf_outline::render::to_json;
use pdf_outline::{
    evaluate_directory, rank_files, BatchOptions, JsonFormat, LexicalScorer, Outliner,
    PageSelection,
};

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract heading outlines (title, H1-H3) from PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Outline every PDF of a directory into JSON files
    Extract {
        /// Directory containing PDF files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory for the JSON outlines
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Boost bold, upper-case and heavy-font spans before classifying
        #[arg(long)]
        weighted: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Outline a single PDF
    File {
        /// Input PDF file
        #[arg(value_name = "PDF")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Boost bold, upper-case and heavy-font spans before classifying
        #[arg(long)]
        weighted: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Score predicted outlines against ground truth
    #[command(alias = "eval")]
    Evaluate {
        /// Directory of predicted JSON outlines
        #[arg(value_name = "PRED_DIR")]
        predicted: PathBuf,

        /// Directory of ground-truth JSON outlines
        #[arg(value_name = "GT_DIR")]
        ground_truth: PathBuf,
    },

    /// Rank outline headings by relevance to a persona
    Rank {
        /// Outline JSON produced by `extract` or `file`
        #[arg(value_name = "HEADINGS_JSON")]
        headings: PathBuf,

        /// Persona JSON: {"persona": "..."}
        #[arg(value_name = "PERSONA_JSON")]
        persona: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            weighted,
            compact,
            sequential,
        } => cmd_extract(&input, &output, weighted, compact, sequential),
        Commands::File {
            input,
            output,
            weighted,
            pages,
        } => cmd_file(&input, output.as_deref(), weighted, pages.as_deref()),
        Commands::Evaluate {
            predicted,
            ground_truth,
        } => cmd_evaluate(&predicted, &ground_truth),
        Commands::Rank {
            headings,
            persona,
            output,
        } => cmd_rank(&headings, &persona, output.as_deref()),
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

fn outliner(weighted: bool) -> Outliner {
    // Malformed pages should not cost the whole document
    let outliner = Outliner::new().lenient();
    if weighted {
        outliner.weighted()
    } else {
        outliner
    }
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    weighted: bool,
    compact: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = BatchOptions::new();
    if compact {
        options = options.with_json_format(JsonFormat::Compact);
    }
    if sequential {
        options = options.sequential();
    }

    let total = list_pdf_files(input)?.len();
    if total == 0 {
        println!("{} {}", "No PDF files found in".yellow(), input.display());
        return Ok(());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = process_directory_with_progress(
        input,
        output,
        &outliner(weighted),
        &options,
        |path| {
            if let Some(name) = path.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
            pb.inc(1);
        },
    )?;
    pb.finish_and_clear();

    println!("{}", "Output files:".green().bold());
    for (i, path) in report.written.iter().enumerate() {
        let branch = if i + 1 == report.written.len() {
            "└─"
        } else {
            "├─"
        };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    for (path, reason) in &report.failures {
        println!("{} {}: {}", "Failed".red(), path.display(), reason);
    }

    println!(
        "\n{} {}/{} documents outlined",
        "Done!".green().bold(),
        report.written.len(),
        report.total()
    );

    Ok(())
}

fn cmd_file(
    input: &Path,
    output: Option<&Path>,
    weighted: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p)?
    } else {
        PageSelection::All
    };

    let outline = outliner(weighted)
        .with_pages(page_selection)
        .extract(input)?;
    let json = to_json(&outline, JsonFormat::Pretty)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_evaluate(predicted: &Path, ground_truth: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!(
        "Evaluating {} against {}",
        predicted.display(),
        ground_truth.display()
    );
    let report = evaluate_directory(predicted, ground_truth)?;

    for doc in &report.documents {
        println!(
            "{}: P={:.2}, R={:.2}, F1={:.2}",
            doc.name, doc.result.precision, doc.result.recall, doc.result.f1
        );
    }
    for name in &report.skipped {
        println!(
            "{} no ground truth for {}, skipping",
            "Warning:".yellow(),
            name
        );
    }
    for (name, reason) in &report.failures {
        println!("{} {}: {}", "Failed".red(), name, reason);
    }

    match report.average() {
        Some(avg) => {
            println!();
            println!("{}", "Average".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            println!(
                "P={:.2}, R={:.2}, F1={:.2}",
                avg.precision, avg.recall, avg.f1
            );
        }
        None => println!("{}", "No matching files found for evaluation.".yellow()),
    }

    Ok(())
}

fn cmd_rank(
    headings: &Path,
    persona: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ranked = rank_files(headings, persona, &LexicalScorer::new())?;
    let json = serde_json::to_string_pretty(&ranked)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF heading outline extraction tool");
    println!();
    println!("License: MIT");
}
