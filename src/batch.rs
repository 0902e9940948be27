//! Directory batch extraction.
//!
//! Every `*.pdf` in an input directory is outlined independently and written
//! as `<stem>.json` to the output directory. A failing document is recorded
//! in the report and never stops the rest of the batch. Inputs that would
//! overwrite an earlier input's output (`a.pdf` and `a.PDF`) are reported
//! as failures instead of being processed.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::has_pdf_extension;
use crate::error::Result;
use crate::render::{write_outline, JsonFormat};
use crate::Outliner;

/// Options for batch extraction.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Process documents on the Rayon thread pool
    pub parallel: bool,
    /// Output JSON layout
    pub json_format: JsonFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            json_format: JsonFormat::Pretty,
        }
    }
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Output files written, in input order
    pub written: Vec<PathBuf>,
    /// Inputs that failed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Number of documents attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// List the PDF files of a directory, sorted by path.
pub fn list_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_pdf_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Outline every PDF of `input_dir` into `output_dir`.
pub fn process_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    outliner: &Outliner,
    options: &BatchOptions,
) -> Result<BatchReport> {
    process_directory_with_progress(input_dir, output_dir, outliner, options, |_| {})
}

/// Like [`process_directory`], calling `on_done` after each document.
pub fn process_directory_with_progress<P, Q, F>(
    input_dir: P,
    output_dir: Q,
    outliner: &Outliner,
    options: &BatchOptions,
    on_done: F,
) -> Result<BatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: Fn(&Path) + Sync,
{
    let output_dir = output_dir.as_ref();
    let inputs = list_pdf_files(input_dir)?;
    fs::create_dir_all(output_dir)?;
    log::info!(
        "Processing {} PDF files into {}",
        inputs.len(),
        output_dir.display()
    );

    let mut report = BatchReport::default();
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    let mut unique = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = output_name(&input);
        match claimed.get(&name) {
            Some(first) => {
                let reason = format!("output {} already used by {}", name, first.display());
                log::error!("Skipping {}: {}", input.display(), reason);
                on_done(&input);
                report.failures.push((input, reason));
            }
            None => {
                claimed.insert(name, input.clone());
                unique.push(input);
            }
        }
    }

    let process = |input: &PathBuf| {
        let result = process_file(input, output_dir, outliner, options.json_format);
        on_done(input);
        (input.clone(), result)
    };

    let results: Vec<(PathBuf, Result<PathBuf>)> = if options.parallel {
        unique.par_iter().map(process).collect()
    } else {
        unique.iter().map(process).collect()
    };

    for (input, result) in results {
        match result {
            Ok(output) => report.written.push(output),
            Err(e) => {
                log::error!("Failed to process {}: {}", input.display(), e);
                report.failures.push((input, e.to_string()));
            }
        }
    }
    Ok(report)
}

/// Outline one PDF and write `<stem>.json` into `output_dir`.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    outliner: &Outliner,
    format: JsonFormat,
) -> Result<PathBuf> {
    let outline = outliner.extract(input)?;
    let output = output_dir.join(output_name(input));

    write_outline(&output, &outline, format)?;
    log::info!(
        "Processed {} -> {} ({} headings)",
        input.display(),
        output.display(),
        outline.total_headings()
    );
    Ok(output)
}

/// `<stem>.json` for an input path.
fn output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{}.json", stem)
}
