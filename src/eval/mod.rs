//! Outline quality evaluation against ground truth.
//!
//! Outlines are flattened to `(text, level, page)` tuples and compared as
//! sets. Batch evaluation pairs every predicted `*.json` with the file of
//! the same name in a ground-truth directory.

mod flatten;
mod matcher;

pub use flatten::{flatten_outline, FlatHeading};
pub use matcher::{match_headings, MatchResult};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::model::OutlineDocument;
use crate::render::read_outline;

/// Compare a predicted outline document against a reference.
pub fn compare_documents(predicted: &OutlineDocument, reference: &OutlineDocument) -> MatchResult {
    match_headings(
        &flatten_outline(&predicted.outline),
        &flatten_outline(&reference.outline),
    )
}

/// Score of one predicted file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    /// File name shared by prediction and ground truth
    pub name: String,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Outcome of a batch evaluation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    /// Compared documents, sorted by name
    pub documents: Vec<DocumentScore>,
    /// Predictions without a ground-truth file
    pub skipped: Vec<String>,
    /// Files that could not be read or parsed, with the reason
    pub failures: Vec<(String, String)>,
}

impl EvaluationReport {
    /// Mean precision/recall/F1 over compared documents.
    pub fn average(&self) -> Option<MatchResult> {
        MatchResult::average(self.documents.iter().map(|d| &d.result))
    }
}

/// Evaluate every `*.json` in `pred_dir` against `gt_dir`.
///
/// Missing ground truth and unreadable files are recorded in the report and
/// never abort the batch; only failing to list `pred_dir` is an error.
pub fn evaluate_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    pred_dir: P,
    gt_dir: Q,
) -> Result<EvaluationReport> {
    let gt_dir = gt_dir.as_ref();
    let mut report = EvaluationReport::default();

    for pred_path in list_json_files(pred_dir.as_ref())? {
        let name = match pred_path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let gt_path = gt_dir.join(&name);
        if !gt_path.exists() {
            log::warn!("Skipping {} (no ground truth)", name);
            report.skipped.push(name);
            continue;
        }

        match evaluate_pair(&pred_path, &gt_path) {
            Ok(result) => report.documents.push(DocumentScore { name, result }),
            Err(e) => {
                log::warn!("Failed to evaluate {}: {}", name, e);
                report.failures.push((name, e.to_string()));
            }
        }
    }

    Ok(report)
}

/// Compare two outline files.
pub fn evaluate_pair<P: AsRef<Path>, Q: AsRef<Path>>(predicted: P, reference: Q) -> Result<MatchResult> {
    let predicted = read_outline(predicted)?;
    let reference = read_outline(reference)?;
    Ok(compare_documents(&predicted, &reference))
}

fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}
