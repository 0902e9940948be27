//! Persona relevance ranking of extracted headings.
//!
//! Headings are scored against a persona description with a pluggable
//! [`SimilarityScorer`] and sorted by descending score. The built-in
//! [`LexicalScorer`] uses term-frequency cosine similarity; an embedding
//! model can be plugged in by implementing the trait.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::eval::flatten_outline;
use crate::model::{HeadingLevel, OutlineDocument};
use crate::render::read_outline;

/// Similarity between two strings, in `[-1, 1]`.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> f32;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> f32,
{
    fn score(&self, a: &str, b: &str) -> f32 {
        self(a, b)
    }
}

/// Cosine similarity over lower-cased word frequencies.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    word_regex: Regex,
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self {
            word_regex: Regex::new(r"\w+").unwrap(),
        }
    }

    fn term_frequencies(&self, text: &str) -> HashMap<String, f32> {
        let mut tf = HashMap::new();
        for word in self.word_regex.find_iter(text) {
            *tf.entry(word.as_str().to_lowercase()).or_insert(0.0) += 1.0;
        }
        tf
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer for LexicalScorer {
    fn score(&self, a: &str, b: &str) -> f32 {
        let a = self.term_frequencies(a);
        let b = self.term_frequencies(b);

        let dot: f32 = a
            .iter()
            .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
            .sum();
        let norm_a = a.values().map(|w| w * w).sum::<f32>().sqrt();
        let norm_b = b.values().map(|w| w * w).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot / (norm_a * norm_b)
        }
    }
}

/// A heading annotated with its relevance percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHeading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
    /// Similarity × 100, rounded to two decimals
    pub score: f64,
}

/// Persona file contents: `{"persona": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub persona: String,
}

/// Score every heading of `outline` against `persona`, most relevant first.
///
/// Ties keep document order.
pub fn rank_headings<S: SimilarityScorer + ?Sized>(
    persona: &str,
    outline: &OutlineDocument,
    scorer: &S,
) -> Vec<ScoredHeading> {
    let mut scored: Vec<ScoredHeading> = flatten_outline(&outline.outline)
        .into_iter()
        .map(|heading| {
            let similarity = scorer.score(persona, &heading.text) as f64;
            ScoredHeading {
                level: heading.level,
                text: heading.text,
                page: heading.page,
                score: round2(similarity * 100.0),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Load an outline file and a persona file, then rank.
///
/// Either file missing, or an empty persona, is [`Error::MissingInput`].
pub fn rank_files<P, Q, S>(headings_path: P, persona_path: Q, scorer: &S) -> Result<Vec<ScoredHeading>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: SimilarityScorer + ?Sized,
{
    let headings_path = headings_path.as_ref();
    let persona_path = persona_path.as_ref();
    for path in [headings_path, persona_path] {
        if !path.exists() {
            return Err(Error::MissingInput(path.display().to_string()));
        }
    }

    let outline = read_outline(headings_path)?;
    let persona: Persona = serde_json::from_str(&fs::read_to_string(persona_path)?)?;
    if persona.persona.trim().is_empty() {
        return Err(Error::MissingInput(format!(
            "persona text in {}",
            persona_path.display()
        )));
    }

    log::info!(
        "Scoring {} headings against persona",
        outline.total_headings()
    );
    Ok(rank_headings(&persona.persona, &outline, scorer))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
