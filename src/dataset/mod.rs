//! Typed model of a QASPER split file.
//!
//! A split file is a single JSON object mapping paper id to paper record.
//! The model is deliberately lenient: every field defaults when absent and
//! unknown fields are ignored, since the upstream release format has
//! drifted between versions.

pub mod answer;

use std::path::{Path, PathBuf};

use fs_err as fs;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

pub use answer::AnswerText;

/// Errors that can occur while loading a split file.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One split of the dataset, keyed by paper id in file order.
#[derive(Debug)]
pub struct Split {
    papers: IndexMap<String, Paper>,
}

impl Split {
    /// Read and parse a split file.
    pub fn load(path: &Path) -> Result<Self, SplitError> {
        let bytes = fs::read(path)?;
        let papers = serde_json::from_slice(&bytes).map_err(|source| SplitError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { papers })
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Paper at `index`, in file order.
    pub fn get(&self, index: usize) -> Option<(&str, &Paper)> {
        self.papers
            .get_index(index)
            .map(|(id, paper)| (id.as_str(), paper))
    }

    pub fn papers(&self) -> impl Iterator<Item = (&str, &Paper)> {
        self.papers.iter().map(|(id, paper)| (id.as_str(), paper))
    }

    /// Aggregate counts over the whole split.
    pub fn statistics(&self) -> SplitStatistics {
        let mut questions = 0;
        let mut answerable_questions = 0;
        for paper in self.papers.values() {
            questions += paper.question_count();
            answerable_questions += paper.answerable_questions().len();
        }
        SplitStatistics {
            papers: self.papers.len(),
            questions,
            answerable_questions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitStatistics {
    pub papers: usize,
    pub questions: usize,
    pub answerable_questions: usize,
}

impl SplitStatistics {
    pub fn average_questions(&self) -> f64 {
        if self.papers == 0 {
            0.0
        } else {
            self.questions as f64 / self.papers as f64
        }
    }

    /// Share of questions with at least one usable reference answer, or
    /// `None` for a split without questions.
    pub fn answerable_rate(&self) -> Option<f64> {
        if self.questions == 0 {
            None
        } else {
            Some(self.answerable_questions as f64 / self.questions as f64)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    #[serde(default)]
    pub full_text: Vec<Section>,

    #[serde(default)]
    pub qas: Vec<Qa>,
}

impl Paper {
    /// Assemble the paper into a single markdown-ish text body: title,
    /// abstract, then each named section with its paragraphs. Null and
    /// blank paragraphs are dropped.
    pub fn rendered_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !self.title.is_empty() {
            parts.push(format!("# {}\n", self.title));
        }
        if !self.abstract_text.is_empty() {
            parts.push(format!("## Abstract\n{}\n", self.abstract_text));
        }

        parts.push("## Full Text\n".to_string());
        for section in &self.full_text {
            if let Some(name) = section
                .section_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
            {
                parts.push(format!("\n### {name}\n"));
            }
            for paragraph in section.paragraphs.iter().flatten() {
                let paragraph = paragraph.trim();
                if !paragraph.is_empty() {
                    parts.push(format!("{paragraph}\n"));
                }
            }
        }

        parts.join("\n")
    }

    /// Number of questions carrying any question text.
    pub fn question_count(&self) -> usize {
        self.qas.iter().filter(|qa| !qa.question.is_empty()).count()
    }

    pub fn paragraph_count(&self) -> usize {
        self.full_text
            .iter()
            .map(|section| section.paragraphs.len())
            .sum()
    }

    /// Questions paired with their usable reference answers. Questions
    /// whose every reference is unanswerable (or missing) are dropped.
    pub fn answerable_questions(&self) -> Vec<(&str, Vec<String>)> {
        self.qas
            .iter()
            .filter(|qa| !qa.question.is_empty())
            .filter_map(|qa| {
                let answers: Vec<String> = qa
                    .answers
                    .iter()
                    .filter_map(|record| AnswerText::from_answer(&record.answer))
                    .filter_map(|text| text.answerable_text())
                    .collect();
                (!answers.is_empty()).then(|| (qa.question.as_str(), answers))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub section_name: Option<String>,

    /// Paragraph entries can be null in released data.
    #[serde(default)]
    pub paragraphs: Vec<Option<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Qa {
    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub answer: Answer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub free_form_answer: String,

    #[serde(default)]
    pub extractive_spans: Vec<String>,

    #[serde(default)]
    pub yes_no: Option<bool>,

    #[serde(default)]
    pub unanswerable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
      "1802.00001": {
        "title": "A Paper",
        "abstract": "We study things.",
        "full_text": [
          {"section_name": "Introduction", "paragraphs": ["First paragraph.", "Second paragraph."]},
          {"section_name": null, "paragraphs": [null, "  "]}
        ],
        "qas": [
          {"question": "which datasets were used?", "answers": [{"answer": {"free_form_answer": "Europarl and MultiUN"}}]},
          {"question": "is it multilingual?", "answers": [{"answer": {"yes_no": true}}]},
          {"question": "what is the meaning of life?", "answers": [{"answer": {"unanswerable": true}}]}
        ]
      },
      "1802.00002": {
        "title": "Another Paper",
        "abstract": "",
        "full_text": [],
        "qas": []
      }
    }"#;

    fn fixture_split() -> Split {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("validation.json");
        fs::write(&path, FIXTURE).unwrap();
        Split::load(&path).unwrap()
    }

    #[test]
    fn parses_and_aggregates() {
        let split = fixture_split();
        assert_eq!(split.len(), 2);

        let stats = split.statistics();
        assert_eq!(stats.papers, 2);
        assert_eq!(stats.questions, 3);
        assert_eq!(stats.answerable_questions, 2);
        assert!((stats.average_questions() - 1.5).abs() < 1e-9);
        assert!((stats.answerable_rate().unwrap() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn preserves_file_order() {
        let split = fixture_split();
        let (id, paper) = split.get(0).unwrap();
        assert_eq!(id, "1802.00001");
        assert_eq!(paper.title, "A Paper");
        assert!(split.get(2).is_none());
    }

    #[test]
    fn renders_paper_text() {
        let split = fixture_split();
        let (_, paper) = split.get(0).unwrap();
        let text = paper.rendered_text();

        assert!(text.contains("# A Paper"));
        assert!(text.contains("## Abstract\nWe study things."));
        assert!(text.contains("### Introduction"));
        assert!(text.contains("First paragraph."));
        // The unnamed section contributes no header and its null/blank
        // paragraphs are dropped.
        assert!(!text.contains("### \n"));
        assert_eq!(paper.paragraph_count(), 4);
    }

    #[test]
    fn unanswerable_only_questions_are_filtered() {
        let split = fixture_split();
        let (_, paper) = split.get(0).unwrap();

        let qa_pairs = paper.answerable_questions();
        assert_eq!(qa_pairs.len(), 2);
        assert_eq!(qa_pairs[0].0, "which datasets were used?");
        assert_eq!(qa_pairs[0].1, vec!["Europarl and MultiUN".to_string()]);
        assert_eq!(qa_pairs[1].1, vec!["Yes".to_string()]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(
            Split::load(&path),
            Err(SplitError::Json { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Split::load(Path::new("does/not/exist.json")),
            Err(SplitError::Io(_))
        ));
    }
}
