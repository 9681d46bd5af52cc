use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use crate::consts;
use crate::dataset::Split;

/// Show one paper from a downloaded split file.
#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the split file, e.g. `data/qasper/validation.json`
    pub split: PathBuf,

    /// Index of the paper inside the split
    #[arg(long, default_value = "0")]
    pub paper: usize,
}

pub async fn execute(args: Args) -> miette::Result<()> {
    let split = Split::load(&args.split)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to load `{}`", args.split.display()))?;

    let (id, paper) = split.get(args.paper).ok_or_else(|| {
        miette::miette!(
            "paper index {} is out of range (the split holds {} papers)",
            args.paper,
            split.len()
        )
    })?;

    let text = paper.rendered_text();
    let qa_pairs = paper.answerable_questions();

    println!("{}", consts::HEADER_STYLE.apply_to(preview(&paper.title, 80)));
    println!("  id: {id}");
    if !paper.abstract_text.is_empty() {
        println!("  abstract: {}", preview(&paper.abstract_text, 200));
    }
    println!("  text length: {} characters", text.chars().count());
    println!("  sections: {}", paper.full_text.len());
    println!("  paragraphs: {}", paper.paragraph_count());
    println!("  questions: {}", paper.question_count());
    println!("  answerable questions: {}", qa_pairs.len());

    if let Some((question, answers)) = qa_pairs.first() {
        println!();
        println!(
            "{}",
            consts::HEADER_STYLE.apply_to("First answerable question")
        );
        println!("  question: {}", preview(question, 100));
        for (i, answer) in answers.iter().take(2).enumerate() {
            println!("  answer {}: {}", i + 1, preview(answer, 80));
        }
    }

    Ok(())
}

/// First `max_chars` characters with newlines flattened, an ellipsis when
/// something was cut.
fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.replace('\n', " ");
    let mut out: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_and_flattens() {
        assert_eq!(preview("short\ntitle", 80), "short title");
        assert_eq!(preview("abcdef", 3), "abc...");
    }
}
