use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::links::{unique_in_order, ExtractKind};
use crate::stats::{count_text, TextStats};

pub const STDIN_NAME: &str = "-";

/// One named piece of text to process.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FileStats {
    pub name: String,
    pub stats: TextStats,
}

#[derive(Debug, Serialize)]
pub struct BatchStats {
    pub files: Vec<FileStats>,
    pub total: TextStats,
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

fn read_path(path: &Path) -> Result<Input> {
    if path == Path::new(STDIN_NAME) {
        return Ok(Input {
            name: STDIN_NAME.to_string(),
            text: read_stdin()?,
        });
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {:?}", path);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(Input {
        name: path.display().to_string(),
        text,
    })
}

/// Reads every path in order. No paths, or `-`, means standard input.
pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    let start_time = Instant::now();

    let inputs = if paths.is_empty() {
        vec![read_path(Path::new(STDIN_NAME))?]
    } else {
        paths
            .iter()
            .map(|path| read_path(path))
            .collect::<Result<Vec<_>>>()?
    };

    info!(
        action = "complete",
        component = "input_reading",
        input_count = inputs.len(),
        total_bytes = inputs.iter().map(|i| i.text.len()).sum::<usize>(),
        duration_ms = start_time.elapsed().as_millis(),
        "Inputs read"
    );
    Ok(inputs)
}

pub fn resolve_workers(max_workers: Option<usize>) -> usize {
    max_workers.unwrap_or_else(|| {
        let cpu_count = num_cpus::get();
        std::cmp::min(cpu_count, 8)
    })
}

fn build_pool(max_workers: Option<usize>) -> Result<rayon::ThreadPool> {
    let workers = resolve_workers(max_workers);
    info!(action = "configure", component = "worker_pool", worker_count = workers, "Using workers for processing");
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build worker pool")
}

/// Counts every input on the worker pool and sums the results.
pub fn count_many(inputs: &[Input], max_workers: Option<usize>) -> Result<BatchStats> {
    let start_time = Instant::now();
    let pool = build_pool(max_workers)?;

    let files: Vec<FileStats> = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| FileStats {
                name: input.name.clone(),
                stats: count_text(&input.text),
            })
            .collect()
    });

    let total = files
        .iter()
        .fold(TextStats::default(), |acc, file| acc + file.stats);

    info!(
        action = "complete",
        component = "text_counting",
        input_count = files.len(),
        words = total.words,
        duration_ms = start_time.elapsed().as_millis(),
        "Text counting completed"
    );
    Ok(BatchStats { files, total })
}

/// Extracts links or emails from every input in parallel. The merged list
/// keeps first-seen order across inputs, in input order.
pub fn extract_many(
    inputs: &[Input],
    kind: ExtractKind,
    max_workers: Option<usize>,
) -> Result<Vec<String>> {
    let start_time = Instant::now();
    let pool = build_pool(max_workers)?;

    let per_input: Vec<Vec<String>> = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| kind.extract(&input.text))
            .collect()
    });

    let found: usize = per_input.iter().map(Vec::len).sum();
    let merged = unique_in_order(per_input.into_iter().flatten());

    info!(
        action = "complete",
        component = "extraction",
        kind = ?kind,
        found,
        unique = merged.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Extraction completed"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, text: &str) -> Input {
        Input {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_count_many_sums_in_input_order() {
        let inputs = vec![input("a", "one two."), input("b", "three\nfour")];
        let batch = count_many(&inputs, Some(2)).unwrap();

        assert_eq!(batch.files.len(), 2);
        assert_eq!(batch.files[0].name, "a");
        assert_eq!(batch.files[1].stats.lines, 2);
        assert_eq!(batch.total.words, 4);
        assert_eq!(batch.total.sentences, 1);
        assert_eq!(batch.total.lines, 3);
    }

    #[test]
    fn test_extract_many_merges_across_inputs() {
        let inputs = vec![
            input("a", "see https://b.io and https://a.io"),
            input("b", "https://a.io again, plus www.c.org"),
        ];
        let links = extract_many(&inputs, ExtractKind::Links, Some(3)).unwrap();
        assert_eq!(links, vec!["https://b.io", "https://a.io", "https://www.c.org"]);
    }

    #[test]
    fn test_extract_many_emails() {
        let inputs = vec![input("a", "x@a.com"), input("b", "y@b.com x@a.com")];
        let emails = extract_many(&inputs, ExtractKind::Emails, None).unwrap();
        assert_eq!(emails, vec!["x@a.com", "y@b.com"]);
    }

    #[test]
    fn test_read_inputs_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "alpha").unwrap();
        fs::write(&second, "beta").unwrap();

        let inputs = read_inputs(&[first, second]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].text, "alpha");
        assert_eq!(inputs[1].text, "beta");
    }

    #[test]
    fn test_read_inputs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_inputs(&[dir.path().join("nope.txt")]).unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[test]
    fn test_resolve_workers() {
        assert_eq!(resolve_workers(Some(3)), 3);
        let default = resolve_workers(None);
        assert!((1..=8).contains(&default));
    }
}
