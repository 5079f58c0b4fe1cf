use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::args::{Args, Command};
use crate::batch::{self, BatchStats, Input};
use crate::css::{CssTextTransform, Formatter, Minifier};
use crate::gradient::{build_gradient, ColorStop, GradientKind, GradientSpec};
use crate::links::ExtractKind;
use crate::robots::assemble_robots_txt;
use crate::rules;
use crate::stats::TextStats;
use crate::transform::build_transform;
use crate::utils::format_number;

fn read_single(file: Option<&PathBuf>) -> Result<Input> {
    let paths: Vec<PathBuf> = file.cloned().into_iter().collect();
    batch::read_inputs(&paths)?
        .into_iter()
        .next()
        .context("No input to read")
}

fn apply_css(transform: &dyn CssTextTransform, file: Option<&PathBuf>) -> Result<String> {
    let input = read_single(file)?;
    let start_time = Instant::now();
    let output = transform.apply(&input.text);
    info!(
        action = "complete",
        component = "css",
        transform = transform.name(),
        input_bytes = input.text.len(),
        output_bytes = output.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "CSS transform completed"
    );
    Ok(output)
}

fn parse_stops(raw: &[String]) -> Result<Vec<ColorStop>> {
    raw.iter()
        .map(|stop| {
            ColorStop::parse(stop)
                .with_context(|| format!("Invalid color stop '{}', expected color:position", stop))
        })
        .collect()
}

fn render_stats(stats: &TextStats) -> Vec<String> {
    vec![
        format!("Words: {}", format_number(stats.words)),
        format!("Characters: {}", format_number(stats.characters)),
        format!(
            "Characters (no spaces): {}",
            format_number(stats.characters_no_spaces)
        ),
        format!("Paragraphs: {}", format_number(stats.paragraphs)),
        format!("Sentences: {}", format_number(stats.sentences)),
        format!("Lines: {}", format_number(stats.lines)),
    ]
}

pub fn render_batch_stats(batch: &BatchStats) -> String {
    let mut lines = Vec::new();

    if batch.files.len() == 1 {
        lines.extend(render_stats(&batch.total));
        return lines.join("\n");
    }

    for file in &batch.files {
        lines.push(format!("--- {} ---", file.name));
        lines.extend(render_stats(&file.stats));
        lines.push(String::new());
    }
    lines.push(format!("--- Total ({} files) ---", batch.files.len()));
    lines.extend(render_stats(&batch.total));
    lines.join("\n")
}

fn extract(files: &[PathBuf], kind: ExtractKind, workers: Option<usize>) -> Result<String> {
    let inputs = batch::read_inputs(files)?;
    let found = batch::extract_many(&inputs, kind, workers)?;
    if found.is_empty() {
        warn!(action = "complete", component = "extraction", kind = ?kind, "Nothing found");
    }
    Ok(found.join("\n"))
}

/// Runs the selected subcommand and returns what should be printed.
pub fn run(args: &Args) -> Result<String> {
    match &args.command {
        Command::CssMinify { file } => apply_css(&Minifier, file.as_ref()),
        Command::CssFormat { file } => apply_css(&Formatter, file.as_ref()),
        Command::Transform {
            scale,
            rotate,
            translate_x,
            translate_y,
            skew_x,
            skew_y,
        } => Ok(build_transform(
            scale,
            rotate,
            translate_x,
            translate_y,
            skew_x,
            skew_y,
        )),
        Command::Gradient {
            stops,
            radial,
            angle,
        } => {
            let kind = if *radial {
                GradientKind::Radial
            } else {
                GradientKind::Linear { angle_deg: *angle }
            };
            let spec = GradientSpec {
                kind,
                stops: parse_stops(stops)?,
            };
            Ok(build_gradient(&spec))
        }
        Command::Count { files, json } => {
            let inputs = batch::read_inputs(files)?;
            let counted = batch::count_many(&inputs, args.workers)?;
            if *json {
                serde_json::to_string_pretty(&counted).context("Failed to serialize counts")
            } else {
                Ok(render_batch_stats(&counted))
            }
        }
        Command::Links { files } => extract(files, ExtractKind::Links, args.workers),
        Command::Emails { files } => extract(files, ExtractKind::Emails, args.workers),
        Command::Robots {
            rules: rule_file,
            sitemap,
            init,
        } => {
            if *init {
                rules::init_default_rules()?;
                return Ok(format!("Created {} with default rules", rules::DEFAULT_RULES_FILE));
            }
            let config = rules::load_robots_config(rule_file.as_deref())?;
            let sitemap = sitemap.as_deref().or(config.sitemap.as_deref());
            Ok(assemble_robots_txt(&config.rules, sitemap))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn run_with(argv: &[&str]) -> Result<String> {
        let mut full = vec!["webtools"];
        full.extend_from_slice(argv);
        run(&Args::parse_from(full))
    }

    #[test]
    fn test_transform_command() {
        let out = run_with(&["transform", "--scale", "1.5", "--rotate", "45", "--translate-x", "10"])
            .unwrap();
        assert_eq!(out, "transform: scale(1.5) rotate(45deg) translate(10px, 0px);");
    }

    #[test]
    fn test_transform_command_negative_values() {
        let out = run_with(&["transform", "--skew-x", "-10"]).unwrap();
        assert_eq!(out, "transform: skew(-10deg, 0deg);");
    }

    #[test]
    fn test_gradient_command() {
        let out = run_with(&["gradient", "--angle", "45", "red:0", "blue:100"]).unwrap();
        assert_eq!(out, "background: linear-gradient(45deg, red 0%, blue 100%);");
    }

    #[test]
    fn test_gradient_command_rejects_bad_stop() {
        assert!(run_with(&["gradient", "red"]).is_err());
    }

    #[test]
    fn test_css_commands_read_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        fs::write(&path, "/* c */ .a { color : red }").unwrap();
        let path = path.to_str().unwrap();

        assert_eq!(run_with(&["css-minify", path]).unwrap(), ".a{color:red}");
        assert_eq!(
            run_with(&["css-format", path]).unwrap(),
            "/* c */\n.a {\n  color: red\n}"
        );
    }

    #[test]
    fn test_count_command_multiple_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "hello world").unwrap();
        fs::write(&b, "Hi.").unwrap();

        let out = run_with(&["count", a.to_str().unwrap(), b.to_str().unwrap()]).unwrap();
        assert!(out.contains("--- Total (2 files) ---"));
        assert!(out.ends_with("Words: 3\nCharacters: 14\nCharacters (no spaces): 13\nParagraphs: 2\nSentences: 1\nLines: 2"));
    }

    #[test]
    fn test_count_command_json() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "hello world").unwrap();

        let out = run_with(&["count", "--json", a.to_str().unwrap()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"]["words"], 2);
        assert_eq!(value["files"][0]["stats"]["characters_no_spaces"], 10);
    }

    #[test]
    fn test_links_and_emails_commands() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "write to ops@corp.io or see https://corp.io/status.").unwrap();
        let a = a.to_str().unwrap();

        assert_eq!(run_with(&["links", a]).unwrap(), "https://corp.io/status");
        assert_eq!(run_with(&["emails", a]).unwrap(), "ops@corp.io");
    }

    #[test]
    fn test_robots_command_with_rule_file_and_sitemap_override() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.json");
        fs::write(
            &rules_path,
            r#"{"sitemap": "https://old.example/sitemap.xml", "rules": [{"userAgent": "*", "disallow": ["/admin/"]}]}"#,
        )
        .unwrap();
        let rules_path = rules_path.to_str().unwrap();

        assert_eq!(
            run_with(&["robots", "--rules", rules_path]).unwrap(),
            "User-agent: *\nDisallow: /admin/\n\nSitemap: https://old.example/sitemap.xml\n"
        );
        assert_eq!(
            run_with(&["robots", "--rules", rules_path, "--sitemap", "https://x.com/sitemap.xml"])
                .unwrap(),
            "User-agent: *\nDisallow: /admin/\n\nSitemap: https://x.com/sitemap.xml\n"
        );
    }
}
