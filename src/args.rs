use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webtools",
    about = "Small text utilities for web developers: CSS, text stats, links, robots.txt",
    version,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of worker threads for multi-file commands
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Strip comments and whitespace from CSS
    CssMinify {
        /// CSS file to read (standard input when omitted)
        file: Option<PathBuf>,
    },

    /// Re-indent CSS with one declaration per line
    CssFormat {
        /// CSS file to read (standard input when omitted)
        file: Option<PathBuf>,
    },

    /// Build a CSS transform declaration
    Transform {
        /// Scale factor
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        scale: String,

        /// Rotation in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rotate: String,

        /// Horizontal offset in pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        translate_x: String,

        /// Vertical offset in pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        translate_y: String,

        /// Horizontal skew in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        skew_x: String,

        /// Vertical skew in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        skew_y: String,
    },

    /// Build a CSS gradient background declaration
    Gradient {
        /// Color stops as `color:position`, e.g. `#ff0000:0 #0000ff:100`
        #[arg(required = true)]
        stops: Vec<String>,

        /// Use a radial gradient instead of a linear one
        #[arg(long)]
        radial: bool,

        /// Angle of a linear gradient in degrees
        #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
        angle: f64,
    },

    /// Count words, characters, paragraphs, sentences and lines
    Count {
        /// Files to count (standard input when omitted)
        files: Vec<PathBuf>,

        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract unique links from text
    Links {
        /// Files to scan (standard input when omitted)
        files: Vec<PathBuf>,
    },

    /// Extract unique email addresses from text
    Emails {
        /// Files to scan (standard input when omitted)
        files: Vec<PathBuf>,
    },

    /// Generate robots.txt from a rule file
    Robots {
        /// Path to a JSON rule file
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Sitemap URL, overriding the one in the rule file
        #[arg(short, long)]
        sitemap: Option<String>,

        /// Initialize robots_rules.json with default rules
        #[arg(long)]
        init: bool,
    },
}
