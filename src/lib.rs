pub mod args;
pub mod batch;
pub mod commands;
pub mod css;
pub mod domain;
pub mod gradient;
pub mod links;
pub mod robots;
pub mod rules;
pub mod stats;
pub mod transform;
pub mod utils;

pub use args::Args;
pub use css::{format_css, minify_css, CssTextTransform, Formatter, Minifier};
pub use gradient::{build_gradient, ColorStop, GradientKind, GradientSpec};
pub use links::{extract_emails, extract_links};
pub use robots::{assemble_robots_txt, RobotsRule};
pub use rules::{init_default_rules, RobotsConfig};
pub use stats::{count_text, TextStats};
pub use transform::{build_transform, TransformSpec};
