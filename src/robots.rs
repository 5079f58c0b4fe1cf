use serde::{Deserialize, Serialize};

/// One `User-agent` group of a robots.txt file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub disallow: Vec<String>,
    #[serde(default)]
    pub crawl_delay: Option<String>,
}

impl RobotsRule {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("User-agent: ");
        out.push_str(&self.user_agent);
        out.push('\n');
        for path in &self.allow {
            out.push_str("Allow: ");
            out.push_str(path);
            out.push('\n');
        }
        for path in &self.disallow {
            out.push_str("Disallow: ");
            out.push_str(path);
            out.push('\n');
        }
        if let Some(delay) = self.crawl_delay.as_deref().filter(|d| !d.trim().is_empty()) {
            out.push_str("Crawl-delay: ");
            out.push_str(delay);
            out.push('\n');
        }
    }
}

/// Serializes rule groups and an optional sitemap into robots.txt text.
///
/// Groups are separated by one blank line and keep their input order. The
/// values are written as given; nothing is validated.
pub fn assemble_robots_txt(rules: &[RobotsRule], sitemap: Option<&str>) -> String {
    let mut out = String::new();

    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        rule.write_to(&mut out);
    }

    if let Some(url) = sitemap.map(str::trim).filter(|url| !url.is_empty()) {
        out.push('\n');
        out.push_str("Sitemap: ");
        out.push_str(url);
        out.push('\n');
    }

    out
}
