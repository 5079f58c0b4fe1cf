use std::fmt;

/// Slider state for the CSS `transform` builder, kept as the text the
/// caller entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSpec {
    pub scale: String,
    pub rotate: String,
    pub translate_x: String,
    pub translate_y: String,
    pub skew_x: String,
    pub skew_y: String,
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::from_strs("1", "0", "0", "0", "0", "0")
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_identity(raw: &str, identity: f64) -> bool {
    parse_finite(raw).map_or(true, |v| v == identity)
}

/// The caller's text when it is a usable number, else the identity value.
fn render(raw: &str, identity: f64) -> String {
    match parse_finite(raw) {
        Some(_) => raw.trim().to_string(),
        None => identity.to_string(),
    }
}

impl TransformSpec {
    /// Anything that is not a finite number counts as the field's identity
    /// value.
    pub fn from_strs(
        scale: &str,
        rotate: &str,
        translate_x: &str,
        translate_y: &str,
        skew_x: &str,
        skew_y: &str,
    ) -> Self {
        Self {
            scale: scale.to_string(),
            rotate: rotate.to_string(),
            translate_x: translate_x.to_string(),
            translate_y: translate_y.to_string(),
            skew_x: skew_x.to_string(),
            skew_y: skew_y.to_string(),
        }
    }

    /// The composed property value, `none` when every field is at identity.
    pub fn value(&self) -> String {
        let mut functions = Vec::new();

        if !is_identity(&self.scale, 1.0) {
            functions.push(format!("scale({})", render(&self.scale, 1.0)));
        }
        if !is_identity(&self.rotate, 0.0) {
            functions.push(format!("rotate({}deg)", render(&self.rotate, 0.0)));
        }
        if !is_identity(&self.translate_x, 0.0) || !is_identity(&self.translate_y, 0.0) {
            functions.push(format!(
                "translate({}px, {}px)",
                render(&self.translate_x, 0.0),
                render(&self.translate_y, 0.0)
            ));
        }
        if !is_identity(&self.skew_x, 0.0) || !is_identity(&self.skew_y, 0.0) {
            functions.push(format!(
                "skew({}deg, {}deg)",
                render(&self.skew_x, 0.0),
                render(&self.skew_y, 0.0)
            ));
        }

        if functions.is_empty() {
            "none".to_string()
        } else {
            functions.join(" ")
        }
    }
}

impl fmt::Display for TransformSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform: {};", self.value())
    }
}

pub fn build_transform(
    scale: &str,
    rotate: &str,
    translate_x: &str,
    translate_y: &str,
    skew_x: &str,
    skew_y: &str,
) -> String {
    TransformSpec::from_strs(scale, rotate, translate_x, translate_y, skew_x, skew_y).to_string()
}
