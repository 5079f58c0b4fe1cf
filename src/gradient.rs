use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    Linear { angle_deg: f64 },
    Radial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: String,
    pub position_pct: f64,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, position_pct: f64) -> Self {
        Self {
            color: color.into(),
            position_pct,
        }
    }

    /// Parses `color:position`, e.g. `#ff0000:0` or `rgba(0,0,0,0.5):100`.
    /// The position is taken after the last colon; without one the stop has
    /// no usable position and `None` is returned.
    pub fn parse(raw: &str) -> Option<Self> {
        let (color, position) = raw.rsplit_once(':')?;
        let color = color.trim();
        let position = position.trim().trim_end_matches('%').parse::<f64>().ok()?;
        if color.is_empty() || !position.is_finite() {
            return None;
        }
        Some(Self::new(color, position))
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position_pct)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

impl GradientSpec {
    pub fn value(&self) -> String {
        if self.stops.is_empty() {
            return "none".to_string();
        }

        let stops = self
            .stops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            GradientKind::Linear { angle_deg } => {
                format!("linear-gradient({}deg, {})", angle_deg, stops)
            }
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
        }
    }
}

/// Renders a `background` declaration for the gradient.
pub fn build_gradient(spec: &GradientSpec) -> String {
    format!("background: {};", spec.value())
}
