use serde::Serialize;

/// Predictions strictly below this are freezing.
pub const FREEZING_BELOW_C: f64 = 0.0;
/// Predictions strictly below this (and not freezing) are cold.
pub const COLD_BELOW_C: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLabel {
    Freezing,
    Cold,
    Mild,
}

/// How loudly the presentation layer should show an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
    Success,
}

fn is_freezing(value: f64) -> bool {
    value < FREEZING_BELOW_C
}

fn is_cold(value: f64) -> bool {
    value < COLD_BELOW_C
}

fn is_mild(value: f64) -> bool {
    value >= COLD_BELOW_C
}

/// Ordered (predicate, label) pairs. The first matching predicate wins.
pub static ADVISORY_LADDER: [(fn(f64) -> bool, AdvisoryLabel); 3] = [
    (is_freezing, AdvisoryLabel::Freezing),
    (is_cold, AdvisoryLabel::Cold),
    (is_mild, AdvisoryLabel::Mild),
];

impl AdvisoryLabel {
    /// Walk the ladder for `value`. Only `NaN` matches no rung.
    pub fn classify(value: f64) -> Option<AdvisoryLabel> {
        ADVISORY_LADDER
            .iter()
            .find(|(matches, _)| matches(value))
            .map(|(_, label)| *label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryLabel::Freezing => "freezing",
            AdvisoryLabel::Cold => "cold",
            AdvisoryLabel::Mild => "mild",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AdvisoryLabel::Freezing => Severity::Warning,
            AdvisoryLabel::Cold => Severity::Info,
            AdvisoryLabel::Mild => Severity::Success,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryLabel::Freezing => "Freezing night expected — stay warm!",
            AdvisoryLabel::Cold => "Cold conditions — jacket recommended.",
            AdvisoryLabel::Mild => "Mild weather conditions.",
        }
    }
}

impl std::fmt::Display for AdvisoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
