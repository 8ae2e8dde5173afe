/// Ripeness classes the model can return, with their Spanish display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RipenessLabel {
    FreshRipe,
    FreshUnripe,
    Overripe,
    Ripe,
    Rotten,
    Unripe,
}

impl RipenessLabel {
    /// Parse a prediction code as sent by the service.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "freshripe" => Some(Self::FreshRipe),
            "freshunripe" => Some(Self::FreshUnripe),
            "overripe" => Some(Self::Overripe),
            "ripe" => Some(Self::Ripe),
            "rotten" => Some(Self::Rotten),
            "unripe" => Some(Self::Unripe),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FreshRipe => "Fresco Maduro",
            Self::FreshUnripe => "Fresco Verde",
            Self::Overripe => "Muy Maduro",
            Self::Ripe => "Maduro",
            Self::Rotten => "Podrido",
            Self::Unripe => "Verde",
        }
    }
}

/// Translate a service prediction code into its display string. Codes outside
/// the dictionary are shown as-is rather than dropped.
pub fn translate(code: &str) -> String {
    match RipenessLabel::from_code(code) {
        Some(label) => label.display_name().to_string(),
        None => {
            log::debug!("Unknown prediction code '{code}', displaying raw");
            code.to_string()
        }
    }
}

/// Format a confidence value as a rounded percentage. Absent confidence
/// renders as an empty string.
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) => format!("{:.0}% de confianza", c * 100.0),
        None => String::new(),
    }
}
