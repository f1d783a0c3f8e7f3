//! Conversion result reported to the user

/// Outcome of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub original: String,
    pub converted: String,
    pub success: bool,
    pub error: Option<String>,
    /// Non-fatal problem after a successful conversion (layout indicator)
    pub warning: Option<String>,
}

impl ConversionResult {
    pub fn succeeded(original: impl Into<String>, converted: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            converted: converted.into(),
            success: true,
            error: None,
            warning: None,
        }
    }

    pub fn failed(
        original: impl Into<String>,
        converted: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            converted: converted.into(),
            success: false,
            error: Some(error.into()),
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Notification body
    pub fn summary(&self) -> String {
        let mut body = format!("In: {}\nOut: {}", self.original, self.converted);
        if let Some(ref error) = self.error {
            body.push_str(&format!("\nError: {}", error));
        }
        if let Some(ref warning) = self.warning {
            body.push_str(&format!("\nWarning: {}", warning));
        }
        body
    }
}
