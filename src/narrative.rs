//! Narrative Builder
//!
//! Scenario output is an ordered list of text lines rendered with `\n`.

use std::fmt;

use serde::Serialize;

/// The human-readable result of running a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Narrative {
    lines: Vec<String>,
}

impl Narrative {
    /// Start a narrative with its heading line
    pub fn titled(title: impl Into<String>) -> Self {
        Self { lines: vec![title.into()] }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Append a `- ` prefixed list item
    pub fn bullet(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("- {}", text.as_ref()));
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Append a section heading followed by its bullet items
    pub fn section<I, S>(mut self, heading: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.push(heading.into());
        for item in items {
            self = self.bullet(item);
        }
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl From<Narrative> for String {
    fn from(narrative: Narrative) -> Self {
        narrative.to_string()
    }
}

/// Format an amount the way the demonstrations print prices: shortest
/// round-trip digits, always with a fractional part (`10.0`, `85.5`).
pub fn amount(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_rendering() {
        let narrative = Narrative::titled("Heading")
            .line("Intro.")
            .blank()
            .section("Problems:", ["one", "two"]);

        assert_eq!(narrative.to_string(), "Heading\nIntro.\n\nProblems:\n- one\n- two");
        assert_eq!(narrative.lines().len(), 6);
    }

    #[test]
    fn test_empty_detection() {
        assert!(Narrative::default().is_empty());
        assert!(Narrative::default().blank().is_empty());
        assert!(!Narrative::titled("x").is_empty());
    }

    #[test]
    fn test_amount_keeps_fraction() {
        assert_eq!(amount(10.0), "10.0");
        assert_eq!(amount(90.0), "90.0");
        assert_eq!(amount(85.5), "85.5");
    }
}
