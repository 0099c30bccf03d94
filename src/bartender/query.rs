//! Turns a free-text drink question into a recipe search term.

use regex::Regex;

/// Lead-in phrases stripped from a lower-cased question.
const LEAD_IN_PATTERN: &str = r"how do i make|what's in a|tell me how to make|recipe for";

/// Extracts drink-name search terms from user messages.
#[derive(Clone, Debug)]
pub struct QueryParser {
    lead_in: Regex,
}

impl QueryParser {
    /// Compile the lead-in phrase pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            lead_in: Regex::new(LEAD_IN_PATTERN)?,
        })
    }

    /// Lower-case the message, drop every lead-in phrase, trim, then remove ASCII punctuation.
    ///
    /// Messages without a lead-in phrase come back whole (lower-cased and
    /// punctuation-free). The result may be empty.
    #[must_use]
    pub fn extract_search_term(&self, message: &str) -> String {
        let lowered = message.to_lowercase();
        let cleaned = self.lead_in.replace_all(&lowered, "");
        cleaned
            .trim()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect()
    }
}
