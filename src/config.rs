//! Run configuration for the hearing analysis.

pub const DEFAULT_START_MARKER: &str = "STATEMENT OF DAVID A. MARCUS, HEAD OF CALIBRA, FACEBOOK";
pub const DEFAULT_END_MARKER: &str = "PREPARED STATEMENT OF SENATOR SHERROD BROWN";
pub const DEFAULT_ANSWERER: &str = "Mr. Marcus";
pub const DEFAULT_URL: &str =
    "https://www.govinfo.gov/content/pkg/CHRG-116shrg37919/html/CHRG-116shrg37919.htm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Text right before the section of interest (excluded).
    pub start_marker: String,
    /// Text right after the section of interest (excluded).
    pub end_marker: String,
    /// Speaker whose turns count as answers.
    pub answerer_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            answerer_name: DEFAULT_ANSWERER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
        }
    }
}
