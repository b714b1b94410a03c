use serde::Serialize;
use std::collections::BTreeMap;

pub mod config;
pub mod error;
pub mod fetch;
pub mod qaanalyzer;
pub mod report;
pub mod transcriptparser;

pub use config::{FetchConfig, ParserConfig};
pub use error::{FetchError, MarkerKind, TranscriptError};
pub use qaanalyzer::{analyze, find_pairs, speaker_stats};
pub use transcriptparser::{extract, normalize_speaker};

/// Number of turns per normalized speaker name.
pub type SpeakerTally = BTreeMap<String, usize>;

/// One contiguous block of speech by a single speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub speaker: String,
    pub lines: Vec<String>,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, first_line: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            lines: vec![first_line.into()],
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn asks_question(&self) -> bool {
        self.lines.iter().any(|l| l.contains('?'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaPair {
    pub asker: String,
    pub answerer: String,
    pub question: String,
    pub answer: String,
}

/// Output of the segment extractor for one section of a hearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Every line of the section, including the ones before the first speaker.
    pub line_count: usize,
    pub turns: Vec<Turn>,
    pub speaker_counts: SpeakerTally,
}

impl Transcript {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerStats {
    pub speaker: String,
    pub turns: usize,
    /// Non-empty text lines across all of the speaker's turns.
    pub lines: usize,
    /// Turns of this speaker holding a `?`.
    pub questions: usize,
    /// Questions of this speaker that drew an answer from the answerer.
    pub answered: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HearingAnalysis {
    pub line_count: usize,
    pub turn_count: usize,
    pub pair_count: usize,
    pub speaker_counts: SpeakerTally,
    pub speakers: Vec<SpeakerStats>,
    pub pairs: Vec<QaPair>,
}
