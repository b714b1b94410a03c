use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::error::{MarkerKind, TranscriptError};
use crate::{SpeakerTally, Transcript, Turn};

// Speaker lines are indented four spaces and open with a role and a name
// closed by ". ", e.g. "    Senator Brown. Thank you".
const SPEAKER_PATTERN: &str = r"^    ((?:Senator |Chairman |Mr\. )[A-Za-z ]+)\. ";

fn speaker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SPEAKER_PATTERN).expect("speaker pattern is valid"))
}

/// Trim whitespace and trailing periods off a speaker name,
/// so "Mr. Marcus. " and "Mr. Marcus" compare equal.
pub fn normalize_speaker(name: &str) -> String {
    name.trim().trim_end_matches('.').trim_end().to_string()
}

/// The text strictly between the first `start_marker` and the first `end_marker`.
pub fn section<'doc>(
    document: &'doc str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'doc str, TranscriptError> {
    if document.is_empty() {
        return Err(TranscriptError::EmptyDocument);
    }

    let start_idx = document
        .find(start_marker)
        .ok_or_else(|| TranscriptError::MarkerNotFound {
            kind: MarkerKind::Start,
            marker: start_marker.to_string(),
        })?;
    let end_idx = document
        .find(end_marker)
        .ok_or_else(|| TranscriptError::MarkerNotFound {
            kind: MarkerKind::End,
            marker: end_marker.to_string(),
        })?;

    let body_start = start_idx + start_marker.len();
    if end_idx < body_start {
        return Err(TranscriptError::MarkersOutOfOrder {
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
        });
    }

    Ok(&document[body_start..end_idx])
}

/// What a single line of the section turned out to be.
enum LineKind<'l> {
    Speaker { name: String, rest: &'l str },
    Text(&'l str),
}

fn classify(line: &str) -> LineKind<'_> {
    let caps: Option<Captures> = speaker_regex().captures(line);
    match caps.as_ref().map(|c| (c.get(0), c.get(1))) {
        Some((Some(whole), Some(name))) => LineKind::Speaker {
            name: normalize_speaker(name.as_str()),
            rest: line[whole.end()..].trim(),
        },
        _ => LineKind::Text(line.trim()),
    }
}

/// Split the section between the two markers into speaker turns.
///
/// Lines before the first speaker line belong to nobody and are dropped.
/// Every other line, empty ones included, becomes one text element of the
/// turn it follows.
pub fn extract(
    document: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<Transcript, TranscriptError> {
    let section = section(document, start_marker, end_marker)?;

    let mut turns: Vec<Turn> = Vec::new();
    let mut speaker_counts = SpeakerTally::new();
    let mut line_count = 0_usize;
    let mut discarded = 0_usize;

    for line in section.split('\n') {
        line_count += 1;

        match classify(line) {
            LineKind::Speaker { name, rest } => {
                *speaker_counts.entry(name.clone()).or_insert(0) += 1;
                turns.push(Turn::new(name, rest));
            }
            LineKind::Text(text) => match turns.last_mut() {
                Some(current) => current.lines.push(text.to_string()),
                None => discarded += 1,
            },
        }
    }

    if discarded > 0 {
        debug!(discarded, "Dropped lines before the first speaker");
    }
    if turns.is_empty() {
        warn!(line_count, "Section holds no speaker turns");
    }
    info!(
        lines = line_count,
        turns = turns.len(),
        speakers = speaker_counts.len(),
        "Extracted transcript section"
    );

    Ok(Transcript {
        line_count,
        turns,
        speaker_counts,
    })
}
