use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::error::TranscriptError;
use crate::transcriptparser::{extract, normalize_speaker};
use crate::{HearingAnalysis, QaPair, SpeakerStats, Turn};

/// Pair every question with the answer that immediately follows it.
///
/// A pair is two adjacent turns where the first is not by `answerer` and holds
/// a `?`, and the second is by `answerer`. Only direct neighbours are looked
/// at: a question interrupted by another speaker before the answer, or an
/// answer resumed after an interjection, is not paired.
pub fn find_pairs(turns: &[Turn], answerer: &str) -> Vec<QaPair> {
    let answerer = normalize_speaker(answerer);

    turns
        .windows(2)
        .filter_map(|window| {
            let (previous, current) = (&window[0], &window[1]);
            let is_pair = previous.speaker != answerer
                && previous.asks_question()
                && current.speaker == answerer;
            if !is_pair {
                return None;
            }

            debug!(asker = %previous.speaker, "Matched question/answer pair");
            Some(QaPair {
                asker: previous.speaker.clone(),
                answerer: current.speaker.clone(),
                question: previous.text(),
                answer: current.text(),
            })
        })
        .collect()
}

/// Per-speaker turns, spoken lines, questions asked and questions answered,
/// sorted by name.
pub fn speaker_stats(turns: &[Turn], pairs: &[QaPair]) -> Vec<SpeakerStats> {
    let mut stats: BTreeMap<&str, SpeakerStats> = BTreeMap::new();

    for turn in turns {
        let entry = stats
            .entry(turn.speaker.as_str())
            .or_insert_with(|| SpeakerStats {
                speaker: turn.speaker.clone(),
                turns: 0,
                lines: 0,
                questions: 0,
                answered: 0,
            });
        entry.turns += 1;
        entry.lines += turn.lines.iter().filter(|l| !l.is_empty()).count();
        entry.questions += usize::from(turn.asks_question());
    }

    for pair in pairs {
        if let Some(entry) = stats.get_mut(pair.asker.as_str()) {
            entry.answered += 1;
        }
    }

    stats.into_values().collect()
}

/// Run the extractor and the pairing over one document.
pub fn analyze(document: &str, config: &ParserConfig) -> Result<HearingAnalysis, TranscriptError> {
    let transcript = extract(document, &config.start_marker, &config.end_marker)?;
    let pairs = find_pairs(&transcript.turns, &config.answerer_name);
    let speakers = speaker_stats(&transcript.turns, &pairs);

    info!(
        answerer = %config.answerer_name,
        pairs = pairs.len(),
        "Paired questions with answers"
    );

    Ok(HearingAnalysis {
        line_count: transcript.line_count,
        turn_count: transcript.turn_count(),
        pair_count: pairs.len(),
        speaker_counts: transcript.speaker_counts,
        speakers,
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MARCUS: &str = "Mr. Marcus";

    fn turn(speaker: &str, lines: &[&str]) -> Turn {
        Turn {
            speaker: speaker.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn scenario_a_pairs_question_with_answer() {
        let turns = vec![
            turn("Senator Brown", &["Is this fair?"]),
            turn(MARCUS, &["Yes, Senator."]),
        ];

        assert_eq!(
            find_pairs(&turns, MARCUS),
            vec![QaPair {
                asker: "Senator Brown".to_string(),
                answerer: MARCUS.to_string(),
                question: "Is this fair?".to_string(),
                answer: "Yes, Senator.".to_string(),
            }]
        );
    }

    #[test]
    fn scenario_b_answerer_does_not_answer_himself() {
        let turns = vec![turn(MARCUS, &["Why not?"]), turn(MARCUS, &["Because."])];
        assert!(find_pairs(&turns, MARCUS).is_empty());
    }

    #[test]
    fn scenario_c_statement_without_question_mark() {
        let turns = vec![
            turn("Senator Brown", &["Thank you."]),
            turn(MARCUS, &["Thank you, Senator."]),
        ];
        assert!(find_pairs(&turns, MARCUS).is_empty());
    }

    #[test]
    fn short_sequences_have_no_pairs() {
        assert!(find_pairs(&[], MARCUS).is_empty());
        assert!(find_pairs(&[turn("Senator Brown", &["Why?"])], MARCUS).is_empty());
    }

    #[test]
    fn answerer_name_is_normalized() {
        let turns = vec![turn("Senator Brown", &["Why?"]), turn(MARCUS, &["Because."])];
        assert_eq!(find_pairs(&turns, "Mr. Marcus. ").len(), 1);
        assert!(find_pairs(&turns, "mr. marcus").is_empty());
    }

    #[test]
    fn multi_line_texts_are_joined_with_newlines() {
        let turns = vec![
            turn("Senator Warren", &["First,", "", "is it safe?"]),
            turn(MARCUS, &["Yes.", "", "It is."]),
        ];
        let pairs = find_pairs(&turns, MARCUS);

        assert_eq!(pairs[0].question, "First,\n\nis it safe?");
        assert_eq!(pairs[0].answer, "Yes.\n\nIt is.");
    }

    #[test]
    fn interrupted_question_is_not_paired() {
        let turns = vec![
            turn("Senator Brown", &["Will you stop?"]),
            turn("Chairman Crapo", &["Time has expired."]),
            turn(MARCUS, &["We will not launch."]),
        ];
        assert!(find_pairs(&turns, MARCUS).is_empty());
    }

    #[test]
    fn every_qualifying_neighbour_yields_a_pair() {
        let turns = vec![
            turn("Senator Brown", &["One?"]),
            turn(MARCUS, &["A."]),
            turn("Senator Brown", &["Two?"]),
            turn(MARCUS, &["B?"]),
            turn(MARCUS, &["C."]),
            turn("Senator Tester", &["Three?"]),
            turn(MARCUS, &["D."]),
        ];
        let pairs = find_pairs(&turns, MARCUS);

        let answers: Vec<&str> = pairs.iter().map(|p| p.answer.as_str()).collect();
        assert_eq!(answers, vec!["A.", "B?", "D."]);
        assert!(pairs.iter().all(|p| p.answerer == MARCUS));
        assert!(pairs.iter().all(|p| p.question.contains('?')));
    }

    #[test]
    fn stats_count_turns_lines_and_questions() {
        let turns = vec![
            turn("Senator Brown", &["One?", "", "More"]),
            turn(MARCUS, &["A."]),
            turn("Senator Brown", &["Thanks."]),
            turn(MARCUS, &[""]),
            turn("Senator Brown", &["Cut off?"]),
            turn("Chairman Crapo", &["Time."]),
            turn(MARCUS, &["May I ask why?"]),
        ];
        let pairs = find_pairs(&turns, MARCUS);

        assert_eq!(
            speaker_stats(&turns, &pairs),
            vec![
                SpeakerStats {
                    speaker: "Chairman Crapo".to_string(),
                    turns: 1,
                    lines: 1,
                    questions: 0,
                    answered: 0,
                },
                SpeakerStats {
                    speaker: MARCUS.to_string(),
                    turns: 3,
                    lines: 2,
                    questions: 1,
                    answered: 0,
                },
                SpeakerStats {
                    speaker: "Senator Brown".to_string(),
                    turns: 3,
                    lines: 4,
                    questions: 2,
                    answered: 1,
                },
            ]
        );
    }

    #[test]
    fn analyze_reports_counts() {
        let config = ParserConfig {
            start_marker: "<<".to_string(),
            end_marker: ">>".to_string(),
            answerer_name: MARCUS.to_string(),
        };
        let doc = "<<\n    Senator Brown. Is this fair?\n    Mr. Marcus. Yes, Senator.\n>>";
        let analysis = analyze(doc, &config).unwrap();

        assert_eq!(analysis.line_count, 4);
        assert_eq!(analysis.turn_count, 2);
        assert_eq!(analysis.pair_count, 1);
        assert_eq!(analysis.pairs[0].answer, "Yes, Senator.\n");
    }

    #[test]
    fn analyze_propagates_marker_errors() {
        let err = analyze("no markers here", &ParserConfig::default()).unwrap_err();
        assert!(err.is_marker_not_found());
    }
}
