//! Console rendering of a hearing analysis.

use anyhow::Result;
use std::io::Write;

use crate::{HearingAnalysis, QaPair, SpeakerStats};

const INDENT: &str = "   ";

fn indented(text: &str) -> String {
    text.lines()
        .map(|l| format!("{INDENT}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_pairs<W: Write>(out: &mut W, pairs: &[QaPair]) -> Result<()> {
    for pair in pairs {
        writeln!(out, "Question from {}:", pair.asker)?;
        writeln!(out, "{}", indented(&pair.question))?;
        writeln!(out, "Answer from {}:", pair.answerer)?;
        writeln!(out, "{}", indented(&pair.answer))?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_speakers<W: Write>(out: &mut W, speakers: &[SpeakerStats]) -> Result<()> {
    writeln!(out, "Speaker Count:")?;
    for s in speakers {
        writeln!(
            out,
            " {}: {} times, {} lines, {} questions, {} answered",
            s.speaker, s.turns, s.lines, s.questions, s.answered
        )?;
    }
    Ok(())
}

pub fn render_summary<W: Write>(out: &mut W, analysis: &HearingAnalysis) -> Result<()> {
    writeln!(out, "Lines of text: {}", analysis.line_count)?;
    writeln!(out, "Transcript segments: {}", analysis.turn_count)?;
    writeln!(out, "Question/answer pairs: {}", analysis.pair_count)?;
    Ok(())
}

/// The full text report: pairs, then speakers, then totals.
pub fn render_text<W: Write>(out: &mut W, analysis: &HearingAnalysis) -> Result<()> {
    render_pairs(out, &analysis.pairs)?;
    render_speakers(out, &analysis.speakers)?;
    render_summary(out, analysis)
}

pub fn render_json<W: Write>(out: &mut W, analysis: &HearingAnalysis) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, analysis)?;
    writeln!(out)?;
    Ok(())
}
