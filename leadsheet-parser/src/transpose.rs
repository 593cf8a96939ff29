//! Document transposition
//!
//! Transposing a song takes three passes over its lines:
//!
//! 1. Counting. Lines are grouped into paragraphs (a whitespace-only line starts a new
//!    one) and every chord root is counted into that paragraph's histogram, so key
//!    changes between verses can be picked up.
//! 2. Planning. The first paragraph with a usable key signal fixes the source key, and
//!    with the requested target that gives the shift. The shift is decided once and
//!    never recomputed.
//! 3. Rewriting. Every chord is shifted and respelled. When a later paragraph is
//!    confidently in a different key, only the preferred accidental follows it (taken
//!    from the newly detected key); the shift stays as planned.
//!
//! A chord that fails to parse aborts the whole run: no partially transposed text is
//! ever returned.

use crate::chord::Chord;
use crate::error::TransposeError;
use crate::key::{estimate, ChordHistogram, KeyEstimate};
use crate::pitch::{key_accidental, Accidental, Note, SEMITONES};
use crate::splitter::{chords, rewrite_chords};
use tracing::{debug, info, warn};

/// Requested destination key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub offset: u8,
    /// Accidental the rewrite starts with.
    pub accidental: Accidental,
}

/// Resolve a user supplied key name.
///
/// A pitch spelling (`D`, `f#`, `Bb`) is tried first. Failing that, a number 0-11 is
/// taken as an offset from C.
pub fn resolve_target(name: &str) -> Result<Target, TransposeError> {
    let name = name.trim();
    let offset = match name.parse::<Note>() {
        Ok(note) => note.offset(),
        Err(_) => name
            .parse::<u8>()
            .ok()
            .filter(|offset| *offset < SEMITONES)
            .ok_or_else(|| TransposeError::UnknownKey(name.to_string()))?,
    };
    Ok(Target {
        offset,
        accidental: key_accidental(offset),
    })
}

/// The shift decided in the planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub target: Target,
    /// Key of the first paragraph with a signal; `None` when no paragraph had one.
    pub source_key: Option<u8>,
    /// Semitones up, 0..=11. Zero when there was no source key.
    pub shift: u8,
}

impl Plan {
    pub fn new(estimates: &[KeyEstimate], target: Target) -> Self {
        let source_key = estimates
            .iter()
            .find(|estimate| estimate.has_signal())
            .map(|estimate| estimate.offset);

        let shift = match source_key {
            Some(key) => (target.offset + SEMITONES - key) % SEMITONES,
            None => {
                warn!("no chord gave a usable key signal; leaving chords at their pitch");
                0
            }
        };

        Plan {
            target,
            source_key,
            shift,
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn parse_chord(token: &str, line: usize) -> Result<Chord, TransposeError> {
    token
        .parse()
        .map_err(|source| TransposeError::Chord { line, source })
}

/// Pass 1: one histogram per paragraph, empty paragraphs included.
pub fn paragraph_histograms<S: AsRef<str>>(
    lines: &[S],
) -> Result<Vec<ChordHistogram>, TransposeError> {
    let mut paragraphs = Vec::new();
    let mut current = ChordHistogram::new();
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if is_blank(line) {
            paragraphs.push(std::mem::take(&mut current));
            continue;
        }
        for token in chords(line).filter(|token| !token.is_empty()) {
            current.record(&parse_chord(token, index + 1)?);
        }
    }
    paragraphs.push(current);
    Ok(paragraphs)
}

/// Estimated key of every paragraph, in order.
pub fn estimate_keys<S: AsRef<str>>(lines: &[S]) -> Result<Vec<KeyEstimate>, TransposeError> {
    let estimates: Vec<KeyEstimate> = paragraph_histograms(lines)?
        .iter()
        .map(estimate)
        .collect();
    for (index, estimate) in estimates.iter().enumerate() {
        debug!(
            paragraph = index,
            key = estimate.offset,
            confidence = estimate.confidence,
            "estimated paragraph key"
        );
    }
    Ok(estimates)
}

/// Transpose every chord in `lines` to the key named by `target`.
///
/// Non-chord text, blank lines and empty `[]` markers come back byte-identical.
pub fn transpose_lines<S: AsRef<str>>(
    lines: &[S],
    target: &str,
) -> Result<Vec<String>, TransposeError> {
    let target = resolve_target(target)?;
    let estimates = estimate_keys(lines)?;
    let plan = Plan::new(&estimates, target);
    info!(
        source = ?plan.source_key,
        target = target.offset,
        shift = plan.shift,
        "transposing"
    );
    rewrite(lines, &estimates, &plan)
}

/// Pass 3.
fn rewrite<S: AsRef<str>>(
    lines: &[S],
    estimates: &[KeyEstimate],
    plan: &Plan,
) -> Result<Vec<String>, TransposeError> {
    let mut active_key = plan.source_key;
    let mut accidental = plan.target.accidental;
    let mut paragraph = 0;
    let mut out = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if let Some(estimate) = estimates.get(paragraph).filter(|e| e.has_signal()) {
            if active_key != Some(estimate.offset) {
                accidental = key_accidental(estimate.offset);
                info!(
                    paragraph,
                    from = ?active_key,
                    to = estimate.offset,
                    accidental = %accidental.as_char(),
                    "key change"
                );
                active_key = Some(estimate.offset);
            }
        }
        if is_blank(line) {
            paragraph += 1;
        }

        let rewritten = rewrite_chords(line, |token| -> Result<String, TransposeError> {
            if token.is_empty() {
                return Ok(String::new());
            }
            let mut chord = parse_chord(token, index + 1)?;
            chord.transpose(u32::from(plan.shift));
            chord.normalise(accidental);
            Ok(chord.to_string())
        })?;
        out.push(rewritten);
    }
    Ok(out)
}
