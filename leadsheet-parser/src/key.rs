//! Key estimation from chord frequencies
//!
//! Each chord root is converted to an offset from C and counted per mode. For every
//! candidate tonic we weigh those counts by how strongly a chord on that scale degree
//! points at the tonic:
//!
//! ```text
//!   I, vi          x 2
//!   IV, V, ii, iii x 1
//!   everything     x 0
//! ```
//!
//! Unusual chords drop out and the most likely key ends up with the largest total.

use crate::chord::Chord;
use crate::pitch::SEMITONES;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    fn index(self) -> usize {
        match self {
            Mode::Major => 0,
            Mode::Minor => 1,
        }
    }
}

/// Weight for a chord `degree` semitones above the candidate tonic, by mode.
const MULTIPLIERS: [[u32; 2]; SEMITONES as usize] = [
    [2, 0], // I
    [0, 0],
    [0, 1], // ii
    [0, 0],
    [0, 1], // iii
    [1, 0], // IV
    [0, 0],
    [1, 0], // V
    [0, 0],
    [0, 2], // vi
    [0, 0],
    [0, 0],
];

/// Weight of a chord `degree` semitones above the tonic.
pub fn multiplier(degree: u8, mode: Mode) -> u32 {
    MULTIPLIERS[(degree % SEMITONES) as usize][mode.index()]
}

/// Chord-root counts for one paragraph, indexed by (offset, mode).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordHistogram {
    counts: [[u32; 2]; SEMITONES as usize],
}

impl ChordHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, offset: u8, mode: Mode) {
        self.counts[(offset % SEMITONES) as usize][mode.index()] += 1;
    }

    pub fn record(&mut self, chord: &Chord) {
        let mode = if chord.is_minor() {
            Mode::Minor
        } else {
            Mode::Major
        };
        self.add(chord.root.offset(), mode);
    }

    pub fn count(&self, offset: u8, mode: Mode) -> u32 {
        self.counts[(offset % SEMITONES) as usize][mode.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Fold another histogram into this one. Order does not matter.
    pub fn merge(&mut self, other: &ChordHistogram) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            mine[0] += theirs[0];
            mine[1] += theirs[1];
        }
    }
}

/// Most probable tonic for a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyEstimate {
    /// Pitch-class offset of the tonic, 0..=11.
    pub offset: u8,
    /// Winning score; 0 means the paragraph carried no usable key signal.
    pub confidence: u32,
}

impl KeyEstimate {
    pub fn has_signal(&self) -> bool {
        self.confidence > 0
    }
}

/// Score all twelve tonics and keep the best. Ties go to the lowest offset.
pub fn estimate(histogram: &ChordHistogram) -> KeyEstimate {
    let mut best = KeyEstimate::default();
    for key in 0..SEMITONES {
        let mut score = 0;
        for offset in 0..SEMITONES {
            let degree = (offset + SEMITONES - key) % SEMITONES;
            for mode in [Mode::Major, Mode::Minor] {
                score += multiplier(degree, mode) * histogram.count(offset, mode);
            }
        }
        if score > best.confidence {
            best = KeyEstimate {
                offset: key,
                confidence: score,
            };
        }
    }
    best
}
