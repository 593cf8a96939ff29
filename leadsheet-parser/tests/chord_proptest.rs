//! Property-based tests for the chord model and transposition
//!
//! Generated tokens follow the chord grammar:
//! - root from the 17 accepted spellings, letter in either case
//! - a quality that never starts with an accidental (it would be read as part of the root)
//! - an optional `/bass`, and trailing text only after a bass

use leadsheet_parser::key::{estimate, ChordHistogram, Mode};
use leadsheet_parser::pitch::{Accidental, Note};
use leadsheet_parser::splitter::chords;
use leadsheet_parser::transpose::transpose_lines;
use leadsheet_parser::Chord;
use proptest::prelude::*;

fn note_strategy() -> impl Strategy<Value = Note> {
    prop::sample::select(Note::ALL.to_vec())
}

/// Note spelling, with the letter randomly lowercased
fn spelling_strategy() -> impl Strategy<Value = String> {
    (note_strategy(), any::<bool>()).prop_map(|(note, lower)| {
        let spelling = note.to_string();
        if lower {
            let mut chars = spelling.chars();
            let letter = chars.next().unwrap().to_ascii_lowercase();
            std::iter::once(letter).chain(chars).collect()
        } else {
            spelling
        }
    })
}

fn quality_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "(m|maj|min|sus|dim|aug|add|mmaj)?[0-9]{0,2}",
        "[0-9]{1,2}(sus[24])?",
    ]
}

fn chord_token_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        spelling_strategy(),
        quality_strategy(),
        prop::option::of((spelling_strategy(), "[)*]{0,2}")),
    )
        .prop_map(|(paren, root, quality, bass)| {
            let mut token = String::new();
            if paren {
                token.push('(');
            }
            token.push_str(&root);
            token.push_str(&quality);
            if let Some((bass, rest)) = bass {
                token.push('/');
                token.push_str(&bass);
                token.push_str(&rest);
            }
            token
        })
}

fn offsets(chord: &Chord) -> (u8, Option<u8>) {
    (chord.root.offset(), chord.bass.map(Note::offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn serialize_then_parse_keeps_every_field(token in chord_token_strategy()) {
        let parsed: Chord = token.parse().unwrap();
        let reparsed: Chord = parsed.to_string().parse().unwrap();
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(parsed.to_string().to_lowercase(), token.to_lowercase());
    }

    #[test]
    fn transposing_twice_adds_shifts(token in chord_token_strategy(), a in 0u32..24, b in 0u32..24) {
        let mut stepwise: Chord = token.parse().unwrap();
        stepwise.transpose(a);
        stepwise.transpose(b);

        let mut once: Chord = token.parse().unwrap();
        once.transpose((a + b) % 12);

        prop_assert_eq!(offsets(&stepwise), offsets(&once));
    }

    #[test]
    fn whole_octaves_keep_pitch_class(token in chord_token_strategy(), octaves in 0u32..4) {
        let original: Chord = token.parse().unwrap();
        let mut moved = original.clone();
        moved.transpose(octaves * 12);
        prop_assert_eq!(offsets(&moved), offsets(&original));
    }

    #[test]
    fn normalise_is_idempotent(token in chord_token_strategy(), flat in any::<bool>()) {
        let accidental = if flat { Accidental::Flat } else { Accidental::Sharp };
        let mut once: Chord = token.parse().unwrap();
        once.normalise(accidental);
        let mut twice = once.clone();
        twice.normalise(accidental);
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn estimate_is_deterministic(counts in prop::collection::vec((0u8..12, any::<bool>()), 0..40)) {
        let mut histogram = ChordHistogram::new();
        for (offset, minor) in counts {
            histogram.add(offset, if minor { Mode::Minor } else { Mode::Major });
        }
        let first = estimate(&histogram);
        prop_assert_eq!(estimate(&histogram), first);
        prop_assert!(first.offset < 12);
        prop_assert_eq!(first.has_signal(), !histogram.is_empty());
    }

    #[test]
    fn every_chord_in_a_paragraph_moves_by_the_same_interval(
        tokens in prop::collection::vec(chord_token_strategy(), 1..8),
        target in note_strategy(),
    ) {
        let line: String = tokens.iter().map(|t| format!("[{t}]la ")).collect();
        let out = transpose_lines(&[line.as_str()], target.as_str()).unwrap();

        let before: Vec<Chord> = chords(&line).map(|t| t.parse().unwrap()).collect();
        let after: Vec<Chord> = chords(&out[0]).map(|t| t.parse().unwrap()).collect();
        prop_assert_eq!(before.len(), after.len());

        let interval = |b: &Chord, a: &Chord| (a.root.offset() + 12 - b.root.offset()) % 12;
        let shift = interval(&before[0], &after[0]);
        for (b, a) in before.iter().zip(after.iter()) {
            prop_assert_eq!(interval(b, a), shift);
            prop_assert_eq!(&a.quality, &b.quality);
        }
    }
}
