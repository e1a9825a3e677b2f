//! Voicing search for chords without a curated shape
//!
//! Walks fret windows from the nut upwards and returns the best playable
//! shape in the lowest window that has one. A shape is playable when:
//! - the lowest sounding note is the chord's bass (not checked on
//!   re-entrant tunings, where the lowest string is not the lowest note),
//! - every required chord tone sounds,
//! - muted strings only appear below the sounding ones,
//! - it needs at most four fingers (a barre counts as one).

use super::name::ChordName;
use crate::models::{ChordShape, Instrument};

const MAX_FINGERS: usize = 4;

/// Find a shape for the chord on the instrument
pub fn find_voicing(chord: &ChordName, instrument: Instrument) -> Option<ChordShape> {
    let tones = chord.pitch_classes();
    let required = chord.required_pitch_classes();
    let bass = chord.bass_pitch_class();
    let tuning = instrument.tuning();
    let min_sounding = (tuning.len() * 2 + 2) / 3;
    let bass = (!instrument.is_reentrant()).then_some(bass);

    for position in 0..=instrument.max_position() {
        let candidates: Vec<Vec<Option<u8>>> = tuning
            .iter()
            .map(|&open| string_candidates(open, position, instrument.max_span(), &tones))
            .collect();

        let mut best: Option<(Score, Vec<Option<u8>>, Vec<u8>)> = None;
        let mut current = Vec::with_capacity(tuning.len());
        search(&candidates, &mut current, &mut |frets| {
            let Some(fingers) = evaluate(frets, tuning, &required, bass, min_sounding) else {
                return;
            };
            let score = Score::of(frets);
            if best.as_ref().map_or(true, |(s, _, _)| score > *s) {
                best = Some((score, frets.to_vec(), fingers));
            }
        });

        if let Some((_, frets, fingers)) = best {
            log::trace!("voicing for {} on {} found at position {}", chord, instrument, position);
            return Some(ChordShape::from_absolute(&frets, fingers));
        }
    }

    log::debug!("no playable voicing for {} on {}", chord, instrument);
    None
}

/// Frets on one string that sound a chord tone inside the window. Open
/// strings are only used in the first window.
fn string_candidates(open: u8, position: u8, span: u8, tones: &[u8]) -> Vec<Option<u8>> {
    let mut frets = vec![None];
    let (low, high) = if position == 0 { (0, span) } else { (position, position + span) };
    for fret in low..=high {
        if tones.contains(&((open + fret) % 12)) {
            frets.push(Some(fret));
        }
    }
    frets
}

fn search(
    candidates: &[Vec<Option<u8>>],
    current: &mut Vec<Option<u8>>,
    visit: &mut dyn FnMut(&[Option<u8>]),
) {
    let Some((first, rest)) = candidates.split_first() else {
        visit(current);
        return;
    };
    for &fret in first {
        // Muted strings must form a prefix
        if fret.is_none() && current.last().is_some_and(|f| f.is_some()) {
            continue;
        }
        current.push(fret);
        search(rest, current, visit);
        current.pop();
    }
}

/// Check a candidate; returns its fingering when playable
fn evaluate(
    frets: &[Option<u8>],
    tuning: &[u8],
    required: &[u8],
    bass: Option<u8>,
    min_sounding: usize,
) -> Option<Vec<u8>> {
    let notes: Vec<u8> = frets
        .iter()
        .zip(tuning)
        .filter_map(|(fret, open)| fret.map(|f| open + f))
        .collect();

    if notes.len() < min_sounding {
        return None;
    }
    let lowest = notes.iter().min()?;
    if bass.is_some_and(|bass| lowest % 12 != bass) {
        return None;
    }
    if !required.iter().all(|tone| notes.iter().any(|n| n % 12 == *tone)) {
        return None;
    }

    assign_fingers(frets)
}

/// Ranking of playable shapes within one window; higher is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    sounding: usize,
    open: usize,
    /// Negated fret sum, so lower frets rank higher
    reach: i32,
}

impl Score {
    fn of(frets: &[Option<u8>]) -> Self {
        Self {
            sounding: frets.iter().flatten().count(),
            open: frets.iter().filter(|f| **f == Some(0)).count(),
            reach: -frets.iter().flatten().map(|&f| f as i32).sum::<i32>(),
        }
    }
}

/// Assign fingers 1-4 to absolute frets
///
/// Up to four fretted strings get a finger each, lowest fret first. More
/// than four need a barre with the index finger across the lowest fret.
pub fn assign_fingers(frets: &[Option<u8>]) -> Option<Vec<u8>> {
    let mut fingers = vec![0u8; frets.len()];

    let mut fretted: Vec<(usize, u8)> = frets
        .iter()
        .enumerate()
        .filter_map(|(string, fret)| fret.filter(|&f| f > 0).map(|f| (string, f)))
        .collect();
    if fretted.is_empty() {
        return Some(fingers);
    }
    fretted.sort_by_key(|&(string, fret)| (fret, string));

    if fretted.len() <= MAX_FINGERS {
        for (finger, (string, _)) in fretted.iter().enumerate() {
            fingers[*string] = finger as u8 + 1;
        }
        return Some(fingers);
    }

    let barre_fret = fretted[0].1;
    let barre: Vec<usize> = fretted
        .iter()
        .filter(|(_, fret)| *fret == barre_fret)
        .map(|(string, _)| *string)
        .collect();
    if barre.len() < 2 {
        return None;
    }

    // Everything under the barre must be held at or above it
    let (first, last) = (barre[0], barre[barre.len() - 1]);
    if !frets[first..=last].iter().all(|f| f.is_some_and(|f| f >= barre_fret)) {
        return None;
    }

    let others: Vec<&(usize, u8)> = fretted.iter().filter(|(_, fret)| *fret != barre_fret).collect();
    if others.len() + 1 > MAX_FINGERS {
        return None;
    }

    for string in barre {
        fingers[string] = 1;
    }
    for (finger, (string, _)) in others.iter().enumerate() {
        fingers[*string] = finger as u8 + 2;
    }
    Some(fingers)
}

/// Move a shape up by `semitones` frets (wrapped to an octave)
///
/// Open strings become fretted, so fingers are assigned again.
pub fn shift_shape(shape: &ChordShape, semitones: i32) -> ChordShape {
    let shift = semitones.rem_euclid(12) as u8;
    if shift == 0 {
        return shape.clone();
    }

    let mut frets: Vec<Option<u8>> = shape
        .absolute_frets()
        .iter()
        .map(|fret| fret.map(|f| f.saturating_add(shift)))
        .collect();

    // Keep shapes below the twelfth fret when the whole shape allows it
    if frets.iter().flatten().all(|&f| f >= 12) && frets.iter().flatten().next().is_some() {
        frets = frets.iter().map(|fret| fret.map(|f| f - 12)).collect();
    }

    let fingers = assign_fingers(&frets).unwrap_or_else(|| vec![0; frets.len()]);
    ChordShape::from_absolute(&frets, fingers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voicing(name: &str, instrument: Instrument) -> ChordShape {
        find_voicing(&name.parse().unwrap(), instrument).unwrap()
    }

    #[test]
    fn test_bass_is_lowest_note() {
        for name in ["Bb", "F#m", "C/G", "Ebmaj7", "G#dim7", "Dm/F"] {
            let chord: ChordName = name.parse().unwrap();
            let shape = voicing(name, Instrument::Guitar);
            let notes = shape.midi_notes(Instrument::Guitar);
            assert_eq!(notes.iter().min().unwrap() % 12, chord.bass_pitch_class(), "{}", name);
        }
    }

    #[test]
    fn test_required_tones_present() {
        for name in ["C9", "Am7", "Bbsus4", "Faug", "G6"] {
            let chord: ChordName = name.parse().unwrap();
            let shape = voicing(name, Instrument::Guitar);
            let notes = shape.midi_notes(Instrument::Guitar);
            for tone in chord.required_pitch_classes() {
                assert!(notes.iter().any(|n| n % 12 == tone), "{} misses {}", name, tone);
            }
        }
    }

    #[test]
    fn test_f_sharp_minor_barre() {
        let shape = voicing("F#m", Instrument::Guitar);
        assert_eq!(shape.absolute_frets(), vec![Some(2), Some(4), Some(4), Some(2), Some(2), Some(2)]);
        assert_eq!(shape.fingers, vec![1, 2, 3, 1, 1, 1]);
    }

    #[test]
    fn test_ukulele_voicing() {
        // The re-entrant G string cannot sound a Bm tone in first position
        let shape = voicing("Bm", Instrument::Ukulele);
        assert_eq!(shape.frets, vec![None, Some(2), Some(2), Some(2)]);
        assert_eq!(shape.fingers, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_assign_fingers_open_c() {
        let frets = [None, Some(3), Some(2), Some(0), Some(1), Some(0)];
        assert_eq!(assign_fingers(&frets), Some(vec![0, 3, 2, 0, 1, 0]));
    }

    #[test]
    fn test_assign_fingers_barre() {
        let frets = [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)];
        assert_eq!(assign_fingers(&frets), Some(vec![1, 3, 4, 2, 1, 1]));
    }

    #[test]
    fn test_assign_fingers_impossible() {
        // Open string under the would-be barre
        let frets = [Some(1), Some(0), Some(3), Some(2), Some(1), Some(4)];
        assert_eq!(assign_fingers(&frets), None);
    }

    #[test]
    fn test_shift_shape() {
        let shape = ChordShape::from_absolute(&[Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)], vec![0, 2, 3, 1, 0, 0]);
        let shifted = shift_shape(&shape, 5);
        assert_eq!(shifted.base_fret, 5);
        assert_eq!(shifted.absolute_frets(), vec![Some(5), Some(7), Some(7), Some(6), Some(5), Some(5)]);
        assert_eq!(shifted.fingers, vec![1, 3, 4, 2, 1, 1]);

        assert_eq!(shift_shape(&shape, 12), shape);
        assert_eq!(shift_shape(&shape, -7).base_fret, 5);
    }

    #[test]
    fn test_shift_shape_high_frets() {
        let shape = ChordShape { base_fret: 24, frets: vec![Some(250), None], fingers: vec![0, 0] };
        let shifted = shift_shape(&shape, 11);
        assert_eq!(shifted.absolute_frets(), vec![Some(243), None]);
    }
}
