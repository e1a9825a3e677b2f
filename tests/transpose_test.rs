// Song-wide transposition applied while parsing

use chordpro_wasm::models::{ChordStatus, Instrument, Root};
use chordpro_wasm::{parse, ParseOptions};

fn transposed(semitones: i32) -> ParseOptions {
    ParseOptions::new(semitones, Instrument::Guitar)
}

#[test]
fn test_key_reflects_transpose() {
    let song = parse("{key: G}\n[G]la", &transposed(2));
    let key = song.key.unwrap();
    assert_eq!(key.root, Some(Root::A));
    assert_eq!(key.name, "A");
}

#[test]
fn test_chord_keeps_written_name() {
    let song = parse("{key: G}\n[G]la [D7]la", &transposed(2));
    let g = &song.chords[0];
    assert_eq!(g.name, "G");
    assert_eq!(g.root, Some(Root::A));
    assert_eq!(g.status, ChordStatus::Transposed);

    let d7 = &song.chords[1];
    assert_eq!(d7.name, "D7");
    assert_eq!(d7.root, Some(Root::E));
}

#[test]
fn test_transposed_shape_is_target_chord() {
    let plain = parse("[A]la", &transposed(0));
    let moved = parse("[G]la", &transposed(2));
    assert_eq!(moved.chords[0].shape, plain.chords[0].shape);
}

#[test]
fn test_flat_key_spelling() {
    let song = parse("{key: F}\n[A]la", &transposed(1));
    assert_eq!(song.key.as_ref().map(|key| key.name.as_str()), Some("Gb"));
    assert_eq!(song.chords[0].root, Some(Root::Bb));
}

#[test]
fn test_sharp_spelling_without_key() {
    let song = parse("[A]la", &transposed(1));
    assert_eq!(song.chords[0].root, Some(Root::As));
    // The key defaults to the first chord, as written
    assert_eq!(song.key.map(|key| key.name), Some("A".to_string()));
}

#[test]
fn test_defined_chord_keeps_name() {
    let song = parse("{define: X frets x 0 2 2 1 0}\n[X]la", &transposed(2));
    assert_eq!(song.chords.len(), 1);
    let x = &song.chords[0];
    assert_eq!(x.name, "X");
    assert_eq!(x.status, ChordStatus::CustomTransposed);
}

#[test]
fn test_defined_chord_shape_moves() {
    let song = parse("{define: Am frets x 0 2 2 1 0}", &transposed(2));
    let am = &song.chords[0];
    assert_eq!(am.name, "Am");
    assert_eq!(am.root, Some(Root::B));
    assert_eq!(
        am.shape.absolute_frets(),
        vec![None, Some(2), Some(4), Some(4), Some(3), Some(2)]
    );
}

#[test]
fn test_unknown_chords_not_transposed() {
    let song = parse("[N.C.]la", &transposed(5));
    assert_eq!(song.chords[0].status, ChordStatus::Unknown);
    assert_eq!(song.chords[0].name, "N.C.");
}

#[test]
fn test_negative_and_large_offsets() {
    let down = parse("[C]la", &transposed(-1));
    assert_eq!(down.chords[0].root, Some(Root::B));

    let around = parse("[C]la", &transposed(14));
    assert_eq!(around.chords[0].root, Some(Root::D));
}

#[test]
fn test_extreme_transpose_wraps() {
    // i32::MAX is a fifth up, i32::MIN a major third up
    let song = parse("[D]la", &transposed(i32::MAX));
    assert_eq!(song.chords[0].root, Some(Root::A));
    assert_eq!(song.chords[0].shape, parse("[A]la", &transposed(0)).chords[0].shape);

    let song = parse("[D]la", &transposed(i32::MIN));
    assert_eq!(song.chords[0].root, Some(Root::Fs));
    assert_eq!(song.key.unwrap().root, Some(Root::Fs));
}

#[test]
fn test_out_of_range_define_is_ignored() {
    let song = parse("{define: X base-fret 200 frets 100 100 100 100 100 100}\n[X]la", &transposed(1));
    assert_eq!(song.chords[0].status, ChordStatus::Unknown);
    assert_eq!(song.chords[0].shape.frets, vec![None; 6]);

    let song = parse("{define: X frets 250 250 250 250 250 250}\n[X]la", &transposed(11));
    assert_eq!(song.chords[0].shape.frets, vec![None; 6]);
}

#[test]
fn test_high_custom_chord_transposes() {
    let song = parse("{define: X base-fret 24 frets 24 24 24 24 24 24}\n[X]la", &transposed(11));
    let chord = &song.chords[0];
    assert_eq!(chord.status, ChordStatus::CustomTransposed);
    assert_eq!(chord.shape.absolute_frets(), vec![Some(46); 6]);
}
