//! Key-signature spelling rules for transposed chords
//!
//! A transposed root is spelled in the accidental of the key it is heard
//! in: flats in F, Bb, Eb, Ab, Db and Gb, sharps everywhere else. D#, G#
//! and A# are heard as their flat keys; F# and C# keep their sharps.
//!
//! Example:
//!   A + 1 in key of F  → Bb
//!   A + 1 in key of D  → A#

use crate::models::Root;

/// Major keys whose signature carries flats, by pitch class
const FLAT_KEYS: [u8; 6] = [5, 10, 3, 8, 1, 6];

/// Should roots transposed against this scale be spelled with flats?
pub fn prefers_flats(scale: Root) -> bool {
    match scale {
        // F# and C# are sharp keys even though their pitch classes are
        // shared with Gb and Db
        Root::Fs | Root::Cs => false,
        _ => FLAT_KEYS.contains(&scale.pitch_class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_keys() {
        for root in [Root::F, Root::Bb, Root::Eb, Root::Ab, Root::Db, Root::Gb] {
            assert!(prefers_flats(root), "{}", root);
        }
    }

    #[test]
    fn test_sharp_keys() {
        for root in [Root::C, Root::G, Root::D, Root::A, Root::E, Root::B, Root::Fs, Root::Cs] {
            assert!(!prefers_flats(root), "{}", root);
        }
    }

    #[test]
    fn test_rare_sharp_keys_read_as_flat() {
        assert!(prefers_flats(Root::As));
        assert!(prefers_flats(Root::Gs));
        assert!(prefers_flats(Root::Ds));
    }
}
