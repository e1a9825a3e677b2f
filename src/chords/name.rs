//! Chord name parsing: `root quality [/bass]`

use std::fmt;
use std::str::FromStr;

use super::errors::ChordError;
use crate::models::{Quality, Root};

/// A parsed chord name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordName {
    pub root: Root,
    pub quality: Quality,
    /// The quality as written (`"min"`, `"-7"`, ...)
    pub suffix: String,
    pub bass: Option<Root>,
}

impl ChordName {
    /// Rebuild the name in canonical quality spelling (`Amin` → `Am`)
    pub fn canonical(&self) -> String {
        Self::compose(self.root, self.quality.suffix(), self.bass)
    }

    pub fn compose(root: Root, suffix: &str, bass: Option<Root>) -> String {
        match bass {
            Some(bass) => format!("{}{}/{}", root, suffix, bass),
            None => format!("{}{}", root, suffix),
        }
    }

    /// Pitch classes of the chord tones, root first, bass last when it is
    /// not already a chord tone
    pub fn pitch_classes(&self) -> Vec<u8> {
        let root = self.root.pitch_class();
        let mut tones: Vec<u8> = self
            .quality
            .intervals()
            .iter()
            .map(|interval| (root + interval) % 12)
            .collect();
        if let Some(bass) = self.bass {
            if !tones.contains(&bass.pitch_class()) {
                tones.push(bass.pitch_class());
            }
        }
        tones
    }

    /// Pitch classes every voicing must contain
    pub fn required_pitch_classes(&self) -> Vec<u8> {
        let root = self.root.pitch_class();
        let mut tones: Vec<u8> = self
            .quality
            .required_intervals()
            .iter()
            .map(|interval| (root + interval) % 12)
            .collect();
        if let Some(bass) = self.bass {
            if !tones.contains(&bass.pitch_class()) {
                tones.push(bass.pitch_class());
            }
        }
        tones
    }

    /// Pitch class that must sound lowest
    pub fn bass_pitch_class(&self) -> u8 {
        self.bass.unwrap_or(self.root).pitch_class()
    }
}

impl fmt::Display for ChordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::compose(self.root, &self.suffix, self.bass))
    }
}

impl FromStr for ChordName {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChordError::Empty);
        }

        // Split off the slash bass first: "C/G", "Am7/E"
        let (body, bass) = match s.rsplit_once('/') {
            Some((body, bass)) => {
                let bass = bass
                    .parse::<Root>()
                    .map_err(|_| ChordError::InvalidBass(bass.to_string()))?;
                (body, Some(bass))
            }
            None => (s, None),
        };

        let (root, suffix) =
            Root::split_prefix(body).ok_or_else(|| ChordError::InvalidRoot(s.to_string()))?;
        let quality =
            Quality::from_suffix(suffix).ok_or_else(|| ChordError::UnknownQuality(suffix.to_string()))?;

        Ok(ChordName {
            root,
            quality,
            suffix: suffix.to_string(),
            bass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let name: ChordName = "Am".parse().unwrap();
        assert_eq!(name.root, Root::A);
        assert_eq!(name.quality, Quality::Minor);
        assert_eq!(name.bass, None);
    }

    #[test]
    fn test_parse_slash_chord() {
        let name: ChordName = "Gmaj7/F#".parse().unwrap();
        assert_eq!(name.root, Root::G);
        assert_eq!(name.quality, Quality::MajorSeventh);
        assert_eq!(name.bass, Some(Root::Fs));
        assert_eq!(name.to_string(), "Gmaj7/F#");
    }

    #[test]
    fn test_canonical_spelling() {
        let name: ChordName = "Amin".parse().unwrap();
        assert_eq!(name.to_string(), "Amin");
        assert_eq!(name.canonical(), "Am");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ChordName>(), Err(ChordError::Empty));
        assert!(matches!("N.C.".parse::<ChordName>(), Err(ChordError::InvalidRoot(_))));
        assert!(matches!("Cxyz".parse::<ChordName>(), Err(ChordError::UnknownQuality(_))));
        assert!(matches!("C/Q".parse::<ChordName>(), Err(ChordError::InvalidBass(_))));
    }

    #[test]
    fn test_pitch_classes() {
        let name: ChordName = "C/G".parse().unwrap();
        assert_eq!(name.pitch_classes(), vec![0, 4, 7]);
        assert_eq!(name.bass_pitch_class(), 7);

        let name: ChordName = "D/F#".parse().unwrap();
        assert_eq!(name.bass_pitch_class(), 6);

        let name: ChordName = "Am/G".parse().unwrap();
        assert_eq!(name.pitch_classes(), vec![9, 0, 4, 7]);
    }
}
