//! Directive lines: `{keyword}` and `{keyword: label}`
//!
//! Keywords map through a fixed alias table onto a closed set of
//! directives. Anything that does not match the directive shape, or names
//! an unknown keyword, is dropped without touching the song.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::state::ParseState;
use crate::models::{ChordDefinition, Environment};

static DIRECTIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{\s*([A-Za-z_-]+)\s*(?:[\s:]\s*(.*?))?\s*\}$").expect("directive pattern is valid")
});

/// Song metadata fields a directive can set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Title,
    Artist,
    Capo,
    Time,
    Tempo,
    Year,
    Album,
    MusicPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Meta(MetaField),
    Key,
    Comment,
    /// Open a section of this environment
    StartOf(Environment),
    /// Repeat-chorus marker
    Chorus,
    /// Close the section of this environment
    EndOf(Environment),
    Define,
    Tag,
}

/// Every accepted spelling, in normalised form (lowercase, `_` separators)
const ALIASES: &[(&str, Directive)] = &[
    ("t", Directive::Meta(MetaField::Title)),
    ("title", Directive::Meta(MetaField::Title)),
    ("st", Directive::Meta(MetaField::Artist)),
    ("subtitle", Directive::Meta(MetaField::Artist)),
    ("artist", Directive::Meta(MetaField::Artist)),
    ("capo", Directive::Meta(MetaField::Capo)),
    ("time", Directive::Meta(MetaField::Time)),
    ("tempo", Directive::Meta(MetaField::Tempo)),
    ("year", Directive::Meta(MetaField::Year)),
    ("album", Directive::Meta(MetaField::Album)),
    ("musicpath", Directive::Meta(MetaField::MusicPath)),
    ("music_path", Directive::Meta(MetaField::MusicPath)),
    ("key", Directive::Key),
    ("c", Directive::Comment),
    ("comment", Directive::Comment),
    ("soc", Directive::StartOf(Environment::Chorus)),
    ("start_of_chorus", Directive::StartOf(Environment::Chorus)),
    ("sov", Directive::StartOf(Environment::Verse)),
    ("start_of_verse", Directive::StartOf(Environment::Verse)),
    ("sob", Directive::StartOf(Environment::Bridge)),
    ("start_of_bridge", Directive::StartOf(Environment::Bridge)),
    ("sot", Directive::StartOf(Environment::Tab)),
    ("start_of_tab", Directive::StartOf(Environment::Tab)),
    ("sog", Directive::StartOf(Environment::Grid)),
    ("start_of_grid", Directive::StartOf(Environment::Grid)),
    ("sos", Directive::StartOf(Environment::Strum)),
    ("start_of_strum", Directive::StartOf(Environment::Strum)),
    ("chorus", Directive::Chorus),
    ("eoc", Directive::EndOf(Environment::Chorus)),
    ("end_of_chorus", Directive::EndOf(Environment::Chorus)),
    ("eov", Directive::EndOf(Environment::Verse)),
    ("end_of_verse", Directive::EndOf(Environment::Verse)),
    ("eob", Directive::EndOf(Environment::Bridge)),
    ("end_of_bridge", Directive::EndOf(Environment::Bridge)),
    ("eot", Directive::EndOf(Environment::Tab)),
    ("end_of_tab", Directive::EndOf(Environment::Tab)),
    ("eog", Directive::EndOf(Environment::Grid)),
    ("end_of_grid", Directive::EndOf(Environment::Grid)),
    ("eos", Directive::EndOf(Environment::Strum)),
    ("end_of_strum", Directive::EndOf(Environment::Strum)),
    ("define", Directive::Define),
    ("tag", Directive::Tag),
];

impl FromStr for Directive {
    type Err = String;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        let normalised = keyword.trim().to_lowercase().replace('-', "_");
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalised)
            .map(|(_, directive)| *directive)
            .ok_or_else(|| format!("Unknown directive: {}", keyword))
    }
}

/// Split a directive line into its directive and label
///
/// Returns `None` for lines that are not shaped like a directive or use an
/// unknown keyword. An empty label is reported as absent.
pub fn match_directive(line: &str) -> Option<(Directive, Option<String>)> {
    let captures = DIRECTIVE_REGEX.captures(line.trim())?;
    let keyword = captures.get(1)?.as_str();
    let directive = match keyword.parse::<Directive>() {
        Ok(directive) => directive,
        Err(err) => {
            log::debug!("{}", err);
            return None;
        }
    };
    let label = captures
        .get(2)
        .map(|label| label.as_str().trim().to_string())
        .filter(|label| !label.is_empty());
    Some((directive, label))
}

/// Apply a directive line to the parse state
pub fn process_directive(state: &mut ParseState, line: &str) {
    let Some((directive, label)) = match_directive(line) else {
        log::debug!("dropping directive line '{}'", line.trim());
        return;
    };
    log::trace!("directive {:?} label {:?}", directive, label);

    match directive {
        Directive::Meta(field) => {
            if let Some(value) = label {
                set_meta(state, field, value);
            }
        }
        Directive::Key => {
            if let Some(name) = label {
                set_key(state, &name);
            }
        }
        Directive::Comment => {
            if let Some(text) = label {
                add_comment(state, text);
            }
        }
        Directive::StartOf(environment) => {
            let label = label.unwrap_or_else(|| environment.default_label().to_string());
            state.open_section(&label, environment);
        }
        Directive::Chorus => {
            let environment = Environment::RepeatChorus;
            let label = label.unwrap_or_else(|| environment.default_label().to_string());
            state.open_section(&label, environment);
            state.close_section();
        }
        Directive::EndOf(_) => {
            state.open_section("", Environment::None);
        }
        Directive::Define => {
            if let Some(text) = label {
                state.define_chord(&text);
            }
        }
        Directive::Tag => {
            if let Some(tag) = label {
                state.song.tags.push(tag);
            }
        }
    }
}

fn set_meta(state: &mut ParseState, field: MetaField, value: String) {
    let song = &mut state.song;
    let slot = match field {
        MetaField::Title => &mut song.title,
        MetaField::Artist => &mut song.artist,
        MetaField::Capo => &mut song.capo,
        MetaField::Time => &mut song.time,
        MetaField::Tempo => &mut song.tempo,
        MetaField::Year => &mut song.year,
        MetaField::Album => &mut song.album,
        MetaField::MusicPath => &mut song.music_path,
    };
    *slot = Some(value);
}

/// The key is a chord in its own right, moved by the song transpose and
/// spelled against its own root
fn set_key(state: &mut ParseState, name: &str) {
    let instrument = state.song.instrument;
    let Some(mut key) = ChordDefinition::from_name(name, instrument) else {
        log::debug!("ignoring unknown key '{}'", name);
        return;
    };
    let transpose = state.song.transpose;
    if transpose != 0 {
        if let Some(root) = key.root {
            key.transpose(transpose, root);
        }
    }
    state.song.key = Some(key);
}

/// A comment outside any section gets a one-line Comment section of its
/// own; inside a section it becomes an inline comment line
fn add_comment(state: &mut ParseState, text: String) {
    if state.section.environment == Environment::None {
        let environment = Environment::Comment;
        state.open_section(environment.default_label(), environment);
        let mut line = state.new_line();
        line.comment = Some(text);
        state.push_line(line);
        state.close_section();
    } else {
        let mut line = state.new_line();
        line.comment = Some(text);
        state.push_line(line);
    }
}
