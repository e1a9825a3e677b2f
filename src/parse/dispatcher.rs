//! Per-line routing
//!
//! Priority, by first non-blank character:
//!   `{`          directive
//!   `|`          tab (`|-` or inside a tab section), otherwise grid
//!   (blank)      spacer line, only once the section has content
//!   `#`          remark, ignored
//!   anything     by section type: tab, strum, or lyrics

use super::directive::process_directive;
use super::lines::{process_grid, process_lyrics, process_strum, process_tab};
use super::state::ParseState;
use crate::models::{Environment, Part};

/// Fold one line into the parse state
pub fn process_line(mut state: ParseState, line: &str) -> ParseState {
    let trimmed = line.trim_start();

    match trimmed.chars().next() {
        Some('{') => process_directive(&mut state, line),
        Some('|') => {
            if trimmed.starts_with("|-") || state.section.environment == Environment::Tab {
                process_tab(&mut state, line);
            } else {
                process_grid(&mut state, line);
            }
        }
        None => process_blank(&mut state),
        Some('#') => log::trace!("skipping remark '{}'", trimmed),
        Some(_) => match state.section.environment {
            Environment::Tab => process_tab(&mut state, line),
            Environment::Strum => process_strum(&mut state, line),
            _ => process_lyrics(&mut state, line),
        },
    }

    state
}

/// A blank line inside a section becomes a line holding a single space
fn process_blank(state: &mut ParseState) {
    if state.section.lines.is_empty() {
        return;
    }
    let mut line = state.new_line();
    line.parts.push(Part {
        id: 1,
        chord: None,
        text: " ".to_string(),
    });
    state.push_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseOptions;

    fn feed(lines: &[&str]) -> ParseState {
        lines
            .iter()
            .fold(ParseState::new(&ParseOptions::default()), |state, line| process_line(state, line))
    }

    #[test]
    fn test_leading_blank_lines_ignored() {
        let state = feed(&["", "   ", "\t"]);
        assert!(state.section.lines.is_empty());
    }

    #[test]
    fn test_blank_after_content() {
        let state = feed(&["Hello", ""]);
        assert_eq!(state.section.lines.len(), 2);
        assert_eq!(state.section.lines[1].parts[0].text, " ");
        assert_eq!(state.section.lines[1].id, 2);
    }

    #[test]
    fn test_remarks_skipped() {
        let state = feed(&["# a remark", "  #another"]);
        assert!(state.section.lines.is_empty());
    }

    #[test]
    fn test_bar_routing() {
        let state = feed(&["|-0-2-|"]);
        assert_eq!(state.section.environment, Environment::Tab);

        let state = feed(&["| [C] . |"]);
        assert_eq!(state.section.environment, Environment::Grid);
    }

    #[test]
    fn test_tab_section_keeps_plain_lines() {
        let state = feed(&["{sot}", "e|---0---|", "B|---1---|", "G ---0---"]);
        assert_eq!(state.section.lines.len(), 3);
        assert!(state.section.lines.iter().all(|line| line.tab.is_some()));
    }

    #[test]
    fn test_strum_section() {
        let state = feed(&["{sos}", "d u"]);
        assert!(state.section.lines[0].strum.is_some());
    }
}
