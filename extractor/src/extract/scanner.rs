//! Left-to-right scanner over field occurrences.

use super::parser::field_occurrence;
use crate::config::FieldPattern;
use crate::models::FieldOccurrence;

/// Iterator over the non-overlapping field occurrences in a string.
///
/// Created by [`Extractor::occurrences`](super::Extractor::occurrences).
/// After a match, scanning resumes right after its value span; after a failed
/// attempt it resumes at the next candidate label start.
#[derive(Debug, Clone)]
pub struct Occurrences<'p, 'a> {
    pattern: &'p FieldPattern,
    input: &'a str,
    pos: usize,
}

impl<'p, 'a> Occurrences<'p, 'a> {
    pub(crate) fn new(pattern: &'p FieldPattern, input: &'a str) -> Self {
        Self {
            pattern,
            input,
            pos: 0,
        }
    }

    // Byte offset of the next position at or after `from` whose character can
    // start the label.
    fn next_candidate(&self, from: usize) -> Option<usize> {
        let first = self.pattern.label().chars().next()?;
        self.input[from..]
            .char_indices()
            .find(|(_, c)| c.eq_ignore_ascii_case(&first))
            .map(|(offset, _)| from + offset)
    }
}

impl<'a> Iterator for Occurrences<'_, 'a> {
    type Item = FieldOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(start) = self.next_candidate(self.pos) {
            let rest = &self.input[start..];
            match field_occurrence(self.pattern, rest) {
                Ok((remaining, value)) => {
                    let end = self.input.len() - remaining.len();
                    self.pos = end;
                    return Some(FieldOccurrence { start, end, value });
                }
                Err(_) => {
                    // Step over the candidate character.
                    self.pos = start + rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        self.pos = self.input.len();
        None
    }
}

impl std::iter::FusedIterator for Occurrences<'_, '_> {}
