use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::AnnotatedDocument;

/// Convert a zero-based index to a base-26 label: A, B, ..., Z, AA, AB, ..., AZ, BA, ...
/// Similar to Excel column naming.
fn index_to_base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Internal representation of an underlined span.
struct IncludedSpan {
    /// Inclusive token range
    range: (usize, usize),
    label: String,
}

/// Renders a document's tokens with labelled underlines.
///
/// ```text
/// Barrack  Obama  was  born  in  Hawaii  .  He  smiled  .
/// ╰────────────╯PERSON
///                                ╰────╯GPE
///          ╰───╯[A]
///                                           ╰╯[A]
/// ```
pub struct DocumentDisplay<'a> {
    document: &'a AnnotatedDocument,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> fmt::Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.document.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for span in self.include_spans.iter() {
            let (start_char_idx, end_char_idx) = match (
                token_idx_to_start_display_char_idx.get(span.range.0),
                token_idx_to_end_display_char_idx.get(span.range.1),
            ) {
                (Some(&start), Some(&end)) => (start, end),
                _ => continue,
            };

            f.write_char('\n')?;
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx.saturating_sub(start_char_idx);
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&span.label)?;
        }

        Ok(())
    }
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(document: &'a AnnotatedDocument) -> Self {
        DocumentDisplay {
            document,
            include_spans: Vec::new(),
        }
    }

    /// Underline the inclusive token range `start..=end`.
    pub fn include_span(&mut self, start: usize, end: usize, label: impl Into<String>) {
        self.include_spans.push(IncludedSpan {
            range: (start, end),
            label: label.into(),
        });
    }

    /// Underline every entity span with its label.
    pub fn include_entities(&mut self) {
        for entity in self.document.entities() {
            self.include_span(entity.start, entity.end - 1, entity.label.clone());
        }
    }

    /// Underline every mention, labelling chains `[A]`, `[B]`, ...
    ///
    /// Plural mentions are underlined from their first to their last token.
    pub fn include_chains(&mut self) {
        for (chain_idx, chain) in self.document.chains().iter().enumerate() {
            let label = format!("[{}]", index_to_base26_label(chain_idx));
            for mention in chain.mentions() {
                let first = mention.indexes().iter().min();
                let last = mention.indexes().iter().max();
                if let (Some(&first), Some(&last)) = (first, last) {
                    self.include_span(first, last, label.clone());
                }
            }
        }
    }

    /// Takes self
    pub fn with_span(mut self, start: usize, end: usize, label: impl Into<String>) -> Self {
        self.include_span(start, end, label);
        self
    }

    /// Takes self
    pub fn with_entities(mut self) -> Self {
        self.include_entities();
        self
    }

    /// Takes self
    pub fn with_chains(mut self) -> Self {
        self.include_chains();
        self
    }
}
