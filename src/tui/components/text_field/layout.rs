//! Pure text layout helpers for the TextField.
//!
//! Text is word-wrapped by display width: every logical line (split on `\n`)
//! becomes one or more visual rows, with words longer than the width broken. Rows are byte ranges into the buffer, so
//! rendering and cursor placement always agree on where characters land.

use textwrap::core::{Word, break_words};
use textwrap::wrap_algorithms::wrap_first_fit;
use unicode_width::UnicodeWidthChar;

/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders consumed horizontally
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// One visual row: `buffer[start..end]`, never containing `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
}

/// Content width inside the borders. Never 0, so wrapping always terminates.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Build textwrap options configured for the field's inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Split `text` into visual rows no wider than `width` columns.
///
/// Each logical line is word-wrapped with textwrap's first-fit algorithm.
/// The words it yields are contiguous slices of the line (trailing spaces
/// included), so summing their lengths recovers exact byte ranges. A row may
/// end in spaces that overhang the width; the renderer clips them.
pub(super) fn rows(text: &str, width: u16) -> Vec<Row> {
    let options = wrap_options(width);
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let words: Vec<Word> = options.word_separator.find_words(line).collect();
        let words = break_words(words, options.width);
        let mut row_start = line_start;

        if words.is_empty() {
            rows.push(Row {
                start: row_start,
                end: row_start,
            });
        }
        for row_words in wrap_first_fit(&words, &[options.width as f64]) {
            let len: usize = row_words
                .iter()
                .map(|w| w.word.len() + w.whitespace.len())
                .sum();
            rows.push(Row {
                start: row_start,
                end: row_start + len,
            });
            row_start += len;
        }
        line_start += line.len() + 1;
    }

    rows
}

/// Visual (row, column) of byte offset `pos`.
///
/// When `pos` sits exactly on a soft wrap it belongs to the following row.
pub(super) fn locate(text: &str, rows: &[Row], pos: usize) -> (usize, u16) {
    let row_idx = rows
        .iter()
        .rposition(|r| r.start <= pos)
        .unwrap_or(0);
    let row = rows[row_idx];
    let col: usize = text[row.start..pos.min(row.end)]
        .chars()
        .map(char_width)
        .sum();
    (row_idx, col as u16)
}

/// Byte offset in `row` closest to (but not right of) column `col`.
pub(super) fn offset_at_column(text: &str, row: Row, col: u16) -> usize {
    let mut width = 0usize;
    for (offset, c) in text[row.start..row.end].char_indices() {
        let w = char_width(c);
        if width + w > col as usize {
            return row.start + offset;
        }
        width += w;
    }
    row.end
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
