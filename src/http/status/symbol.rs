use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::Chars;

/// Read-only character view over a status symbol such as `NOT_FOUND`.
///
/// Indices count characters, not bytes. Symbols are plain ASCII identifiers so the
/// two agree, but the view does not rely on it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SymbolText {
    text: &'static str,
}

impl SymbolText {
    pub(crate) fn new(text: &'static str) -> Self {
        Self { text }
    }
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
    /// The character at `index`, `None` when out of range.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }
    /// The characters in `range`, `None` when the range is reversed or runs past
    /// the end.
    pub fn sub_sequence(&self, range: Range<usize>) -> Option<&'static str> {
        if range.start > range.end {
            return None;
        }
        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;
        let text = self.text;
        Some(&text[start..end])
    }
    pub fn chars(&self) -> Chars<'static> {
        self.text.chars()
    }
    pub fn as_str(&self) -> &'static str {
        self.text
    }

    fn byte_offset(&self, index: usize) -> Option<usize> {
        self.text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.text.len()))
            .nth(index)
    }
}

impl Display for SymbolText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

impl AsRef<str> for SymbolText {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for SymbolText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for SymbolText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
