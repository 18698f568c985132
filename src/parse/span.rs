use std::iter::Enumerate;
use std::ops::Range;
use std::str::CharIndices;

use serde::Serialize;

/// Where a token sits in its source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    /// Byte range in the line (exclusive end), for slicing the `&str`
    pub bytes: Range<usize>,
    /// Index of the token's first character, counted in chars
    pub char_start: usize,
}

impl TokenSpan {
    pub fn new(bytes: Range<usize>, char_start: usize) -> Self {
        TokenSpan { bytes, char_start }
    }

    pub fn start(&self) -> usize {
        self.bytes.start
    }

    pub fn end(&self) -> usize {
        self.bytes.end
    }
}

/// Maximal runs of non-whitespace in `line`, left to right, with positions
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens {
        src: line,
        chars: line.char_indices().enumerate(),
    }
}

pub struct Tokens<'a> {
    src: &'a str,
    chars: Enumerate<CharIndices<'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (TokenSpan, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (char_start, byte_start) = loop {
            let (ci, (bi, c)) = self.chars.next()?;
            if !c.is_whitespace() {
                break (ci, bi);
            }
        };

        let mut byte_end = self.src.len();
        for (_, (bi, c)) in self.chars.by_ref() {
            if c.is_whitespace() {
                byte_end = bi;
                break;
            }
        }

        Some((
            TokenSpan::new(byte_start..byte_end, char_start),
            &self.src[byte_start..byte_end],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<(Range<usize>, usize, &str)> {
        tokens(line)
            .map(|(span, tok)| (span.bytes, span.char_start, tok))
            .collect()
    }

    #[test]
    fn test_tokens_simple() {
        assert_eq!(
            collect("buy  milk\tnow"),
            vec![(0..3, 0, "buy"), (5..9, 5, "milk"), (10..13, 10, "now")]
        );
    }

    #[test]
    fn test_tokens_leading_and_trailing_whitespace() {
        assert_eq!(collect("  a "), vec![(2..3, 2, "a")]);
        assert!(collect("").is_empty());
        assert!(collect("   ").is_empty());
    }

    #[test]
    fn test_tokens_multibyte_offsets() {
        // "é" is two bytes, one char
        let spans = collect("é +Work");
        assert_eq!(spans[1], (3..8, 2, "+Work"));
    }
}
