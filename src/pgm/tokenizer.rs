//! Header tokenizer: whitespace-delimited tokens with `#` comments.

use alloc::vec::Vec;

/// Character introducing a comment that runs to the end of the line.
const COMMENT: u8 = b'#';

/// Header whitespace: `\t \n \x0B \x0C \r`, the ASCII separators
/// `0x1C..=0x1F`, and space.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, 0x09..=0x0D | 0x1C..=0x1F | b' ')
}

/// Pulls header tokens out of a byte buffer.
///
/// The token buffer is reused between calls. After the last token is read,
/// [`Tokenizer::position`] is the offset just past the single whitespace
/// byte that terminated it, which is where a P5 raster begins.
pub(crate) struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
    token: Vec<u8>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            token: Vec::new(),
        }
    }

    /// Offset of the next unread byte.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Read the next token. Returns an empty slice at end of input.
    ///
    /// A comment never terminates a token, so `25#x\n5` yields `255`.
    pub(crate) fn next_token(&mut self) -> &[u8] {
        self.token.clear();
        while let Some(&b) = self.data.get(self.pos) {
            self.pos += 1;
            if b == COMMENT {
                self.skip_comment();
            } else if !is_whitespace(b) {
                self.token.push(b);
            } else if !self.token.is_empty() {
                break;
            }
        }
        &self.token
    }

    /// Discard through the next `\n` or `\r`, or to end of input.
    fn skip_comment(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            self.pos += 1;
            if b == b'\n' || b == b'\r' {
                break;
            }
        }
    }
}
