//! The character scanner.
//!
//! The scanner walks the input one character at a time, dispatching on `<`.
//! Every scanning function is pure over `(input, position)`: it takes the
//! current position and returns the scanned value together with the next
//! position, so a parse holds no hidden mutable state and independent parses
//! are freely reentrant.
//!
//! Scanning never fails. Unterminated tags and comments consume to end of
//! input and are classified from whatever was scanned; out-of-range lookups
//! are absent values treated as "stop scanning".
//!
//! # Known quirks (preserved deliberately)
//!
//! - Self-closing detection is a lookbehind on the character immediately
//!   before the closing `>`, so `<a href=x/>` scans as self-closing even
//!   though the `/` belongs to the attribute value.
//! - The comment scan's bounds check (`position + 2 < length`) stops before
//!   a full three-character lookahead would run past the input, so the final
//!   one or two characters of an *unterminated* comment are never
//!   accumulated into its content.

use super::token::Token;

/// Characters the whitespace skip consumes between tokens.
const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Characters that terminate a tag name.
const fn is_tag_name_terminator(c: char) -> bool {
    matches!(c, '>' | '<' | '/' | ' ' | '\t' | '\n' | '\r')
}

/// Single-pass scanner over a fixed input.
///
/// The input is materialized as a sequence of `char`s so that fixed offsets
/// (`position + 1`, `position + 2`, the classification lookbehind at
/// `position - 2`) are all measured in one consistent addressing unit.
pub struct HTMLTokenizer {
    input: Vec<char>,
    /// Cached total length of `input`.
    len: usize,
    tokens: Vec<Token>,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let len = input.len();
        Self {
            input,
            len,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input, accumulating tokens.
    ///
    /// The loop is finite: every branch strictly advances the position.
    pub fn run(&mut self) {
        let mut position = 0;
        while position < self.len {
            position = self.skip_whitespace(position);
            if position >= self.len {
                break;
            }
            if self.peek(position) == Some('<') {
                let (token, next) = if self.at_comment_open(position) {
                    self.scan_comment(position)
                } else {
                    self.scan_tag(position)
                };
                self.tokens.push(token);
                position = next;
            } else {
                let (data, next) = self.scan_text(position);
                // Empty runs are dropped, not emitted.
                if !data.is_empty() {
                    self.tokens.push(Token::Text { data });
                }
                position = next;
            }
        }
    }

    /// Consume the tokenizer and return the accumulated tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The tokens accumulated so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look at the character at `position` without consuming it.
    ///
    /// Out of range is an absent value, never an error.
    fn peek(&self, position: usize) -> Option<char> {
        self.input.get(position).copied()
    }

    fn skip_whitespace(&self, mut position: usize) -> usize {
        while let Some(c) = self.peek(position) {
            if !is_whitespace_char(c) {
                break;
            }
            position += 1;
        }
        position
    }

    /// Whether `position` (at a `<`) opens a comment.
    ///
    /// Direct positional lookahead for `!--`, not a generic prefix match.
    fn at_comment_open(&self, position: usize) -> bool {
        self.peek(position + 1) == Some('!')
            && self.peek(position + 2) == Some('-')
            && self.peek(position + 3) == Some('-')
    }

    /// Scan a comment starting at the `<` of `<!--`.
    ///
    /// Accumulates characters until the three-character lookahead `-->`
    /// matches, then steps past it. If the input ends first the partial
    /// comment is emitted with whatever content was accumulated; the bounds
    /// check means the last one or two characters of the input never make it
    /// into that content.
    fn scan_comment(&self, position: usize) -> (Token, usize) {
        // Step past `<!--`.
        let mut position = position + 4;
        let mut data = String::new();
        while position + 2 < self.len {
            if self.peek(position) == Some('-')
                && self.peek(position + 1) == Some('-')
                && self.peek(position + 2) == Some('>')
            {
                return (Token::Comment { data }, position + 3);
            }
            if let Some(c) = self.peek(position) {
                data.push(c);
            }
            position += 1;
        }
        // Unterminated: scanning stops at end of input.
        (Token::Comment { data }, self.len)
    }

    /// Scan a tag starting at its `<`.
    ///
    /// Reads the tag name, then advances through any remaining characters
    /// (attribute text, which is discarded) up to and including the
    /// terminating `>`. Classification inspects the single character two
    /// positions before the final scan position: `/` there makes the token
    /// self-closing regardless of a leading `</`; otherwise a leading `</`
    /// makes it an end tag.
    fn scan_tag(&self, position: usize) -> (Token, usize) {
        // Step past `<`.
        let mut position = position + 1;
        let mut is_end_tag = false;
        if self.peek(position) == Some('/') {
            is_end_tag = true;
            position += 1;
        }

        let mut name = String::new();
        while let Some(c) = self.peek(position) {
            if is_tag_name_terminator(c) {
                break;
            }
            name.push(c);
            position += 1;
        }

        // Skip attribute text through the terminating `>` (or end of input).
        while let Some(c) = self.peek(position) {
            position += 1;
            if c == '>' {
                break;
            }
        }

        // Lookbehind guarded so it never reads before the start of input.
        if position > 1 && self.peek(position - 2) == Some('/') {
            (Token::SelfClosingTag { name }, position)
        } else if is_end_tag {
            (Token::EndTag { name }, position)
        } else {
            (Token::StartTag { name }, position)
        }
    }

    /// Scan a text run: everything up to the next `<` or end of input.
    fn scan_text(&self, mut position: usize) -> (String, usize) {
        let mut data = String::new();
        while let Some(c) = self.peek(position) {
            if c == '<' {
                break;
            }
            data.push(c);
            position += 1;
        }
        (data, position)
    }
}

/// Tokenize raw HTML text into a materialized token sequence.
///
/// Total over any input: malformed markup never fails, it degrades (see the
/// module docs for the exact recovery behavior).
#[must_use]
pub fn tokenize(html: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(html);
    tokenizer.run();
    tokenizer.into_tokens()
}
