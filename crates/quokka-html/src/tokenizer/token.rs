use core::fmt;

use strum_macros::Display;

/// One lexical unit produced by scanning raw HTML text.
///
/// The tokenizer emits tokens in input order; the tree builder consumes them
/// left to right exactly once. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag such as `<div>`. The name excludes the delimiters and
    /// any attribute text (attributes are scanned and discarded).
    StartTag {
        /// The tag name, verbatim and case-preserved.
        name: String,
    },

    /// A closing tag such as `</div>`.
    EndTag {
        /// The tag name, verbatim and case-preserved.
        name: String,
    },

    /// A tag terminated by `/>`, such as `<br/>`.
    ///
    /// Detection is a positional lookbehind on the character immediately
    /// before the closing `>`, not a parse of attribute syntax, so an
    /// unquoted attribute value ending in `/` (e.g. `<a href=x/>`) is also
    /// classified as self-closing.
    SelfClosingTag {
        /// The tag name, verbatim and case-preserved.
        name: String,
    },

    /// A run of characters outside any tag. Never empty when emitted.
    Text {
        /// The run's characters, including interior and trailing whitespace.
        data: String,
    },

    /// Text strictly between `<!--` and `-->`, delimiters excluded.
    Comment {
        /// The comment body, preserved verbatim.
        data: String,
    },
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    /// An opening tag.
    StartTag,
    /// A closing tag.
    EndTag,
    /// A tag terminated by `/>`.
    SelfClosingTag,
    /// A text run.
    Text,
    /// A comment.
    Comment,
}

impl Token {
    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::StartTag { .. } => TokenKind::StartTag,
            Self::EndTag { .. } => TokenKind::EndTag,
            Self::SelfClosingTag { .. } => TokenKind::SelfClosingTag,
            Self::Text { .. } => TokenKind::Text,
            Self::Comment { .. } => TokenKind::Comment,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name } => write!(f, "<{name}>"),
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::SelfClosingTag { name } => write!(f, "<{name}/>"),
            Self::Text { data } => {
                // Show whitespace explicitly
                let display = data.replace('\n', "\\n").replace('\t', "\\t");
                write!(f, "\"{display}\"")
            }
            Self::Comment { data } => write!(f, "<!--{data}-->"),
        }
    }
}
