//! HTML tokenizer and tree builder for the Quokka parser.
//!
//! # Scope
//!
//! This crate implements a deliberately small, permissive two-stage
//! transform from raw HTML text to a tree of nodes:
//!
//! - **Tokenizer** - a single-pass character scanner producing start tags,
//!   end tags, self-closing tags, text runs, and comments. Attribute text is
//!   scanned and discarded.
//! - **Tree Builder** - a recursive-descent fold of the token stream into an
//!   ordered forest, using case-sensitive tag-name equality to close
//!   elements.
//!
//! Both stages are total: any input produces a token stream, and any token
//! stream produces a forest. Malformed markup degrades (unterminated
//! constructs consume to end of input, stray end tags are skipped) instead
//! of failing.
//!
//! This is *not* a conforming implementation of
//! [WHATWG § 13.2 Parsing HTML documents](https://html.spec.whatwg.org/multipage/parsing.html).
//! There is no attribute storage, no character-reference decoding, no
//! DOCTYPE/CDATA handling, and no RCDATA/RAWTEXT/script-data modes; a
//! `<script>` body containing `<` will be parsed as markup.

/// Tree construction from a token stream.
pub mod builder;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use builder::{TreeBuilder, build_forest, print_forest};
pub use tokenizer::{HTMLTokenizer, Token, TokenKind, tokenize};
