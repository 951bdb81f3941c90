//! Property tests for the never-fail contract.
//!
//! Both stages must be total: any input text tokenizes, and any token
//! sequence (conforming or not) builds a forest. No input may panic.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use quokka_html::{Token, build_forest, tokenize};

#[quickcheck]
fn tokenize_never_panics(input: String) -> bool {
    let _ = tokenize(&input);
    true
}

#[quickcheck]
fn pipeline_never_panics(input: String) -> bool {
    let _ = build_forest(tokenize(&input));
    true
}

#[quickcheck]
fn text_tokens_are_never_empty(input: String) -> bool {
    tokenize(&input).iter().all(|token| match token {
        Token::Text { data } => !data.is_empty(),
        _ => true,
    })
}

/// Non-empty input with no tags and no whitespace.
#[derive(Debug, Clone)]
struct TagFreeText(String);

impl Arbitrary for TagFreeText {
    fn arbitrary(g: &mut Gen) -> Self {
        let cleaned: String = String::arbitrary(g)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '<')
            .collect();
        if cleaned.is_empty() {
            Self("x".to_string())
        } else {
            Self(cleaned)
        }
    }
}

#[quickcheck]
fn tag_free_input_is_a_single_text_token(input: TagFreeText) -> bool {
    let tokens = tokenize(&input.0);
    matches!(tokens.as_slice(), [Token::Text { data }] if *data == input.0)
}

/// An arbitrary token sequence, including shapes no tokenizer emits.
#[derive(Debug, Clone)]
struct TokenSeq(Vec<Token>);

impl Arbitrary for TokenSeq {
    fn arbitrary(g: &mut Gen) -> Self {
        let names = ["div", "p", "span", "a", ""];
        let len = usize::arbitrary(g) % 48;
        let tokens = (0..len)
            .map(|_| {
                let name = (*g.choose(&names).unwrap_or(&"div")).to_string();
                match u8::arbitrary(g) % 5 {
                    0 => Token::StartTag { name },
                    1 => Token::EndTag { name },
                    2 => Token::SelfClosingTag { name },
                    3 => Token::Text { data: String::arbitrary(g) },
                    _ => Token::Comment { data: String::arbitrary(g) },
                }
            })
            .collect();
        Self(tokens)
    }
}

#[quickcheck]
fn build_forest_is_total_over_arbitrary_sequences(seq: TokenSeq) -> bool {
    let _ = build_forest(seq.0);
    true
}
