//! Tokenizer for comv scripts using logos.
//!
//! # Format
//!
//! ```text
//! comv                     4-byte magic, checked before anything else
//! if 1 equal sum 2         whitespace-separated words, any number per line
//! sum $Fsum                `$F` prefix stripped from words longer than 2 bytes
//! ```
//!
//! The output is every word of every line, flattened in order. Blank lines
//! contribute nothing. A bad or short header is fatal; there is no partial
//! recovery.

use comv_ir::{Token, TokenList};
use logos::Logos;

/// Every script begins with these bytes.
pub const MAGIC: [u8; 4] = *b"comv";

/// Stripped from the front of any word longer than its own length.
pub const ESCAPE_PREFIX: &str = "$F";

/// Raw token from logos (before escape handling).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"[^ \t\r\n\x0B\x0C]+")]
    Word,
}

/// Script format error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Fewer than four bytes in the whole script.
    #[error("script is {len} bytes long, too short for the `comv` header")]
    TruncatedHeader { len: usize },
    /// The first four bytes are not the magic tag.
    #[error("script header is {:?}, expected `comv`", String::from_utf8_lossy(.found))]
    BadMagic { found: [u8; 4] },
    /// The body after the header is not UTF-8.
    #[error("script is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Tokenize a complete script, header included.
pub fn tokenize(source: &[u8]) -> Result<TokenList, LexError> {
    let body = check_header(source)?;
    let body = std::str::from_utf8(body).map_err(|e| LexError::InvalidUtf8 {
        offset: MAGIC.len() + e.valid_up_to(),
    })?;

    let mut tokens = TokenList::new();
    let mut line = 1u32;
    let mut lexer = RawToken::lexer(body);
    while let Some(raw) = lexer.next() {
        match raw {
            Ok(RawToken::Newline) => line += 1,
            // Every byte the skip rule and `Newline` leave is part of a word,
            // so logos has nothing left to reject.
            Ok(RawToken::Word) | Err(()) => {
                tokens.push(Token::new(strip_escape(lexer.slice()), line));
            }
        }
    }

    tracing::debug!(tokens = tokens.len(), lines = line, "tokenized script");
    Ok(tokens)
}

/// Validate the magic tag and return the bytes after it.
fn check_header(source: &[u8]) -> Result<&[u8], LexError> {
    let Some((header, body)) = source.split_first_chunk::<4>() else {
        return Err(LexError::TruncatedHeader { len: source.len() });
    };
    if *header != MAGIC {
        return Err(LexError::BadMagic { found: *header });
    }
    Ok(body)
}

/// Remove [`ESCAPE_PREFIX`] from a word longer than the prefix.
///
/// A word that is exactly the prefix (or shorter) is kept as-is.
pub fn strip_escape(word: &str) -> &str {
    if word.len() > ESCAPE_PREFIX.len() {
        if let Some(rest) = word.strip_prefix(ESCAPE_PREFIX) {
            return rest;
        }
    }
    word
}
