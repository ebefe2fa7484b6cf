//! Rust tokenizer for the header scan, built on logos.
//!
//! Only tells apart what the scan needs: comments (doc vs plain), literals
//! that may hide delimiter characters, identifiers, lifetimes and
//! single-character punctuation. Whitespace is skipped, never emitted.
//! Unterminated strings and comments run to the end of input.

use logos::Logos;

/// Marker that starts a documentation comment line.
pub const DOC_MARKER: &str = "///";

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `/// ...` up to (not including) the newline
    #[regex(r"///[^\n]*", priority = 10)]
    DocComment,

    /// `// ...`, `//! ...` or `/* ... */`
    #[regex(r"//[^\n]*")]
    #[token("/*", block_comment)]
    Comment,

    #[regex(r"(r#)?[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    Ident,

    /// String, byte string, raw string, char or number
    #[regex(r#"[bc]?"([^"\\]|\\(.|\n))*"?"#)]
    #[regex(r#"[bc]?r#*""#, raw_string)]
    #[regex(r"b?'([^'\\\n]|\\(.|\n)[^'\n]*)'")]
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?")]
    Literal,

    #[regex(r"'[A-Za-z_][A-Za-z0-9_]*")]
    Lifetime,

    #[token("->")]
    Arrow,

    #[token("=>")]
    FatArrow,

    #[regex(r"[!#$%&()*+,\-./:;<=>?@\[\]^`{|}~\\]", |lex| lex.slice().chars().next())]
    Punct(char),

    /// Anything logos could not match, such as a stray `'`
    Unknown,
}

/// Block comments nest in Rust; the opening `/*` is already consumed.
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while depth > 0 && i < rest.len() {
        match &rest[i..] {
            [b'/', b'*', ..] => {
                depth += 1;
                i += 2;
            }
            [b'*', b'/', ..] => {
                depth -= 1;
                i += 2;
            }
            _ => i += 1,
        }
    }
    lex.bump(i);
    true
}

/// Raw strings close on `"` followed by as many `#` as opened them.
fn raw_string(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let hashes = lex.slice().bytes().filter(|&b| b == b'#').count();
    let closing = format!("\"{}", "#".repeat(hashes));
    let rest = lex.remainder();
    let end = rest.find(&closing).map_or(rest.len(), |i| i + closing.len());
    lex.bump(end);
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }
}

/// Lazy token stream over one source buffer, with byte spans.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(src),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Unknown);
        let span = self.inner.span();
        Some(Token {
            kind,
            start: span.start,
            end: span.end,
        })
    }
}
