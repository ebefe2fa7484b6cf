//! Function extraction: token-level scan for documented `pub fn` headers.
//!
//! The scan is a single forward pass over the [`lexer`] token stream:
//! `///` lines accumulate, attributes and plain comments are transparent,
//! and any other token drops the pending docs. On `pub` the header is
//! parsed by hand up to the first `{` or `;` that is not nested in
//! parentheses, brackets or generic angle brackets.

pub mod describe;
pub mod lexer;

use crate::model::{Classification, FunctionRecord};
use lexer::{Lexer, Token, TokenKind, DOC_MARKER};
use std::iter::Peekable;

/// Names starting with this are argument-parsing wrappers, not API.
pub const DEFAULT_EXCLUDE_PREFIX: &str = "pre";

/// Lazy iterator over every `pub fn` in a source buffer, classified.
///
/// Yields private (prefixed) declarations too; use [`exported`] for the
/// public view. Not restartable: build a new one for another pass.
pub struct Extractor<'a> {
    src: &'a str,
    tokens: Peekable<Lexer<'a>>,
    exclude_prefix: &'a str,
    docs: Vec<Token>,
    lines: LineCounter,
}

impl<'a> Extractor<'a> {
    pub fn new(src: &'a str, exclude_prefix: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).peekable(),
            exclude_prefix,
            docs: Vec::new(),
            lines: LineCounter::default(),
        }
    }

    fn peek_is(&mut self, kind: TokenKind) -> bool {
        self.tokens.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consume tokens through the `close` matching an already consumed `open`.
    fn skip_group(&mut self, open: char, close: char) {
        let mut depth = 1usize;
        for tok in self.tokens.by_ref() {
            match tok.kind {
                TokenKind::Punct(c) if c == open => depth += 1,
                TokenKind::Punct(c) if c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// `#[...]` or `#![...]`; the `#` is already consumed.
    fn skip_attribute(&mut self) {
        if self.peek_is(TokenKind::Punct('!')) {
            self.tokens.next();
        }
        if self.peek_is(TokenKind::Punct('[')) {
            self.tokens.next();
            self.skip_group('[', ']');
        }
    }

    /// Parse a declaration starting at `pub`. Returns `None` when it is not
    /// an unrestricted `pub fn` or the input ends before its delimiter.
    fn declaration(&mut self, pub_tok: Token) -> Option<FunctionRecord> {
        let src = self.src;

        if self.peek_is(TokenKind::Punct('(')) {
            // pub(crate), pub(super), pub(in path): not exported
            self.tokens.next();
            self.skip_group('(', ')');
            return None;
        }

        let mut after_extern = false;
        let fn_tok = loop {
            let tok = self.tokens.next()?;
            match (tok.kind, tok.text(src)) {
                (TokenKind::Ident, "fn") => break tok,
                (TokenKind::Ident, "extern") => after_extern = true,
                (TokenKind::Ident, "const" | "async" | "unsafe") => after_extern = false,
                (TokenKind::Literal, _) if after_extern => after_extern = false,
                _ => return None,
            }
        };

        let name_tok = self.tokens.next()?;
        if name_tok.kind != TokenKind::Ident {
            return None;
        }
        let name = name_tok.text(src);
        let name = name.strip_prefix("r#").unwrap_or(name);

        let delim = self.body_delimiter()?;

        let block_start = self.docs.first().map_or(pub_tok.start, |t| t.start);
        let doc_lines: Vec<&str> = self
            .docs
            .drain(..)
            .map(|t| &src[t.start + DOC_MARKER.len()..t.end])
            .collect();

        let class = if !self.exclude_prefix.is_empty() && name.starts_with(self.exclude_prefix) {
            Classification::Private
        } else if doc_lines.is_empty() {
            Classification::Undocumented
        } else {
            Classification::Documented
        };

        Some(FunctionRecord {
            name: name.to_string(),
            signature: src[fn_tok.start..delim.start].to_string(),
            description: describe::build_description(doc_lines.iter().copied()),
            fields: describe::fields(doc_lines.iter().copied()),
            class,
            line: self.lines.line_at(src, pub_tok.start),
            block: src[block_start..delim.start].to_string(),
            header: src[pub_tok.start..delim.end].to_string(),
        })
    }

    /// Find the `{` opening the body, or the `;` ending a bodyless
    /// declaration, at nesting depth zero.
    fn body_delimiter(&mut self) -> Option<Token> {
        let mut depth = 0usize;
        let mut angle = 0usize;
        while let Some(tok) = self.tokens.next() {
            match tok.kind {
                TokenKind::Punct('(' | '[') => depth += 1,
                TokenKind::Punct(')' | ']') => depth = depth.saturating_sub(1),
                TokenKind::Punct('<') => angle += 1,
                TokenKind::Punct('>') => angle = angle.saturating_sub(1),
                TokenKind::Punct('{' | ';') if depth == 0 && angle == 0 => return Some(tok),
                // const generic argument block, e.g. `Foo<{ N + 1 }>`
                TokenKind::Punct('{') => self.skip_group('{', '}'),
                _ => {}
            }
        }
        None
    }
}

impl Iterator for Extractor<'_> {
    type Item = FunctionRecord;

    fn next(&mut self) -> Option<FunctionRecord> {
        loop {
            let tok = self.tokens.next()?;
            match tok.kind {
                TokenKind::DocComment => self.docs.push(tok),
                TokenKind::Comment => {}
                TokenKind::Punct('#') => self.skip_attribute(),
                TokenKind::Ident if tok.text(self.src) == "pub" => {
                    if let Some(record) = self.declaration(tok) {
                        return Some(record);
                    }
                    self.docs.clear();
                }
                _ => self.docs.clear(),
            }
        }
    }
}

/// Public view: documented and undocumented records, never private ones.
pub fn exported<'a>(
    src: &'a str,
    exclude_prefix: &'a str,
) -> impl Iterator<Item = FunctionRecord> + 'a {
    Extractor::new(src, exclude_prefix).filter(|r| r.class.is_exported())
}

/// Incremental offset → line mapping for monotonically increasing offsets.
#[derive(Default)]
struct LineCounter {
    offset: usize,
    newlines: usize,
}

impl LineCounter {
    fn line_at(&mut self, src: &str, offset: usize) -> usize {
        self.newlines += src.as_bytes()[self.offset..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.offset = offset;
        self.newlines + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(src: &str) -> Vec<FunctionRecord> {
        exported(src, DEFAULT_EXCLUDE_PREFIX).collect()
    }

    #[test]
    fn documented_add() {
        let src = "/// Adds two numbers\n/// Returns the sum\npub fn add(a: Int, b: Int) -> Int {\n";
        let got = records(src);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "add");
        assert_eq!(got[0].description, "Adds two numbers\nReturns the sum\n");
        assert_eq!(got[0].signature, "fn add(a: Int, b: Int) -> Int ");
        assert_eq!(got[0].class, Classification::Documented);
        assert_eq!(got[0].line, 3);
        assert_eq!(got[0].header, "pub fn add(a: Int, b: Int) -> Int {");
        assert_eq!(
            got[0].block,
            "/// Adds two numbers\n/// Returns the sum\npub fn add(a: Int, b: Int) -> Int "
        );
    }

    #[test]
    fn no_public_functions() {
        assert!(records("").is_empty());
        assert!(records("fn private() {}\nstruct S;\npub struct T { x: u8 }\n").is_empty());
    }

    #[test]
    fn prefixed_name_excluded() {
        assert!(records("pub fn pre_helper() { }").is_empty());
        assert!(records("/// Parses args\npub fn pre_turn_led(args: &Vec<u8>) {}").is_empty());
    }

    #[test]
    fn prefixed_name_classified_private() {
        let all: Vec<_> = Extractor::new("pub fn pre_helper() { }", "pre").collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].class, Classification::Private);
    }

    #[test]
    fn prefix_must_lead_the_name() {
        let got = records("pub fn prepare() {}\npub fn print() {}\npub fn spread() {}");
        let names: Vec<_> = got.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["print", "spread"]);
    }

    #[test]
    fn empty_prefix_excludes_nothing() {
        let got: Vec<_> = exported("pub fn pre_a() {}", "").collect();
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn undocumented_has_empty_description() {
        let got = records("pub fn bare(x: u8) -> u8 { x }");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].description, "");
        assert_eq!(got[0].signature, "fn bare(x: u8) -> u8 ");
        assert_eq!(got[0].class, Classification::Undocumented);
    }

    #[test]
    fn source_order_and_duplicates() {
        let src = "/// one\npub fn a() {}\n/// two\npub fn b() {}\n/// one\npub fn a() {}\n";
        let got = records(src);
        let names: Vec<_> = got.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert_eq!(got[0], got[2].clone().with_line(2));
    }

    #[test]
    fn docs_do_not_leak_across_items() {
        let src = "/// for the struct\npub struct S;\npub fn f() {}\n";
        let got = records(src);
        assert_eq!(got[0].description, "");
    }

    #[test]
    fn attributes_keep_docs_attached() {
        let src = "/// Fast path\n#[inline]\n#[cfg(feature = \"x[y]\")]\npub fn fast() {}\n";
        let got = records(src);
        assert_eq!(got[0].description, "Fast path\n");
        assert_eq!(got[0].signature, "fn fast() ");
    }

    #[test]
    fn qualifiers_and_abi() {
        let src = "pub const fn c() {}\npub async unsafe fn u() {}\npub extern \"C\" fn e() {}\n";
        let got = records(src);
        let sigs: Vec<_> = got.iter().map(|r| r.signature.as_str()).collect();
        assert_eq!(sigs, vec!["fn c() ", "fn u() ", "fn e() "]);
        assert!(got[2].header.starts_with("pub extern \"C\" fn e"));
    }

    #[test]
    fn restricted_visibility_not_exported() {
        assert!(records("/// hidden\npub(crate) fn f() {}\npub(in crate::a) fn g() {}").is_empty());
    }

    #[test]
    fn multi_line_generic_signature() {
        let src = "/// Map it\npub fn map<T, F>(\n    items: Vec<T>,\n    f: F,\n) -> Vec<T>\nwhere\n    F: Fn(T) -> T,\n{\n}\n";
        let got = records(src);
        assert_eq!(
            got[0].signature,
            "fn map<T, F>(\n    items: Vec<T>,\n    f: F,\n) -> Vec<T>\nwhere\n    F: Fn(T) -> T,\n"
        );
    }

    #[test]
    fn const_generic_block_is_not_body() {
        let got = records("pub fn arr() -> Arr<{ N + 1 }> { todo() }");
        assert_eq!(got[0].signature, "fn arr() -> Arr<{ N + 1 }> ");
    }

    #[test]
    fn braces_in_literals_and_comments_ignored() {
        let src = "pub fn f(a: [u8; 2] /* { */) -> &'static str {\n\"}\"\n}\n/// next\npub fn g() {}\n";
        let got = records(src);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].signature, "fn f(a: [u8; 2] /* { */) -> &'static str ");
        assert_eq!(got[1].description, "next\n");
    }

    #[test]
    fn bodyless_trait_method() {
        let got = records("pub trait T {\n    /// Required\n    fn req(&self);\n}\n/// Decl\npub fn decl();\n");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].signature, "fn decl()");
    }

    #[test]
    fn methods_in_impl_blocks() {
        let src = "impl S {\n    /// New\n    pub fn new() -> Self { S }\n}\n";
        let got = records(src);
        assert_eq!(got[0].name, "new");
        assert_eq!(got[0].line, 3);
    }

    #[test]
    fn doc_fields_collected() {
        let src = "/// FuncId = \"turn_led\"\n/// Input = bool\npub fn turn_led(turn: bool) -> Result<(), Error> {}\n";
        let got = records(src);
        assert_eq!(got[0].fields.len(), 2);
        assert_eq!(got[0].fields[0].value, "turn_led");
    }

    #[test]
    fn truncated_header_yields_nothing() {
        assert!(records("/// doc\npub fn cut(a: u8").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let recs = records("/// A  b\r\n/// c\r\npub fn f() {\r\n");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].description, "A b\nc\n");
        assert_eq!(recs[0].signature, "fn f() ");
        assert_eq!(recs[0].line, 3);
    }

    #[test]
    fn deterministic() {
        let src = "/// a\npub fn a() {}\npub fn pre_b() {}\npub fn c() {}";
        assert_eq!(records(src), records(src));
    }

    impl FunctionRecord {
        fn with_line(mut self, line: usize) -> Self {
            self.line = line;
            self
        }
    }
}
