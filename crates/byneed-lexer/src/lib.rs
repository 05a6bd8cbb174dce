use byneed_ast::span::Span;
use logos::{Lexer, Logos};

#[derive(Debug, Logos, PartialEq, Clone)]
pub enum Tok {
    // Whitespace and line comments are skipped
    #[regex(r"[ \t\r\n]+", logos::skip)]
    _Whitespace,
    #[regex(r";[^\n]*", logos::skip)]
    _Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("\\")]
    Backslash,
    #[token(".")]
    Dot,
    #[token("'")]
    Quote,
    #[token("=")]
    Eq,
    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", parse_num)]
    Num(u64),

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Ident,
}

fn parse_num(lex: &mut Lexer<Tok>) -> Option<u64> {
    lex.slice().parse::<u64>().ok()
}

#[derive(Debug, Clone)]
pub struct Lexed<'a> {
    pub tok: Tok,
    pub span: Span,
    pub text: &'a str,
}

pub fn lex(input: &str) -> Vec<Lexed<'_>> {
    let mut out = Vec::new();
    let mut l = Tok::lexer(input);
    while let Some(res) = l.next() {
        let range = l.span();
        if let Ok(tok) = res {
            out.push(Lexed {
                tok,
                span: Span::new(range.start, range.len()),
                text: &input[range.clone()],
            });
        }
    }
    out
}
