use byneed_ast::ast::*;
use byneed_lexer::{lex, Lexed, Tok};
use std::rc::Rc;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Generic(String),
}

/// Parses one complete statement. Grammar, loosest first:
///
///   stmt   := seq
///   seq    := assign (',' seq)?
///   assign := chain ('=' assign)?
///   chain  := atom atom*                 -- application, folds left
///   atom   := '(' seq ')' | '\' sym '.' assign | '\'' atom | number | symbol
///
/// Assignment targets are not validated here; the evaluator rejects
/// non-symbol targets.
pub fn parse_stmt(src: &str) -> Result<Expr, ParseError> {
    let tokens = lex(src);
    let mut i = 0usize;

    fn peek<'a>(i: usize, toks: &'a [Lexed<'a>]) -> Option<&'a Lexed<'a>> {
        toks.get(i)
    }
    fn bump<'a>(i: &mut usize, toks: &'a [Lexed<'a>]) -> Option<&'a Lexed<'a>> {
        let t = toks.get(*i);
        *i += 1;
        t
    }
    fn starts_atom(t: &Tok) -> bool {
        matches!(
            t,
            Tok::LParen | Tok::Backslash | Tok::Quote | Tok::Num(_) | Tok::Ident
        )
    }

    fn parse_seq<'a>(i: &mut usize, toks: &'a [Lexed<'a>]) -> Result<Expr, ParseError> {
        let first = parse_assign(i, toks)?;
        if let Some(t) = peek(*i, toks) {
            if t.tok == Tok::Comma {
                bump(i, toks);
                let second = parse_seq(i, toks)?;
                let span = first.span.cover(second.span);
                return Ok(Expr::new(
                    ExprKind::Seq { first: Rc::new(first), second: Rc::new(second) },
                    span,
                ));
            }
        }
        Ok(first)
    }

    fn parse_assign<'a>(i: &mut usize, toks: &'a [Lexed<'a>]) -> Result<Expr, ParseError> {
        let target = parse_chain(i, toks)?;
        if let Some(t) = peek(*i, toks) {
            if t.tok == Tok::Eq {
                bump(i, toks);
                let value = parse_assign(i, toks)?;
                let span = target.span.cover(value.span);
                return Ok(Expr::new(
                    ExprKind::Assign { target: Rc::new(target), value: Rc::new(value) },
                    span,
                ));
            }
        }
        Ok(target)
    }

    fn parse_chain<'a>(i: &mut usize, toks: &'a [Lexed<'a>]) -> Result<Expr, ParseError> {
        let mut e = parse_atom(i, toks)?;
        while let Some(t) = peek(*i, toks) {
            if !starts_atom(&t.tok) {
                break;
            }
            let arg = parse_atom(i, toks)?;
            let span = e.span.cover(arg.span);
            e = Expr::new(ExprKind::Apply { func: Rc::new(e), arg: Rc::new(arg) }, span);
        }
        Ok(e)
    }

    fn parse_atom<'a>(i: &mut usize, toks: &'a [Lexed<'a>]) -> Result<Expr, ParseError> {
        let t = bump(i, toks).ok_or_else(|| ParseError::Generic("unexpected end of input".into()))?;
        Ok(match &t.tok {
            Tok::Ident => Expr::new(ExprKind::Symbol(t.text.to_string()), t.span),
            Tok::Num(n) => Expr::new(ExprKind::Num(*n), t.span),
            Tok::Quote => {
                let inner = parse_atom(i, toks)?;
                let span = t.span.cover(inner.span);
                Expr::new(ExprKind::Quote(Rc::new(inner)), span)
            }
            Tok::Backslash => {
                let p = bump(i, toks)
                    .ok_or_else(|| ParseError::Generic("expected parameter after '\\'".into()))?;
                if p.tok != Tok::Ident {
                    return Err(ParseError::Generic(format!(
                        "expected parameter symbol after '\\', found '{}'",
                        p.text
                    )));
                }
                let param = Expr::new(ExprKind::Symbol(p.text.to_string()), p.span);
                let d = bump(i, toks)
                    .ok_or_else(|| ParseError::Generic("expected '.' after lambda parameter".into()))?;
                if d.tok != Tok::Dot {
                    return Err(ParseError::Generic(format!(
                        "expected '.' after lambda parameter, found '{}'",
                        d.text
                    )));
                }
                let body = parse_assign(i, toks)?;
                let span = t.span.cover(body.span);
                Expr::new(
                    ExprKind::Lambda { param: Rc::new(param), body: Rc::new(body) },
                    span,
                )
            }
            Tok::LParen => {
                let inner = parse_seq(i, toks)?;
                let close = bump(i, toks)
                    .ok_or_else(|| ParseError::Generic("expected ')'".into()))?;
                if close.tok != Tok::RParen {
                    return Err(ParseError::Generic(format!(
                        "expected ')', found '{}'",
                        close.text
                    )));
                }
                Expr::new(inner.kind, t.span.cover(close.span))
            }
            other => {
                return Err(ParseError::Generic(format!(
                    "unexpected token '{}' ({:?})",
                    t.text, other
                )))
            }
        })
    }

    let e = parse_seq(&mut i, &tokens)?;
    if let Some(t) = peek(i, &tokens) {
        return Err(ParseError::Generic(format!(
            "unexpected trailing token '{}'",
            t.text
        )));
    }
    Ok(e)
}
