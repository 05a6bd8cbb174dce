//! Church numeral encoding.

use byneed_ast::ast::{Expr, ExprKind};
use byneed_ast::span::Span;
use std::rc::Rc;

/// Builds `\f.\x.(f (f ... (f x)))` with `n` applications of `f`. The
/// evaluator substitutes this for a numeric literal before evaluating it.
pub fn church_encode(n: u64) -> Expr {
    let span = Span::new(0, 0);
    let f = Rc::new(Expr::new(ExprKind::Symbol("f".into()), span));
    let x = Rc::new(Expr::new(ExprKind::Symbol("x".into()), span));

    let mut body = Rc::clone(&x);
    for _ in 0..n {
        body = Rc::new(Expr::new(
            ExprKind::Apply { func: Rc::clone(&f), arg: body },
            span,
        ));
    }

    let inner = Rc::new(Expr::new(ExprKind::Lambda { param: x, body }, span));
    Expr::new(ExprKind::Lambda { param: f, body: inner }, span)
}
