pub mod span {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub struct Span {
        pub offset: usize,
        pub len: usize,
    }
    impl Span {
        pub fn new(offset: usize, len: usize) -> Self {
            Self { offset, len }
        }
        /// Smallest span covering both `self` and `other`.
        pub fn cover(self, other: Span) -> Span {
            let start = self.offset.min(other.offset);
            let end = (self.offset + self.len).max(other.offset + other.len);
            Span::new(start, end - start)
        }
    }
}

pub mod ast {
    use crate::span::Span;
    use serde::{Deserialize, Serialize};
    use std::rc::Rc;

    /// Expression tree produced by the reader. Immutable after construction;
    /// subtrees are shared by `Rc` (a lambda body is referenced both by the
    /// tree and by every closure built from it).
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum ExprKind {
        Symbol(String),
        // param is an arbitrary expression position; the evaluator requires
        // it to be a Symbol and rejects anything else.
        Lambda { param: Rc<Expr>, body: Rc<Expr> },
        Apply { func: Rc<Expr>, arg: Rc<Expr> },
        Quote(Rc<Expr>),
        Assign { target: Rc<Expr>, value: Rc<Expr> },
        Seq { first: Rc<Expr>, second: Rc<Expr> },
        // Surface sugar; the evaluator rewrites it to a Church numeral.
        Num(u64),
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct Expr {
        pub kind: ExprKind,
        pub span: Span,
    }
    impl Expr {
        pub fn new(kind: ExprKind, span: Span) -> Self {
            Self { kind, span }
        }
        pub fn symbol_name(&self) -> Option<&str> {
            match &self.kind {
                ExprKind::Symbol(name) => Some(name),
                _ => None,
            }
        }
    }
}

pub mod pretty {
    use crate::ast::*;

    /// Renders an expression in source syntax: `\x.body`, flattened
    /// application lists `(f a b)`, `'e`, `x = y`, `a, b`.
    pub fn print_expr(e: &Expr) -> String {
        match &e.kind {
            ExprKind::Symbol(name) => name.clone(),
            ExprKind::Lambda { param, body } => {
                format!("\\{}.{}", print_expr(param), print_expr(body))
            }
            ExprKind::Apply { .. } => format!("({})", print_list(e)),
            ExprKind::Quote(inner) => format!("'{}", print_expr(inner)),
            ExprKind::Assign { target, value } => {
                format!("{} = {}", print_expr(target), print_expr(value))
            }
            ExprKind::Seq { first, second } => {
                format!("{}, {}", print_expr(first), print_expr(second))
            }
            ExprKind::Num(n) => format!("{n}"),
        }
    }

    // Applications associate left, so `((f a) b)` flattens to `f a b`.
    fn print_list(e: &Expr) -> String {
        match &e.kind {
            ExprKind::Apply { func, arg } => {
                format!("{} {}", print_list(func), print_expr(arg))
            }
            _ => print_expr(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::pretty::print_expr;
    use crate::span::Span;
    use std::rc::Rc;

    fn sym(name: &str) -> Rc<Expr> {
        Rc::new(Expr::new(ExprKind::Symbol(name.into()), Span::new(0, 0)))
    }
    fn app(func: Rc<Expr>, arg: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::new(ExprKind::Apply { func, arg }, Span::new(0, 0)))
    }

    #[test]
    fn application_lists_flatten() {
        let e = app(app(sym("f"), sym("a")), sym("b"));
        assert_eq!(print_expr(&e), "(f a b)");
    }

    #[test]
    fn nested_operand_keeps_parens() {
        let e = app(sym("f"), app(sym("g"), sym("x")));
        assert_eq!(print_expr(&e), "(f (g x))");
    }

    #[test]
    fn lambda_quote_assign_seq() {
        let lam = Expr::new(
            ExprKind::Lambda { param: sym("x"), body: app(sym("f"), sym("x")) },
            Span::new(0, 0),
        );
        assert_eq!(print_expr(&lam), "\\x.(f x)");

        let q = Expr::new(ExprKind::Quote(sym("y")), Span::new(0, 0));
        assert_eq!(print_expr(&q), "'y");

        let asg = Expr::new(
            ExprKind::Assign { target: sym("id"), value: Rc::new(lam.clone()) },
            Span::new(0, 0),
        );
        let seq = Expr::new(
            ExprKind::Seq { first: Rc::new(asg), second: sym("id") },
            Span::new(0, 0),
        );
        assert_eq!(print_expr(&seq), "id = \\x.(f x), id");
    }

    #[test]
    fn span_cover() {
        let a = Span::new(2, 3);
        let b = Span::new(7, 4);
        assert_eq!(a.cover(b), Span::new(2, 9));
    }
}
