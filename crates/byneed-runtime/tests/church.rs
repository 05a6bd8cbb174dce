use byneed_ast::ast::{Expr, ExprKind};
use byneed_ast::pretty::print_expr;
use byneed_ast::span::Span;
use byneed_parser::parse_stmt;
use byneed_runtime::{eval, force, register_builtin, Env, EvalError, Value};
use std::cell::Cell;
use std::rc::Rc;

// inc rewrites a quoted expression e into '(succ e), counting invocations.
fn install_inc(env: &Env) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0usize));
    let seen = Rc::clone(&count);
    register_builtin(
        env,
        "inc",
        Box::new(move |_, arg| {
            seen.set(seen.get() + 1);
            match force(arg)? {
                Value::Quoted(e) => Ok(Value::Quoted(Rc::new(Expr::new(
                    ExprKind::Apply {
                        func: Rc::new(Expr::new(
                            ExprKind::Symbol("succ".into()),
                            Span::new(0, 0),
                        )),
                        arg: e,
                    },
                    Span::new(0, 0),
                )))),
                other => Err(EvalError::Malformed(format!(
                    "inc expects a quoted expression, got {}",
                    other.kind_name()
                ))),
            }
        }),
    );
    count
}

fn run(env: &Env, src: &str) -> Value {
    let ast = parse_stmt(src).unwrap();
    force(&eval(&ast, env).unwrap()).unwrap()
}

#[test]
fn church_numerals_iterate_like_direct_application() {
    for n in [0u64, 1, 2, 5] {
        // Via the numeral: n inc 'zero
        let env = Env::with_builtins();
        let count = install_inc(&env);
        let via_numeral = run(&env, &format!("{n} inc 'zero"));

        // Directly: inc (inc ... (inc 'zero))
        let env2 = Env::with_builtins();
        let count2 = install_inc(&env2);
        let mut src = String::from("'zero");
        for _ in 0..n {
            src = format!("inc ({src})");
        }
        let direct = run(&env2, &src);

        assert_eq!(count.get(), n as usize);
        assert_eq!(count2.get(), n as usize);
        let (via_numeral, direct) = match (via_numeral, direct) {
            (Value::Quoted(a), Value::Quoted(b)) => (a, b),
            other => panic!("expected quoted results, got {other:?}"),
        };
        assert_eq!(print_expr(&via_numeral), print_expr(&direct));
    }
}

#[test]
fn two_builds_two_successors() {
    let env = Env::with_builtins();
    install_inc(&env);
    let v = run(&env, "2 inc 'zero");
    match v {
        Value::Quoted(e) => assert_eq!(print_expr(&e), "(succ (succ zero))"),
        other => panic!("expected quoted expression, got {other:?}"),
    }
}
