//! Runtime value types.

use crate::env::Env;
use crate::error::EvalError;
use crate::thunk::{ThunkCell, ThunkState};
use byneed_ast::ast::Expr;
use byneed_ast::pretty::print_expr;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Native procedure: receives the builtin's own descriptor plus one argument.
/// The argument arrives as an unforced promise; builtins that need the
/// concrete value force it themselves.
pub type NativeProc = Box<dyn Fn(&Builtin, &Value) -> Result<Value, EvalError>>;

#[derive(Debug, Clone)]
pub enum Value {
    Quoted(Rc<Expr>),
    Closure(Rc<Closure>),
    Builtin(Rc<Builtin>),
    Thunk(Rc<ThunkCell>),
}

/// A function value: parameter, body, and the environment in effect at its
/// creation.
pub struct Closure {
    /// Display name, set when the closure is the right-hand side of an
    /// assignment. Printing only.
    pub name: RefCell<Option<String>>,
    pub param: String,
    pub body: Rc<Expr>,
    pub env: Env,
}

pub struct Builtin {
    pub name: String,
    pub apply: NativeProc,
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Quoted(_) => "quoted expression",
            Value::Closure(_) => "function",
            Value::Builtin(_) => "builtin",
            Value::Thunk(_) => "promise",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Quoted(e) => f.write_str(&print_expr(e)),
            Value::Closure(c) => {
                write!(f, "#<Function ")?;
                if let Some(name) = &*c.name.borrow() {
                    write!(f, "{name} ")?;
                }
                write!(f, "\\{}.{}>", c.param, print_expr(&c.body))
            }
            Value::Builtin(b) => write!(f, "#<Builtin {}>", b.name),
            Value::Thunk(cell) => match &*cell.state.borrow() {
                ThunkState::Resolved(v) => write!(f, "{v}"),
                _ => f.write_str("#<promise>"),
            },
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name.borrow())
            .field("param", &self.param)
            .field("body", &print_expr(&self.body))
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish_non_exhaustive()
    }
}
