//! Evaluation: `eval`, `apply`, `promise`, `force`.
//!
//! The evaluator is lazy. An application's operand is wrapped in a promise
//! and handed to the callable unevaluated; `force` runs the saved expression
//! in the saved environment the first time it is demanded and memoizes the
//! result, so the operand is evaluated at most once.

use crate::church::church_encode;
use crate::env::Env;
use crate::error::EvalError;
use crate::thunk::{ThunkCell, ThunkState};
use crate::value::{Closure, Value};
use byneed_ast::ast::{Expr, ExprKind};
use std::cell::RefCell;
use std::rc::Rc;

// Depth cap standing in for the call stack the reference system exhausts.
const MAX_DEPTH: usize = 4096;

pub fn eval(exp: &Expr, env: &Env) -> Result<Value, EvalError> {
    eval_at(exp, env, 0)
}

pub fn apply(closure: &Closure, arg: &Value) -> Result<Value, EvalError> {
    apply_at(closure, arg, 0)
}

/// Delays evaluation of `exp` in `env`. O(1); nothing runs until `force`.
pub fn promise(exp: Rc<Expr>, env: &Env) -> Value {
    Value::Thunk(Rc::new(ThunkCell::pending(exp, env.clone())))
}

pub fn force(val: &Value) -> Result<Value, EvalError> {
    force_at(val, 0)
}

fn eval_at(exp: &Expr, env: &Env, depth: usize) -> Result<Value, EvalError> {
    if depth >= MAX_DEPTH {
        return Err(EvalError::RecursionLimit);
    }
    match &exp.kind {
        ExprKind::Symbol(name) => env.lookup(name),

        ExprKind::Lambda { param, body } => {
            let param = param.symbol_name().ok_or_else(|| {
                EvalError::Malformed("lambda parameter must be a symbol".into())
            })?;
            Ok(Value::Closure(Rc::new(Closure {
                name: RefCell::new(None),
                param: param.to_string(),
                body: Rc::clone(body),
                env: env.clone(),
            })))
        }

        ExprKind::Apply { func, arg } => {
            let op = force_at(&eval_at(func, env, depth + 1)?, depth + 1)?;
            let operand = promise(Rc::clone(arg), env);
            match op {
                Value::Closure(c) => apply_at(&c, &operand, depth + 1),
                Value::Builtin(b) => (b.apply)(&b, &operand),
                other => Err(EvalError::NotFunc(other.kind_name().to_string())),
            }
        }

        ExprKind::Quote(inner) => Ok(Value::Quoted(Rc::clone(inner))),

        ExprKind::Assign { target, value } => {
            let name = target.symbol_name().ok_or_else(|| {
                EvalError::Malformed("assignment target must be a symbol".into())
            })?;
            // Eager policy: the right-hand side is forced before binding.
            let val = force_at(&eval_at(value, env, depth + 1)?, depth + 1)?;
            Ok(env.bind(name, val))
        }

        ExprKind::Seq { first, second } => {
            force_at(&eval_at(first, env, depth + 1)?, depth + 1)?;
            eval_at(second, env, depth + 1)
        }

        ExprKind::Num(n) => eval_at(&church_encode(*n), env, depth + 1),
    }
}

fn apply_at(closure: &Closure, arg: &Value, depth: usize) -> Result<Value, EvalError> {
    let call_env = closure.env.link(&closure.param, arg.clone());
    eval_at(&closure.body, &call_env, depth + 1)
}

fn force_at(val: &Value, depth: usize) -> Result<Value, EvalError> {
    if depth >= MAX_DEPTH {
        return Err(EvalError::RecursionLimit);
    }
    let Value::Thunk(cell) = val else {
        return Ok(val.clone());
    };

    let pending = {
        let mut state = cell.state.borrow_mut();
        match &*state {
            ThunkState::Resolved(v) => {
                let v = v.clone();
                drop(state);
                // The stored result may itself be a promise; keep forcing.
                return force_at(&v, depth + 1);
            }
            ThunkState::InProgress => return Err(EvalError::Cycle),
            ThunkState::Pending { .. } => {
                std::mem::replace(&mut *state, ThunkState::InProgress)
            }
        }
    };
    let ThunkState::Pending { exp, env } = pending else {
        unreachable!("claimed thunk state is always Pending");
    };

    match eval_at(&exp, &env, depth + 1) {
        Ok(v) => {
            *cell.state.borrow_mut() = ThunkState::Resolved(v.clone());
            force_at(&v, depth + 1)
        }
        Err(e) => {
            // Put the work back so the statement-level error stays recoverable.
            *cell.state.borrow_mut() = ThunkState::Pending { exp, env };
            Err(e)
        }
    }
}
