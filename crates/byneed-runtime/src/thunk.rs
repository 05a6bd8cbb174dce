//! Thunk types for lazy evaluation.

use crate::env::Env;
use crate::value::Value;
use byneed_ast::ast::Expr;
use std::cell::RefCell;
use std::rc::Rc;

/// Mutable cell behind a promise. The pending-to-resolved transition is the
/// only mutation and happens at most once. `InProgress` marks a force that is
/// still running on the stack, so a cyclic force is reported instead of
/// looping.
#[derive(Debug)]
pub struct ThunkCell {
    pub state: RefCell<ThunkState>,
}

#[derive(Debug)]
pub enum ThunkState {
    Pending { exp: Rc<Expr>, env: Env },
    InProgress,
    Resolved(Value),
}

impl ThunkCell {
    pub fn pending(exp: Rc<Expr>, env: Env) -> Self {
        Self { state: RefCell::new(ThunkState::Pending { exp, env }) }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Resolved(_))
    }
}
