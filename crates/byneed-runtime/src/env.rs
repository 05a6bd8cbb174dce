//! Environments bind names to values.
//!
//! An environment is a chain of frames. `lookup` walks frames outward to the
//! root; within a frame the newest binding wins. `link` allocates a new child
//! frame holding one binding, so a function call shadows the caller's scope
//! without touching it. `bind` mutates the named frame itself: it overwrites
//! an existing binding for the name in place, or appends a fresh one.
//!
//! Frames are shared, never exclusively owned: any number of closures and
//! promises may capture the same chain, so frames live behind `Rc` and the
//! binding list behind `RefCell` (single-threaded model; `bind` is the only
//! mutation of an existing frame).

use crate::error::EvalError;
use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct Env {
    frame: Rc<Frame>,
}

struct Frame {
    bindings: RefCell<Vec<Binding>>,
    parent: Option<Env>,
}

struct Binding {
    name: String,
    value: Value,
}

thread_local! {
    // Guards the dumps against a binding whose value would print the same
    // environment again; the inner occurrence prints as "...".
    static DUMPING: Cell<bool> = const { Cell::new(false) };
}

impl Env {
    /// An empty, parentless frame. The host constructs the root explicitly;
    /// there is no hidden process-wide environment.
    pub fn root() -> Self {
        Env {
            frame: Rc::new(Frame { bindings: RefCell::new(Vec::new()), parent: None }),
        }
    }

    /// Root frame with the builtin procedures installed.
    pub fn with_builtins() -> Self {
        let env = Env::root();
        crate::builtins::install_builtins(&env);
        env
    }

    /// Searches this frame and then each enclosing frame for `name`; within a
    /// frame, bindings are searched newest-first.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        let mut cur = Rc::clone(&self.frame);
        loop {
            {
                let bindings = cur.bindings.borrow();
                if let Some(b) = bindings.iter().rev().find(|b| b.name == name) {
                    return Ok(b.value.clone());
                }
            }
            let next = match &cur.parent {
                Some(parent) => Rc::clone(&parent.frame),
                None => return Err(EvalError::Unbound(name.to_string())),
            };
            cur = next;
        }
    }

    /// Binds `name` to `value` in a new child frame and returns it. The new
    /// binding shadows, but does not replace, any binding of `name` visible
    /// from `self`.
    pub fn link(&self, name: &str, value: Value) -> Env {
        Env {
            frame: Rc::new(Frame {
                bindings: RefCell::new(vec![Binding { name: name.to_string(), value }]),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Binds `name` to `value` in this exact frame, overwriting in place if
    /// the frame already binds the name. Returns the bound value. If the
    /// value is a closure, its display name is set as a side effect.
    pub fn bind(&self, name: &str, value: Value) -> Value {
        if let Value::Closure(c) = &value {
            *c.name.borrow_mut() = Some(name.to_string());
        }
        let mut bindings = self.frame.bindings.borrow_mut();
        match bindings.iter_mut().rev().find(|b| b.name == name) {
            Some(b) => b.value = value.clone(),
            None => bindings.push(Binding { name: name.to_string(), value: value.clone() }),
        }
        value
    }

    /// One frame's bindings, newest first, as `name=value` pairs.
    pub fn format_locals(&self) -> String {
        if DUMPING.get() {
            return "...".into();
        }
        DUMPING.set(true);
        let mut out = String::new();
        let bindings = self.frame.bindings.borrow();
        for (idx, b) in bindings.iter().rev().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push_str(&b.name);
            out.push('=');
            out.push_str(&b.value.to_string());
        }
        DUMPING.set(false);
        out
    }

    /// The whole chain, innermost frame first.
    pub fn format_chain(&self) -> String {
        if DUMPING.get() {
            return "...".into();
        }
        DUMPING.set(true);
        let mut out = String::from("#<Env");
        let mut cur = Rc::clone(&self.frame);
        loop {
            {
                let bindings = cur.bindings.borrow();
                for (idx, b) in bindings.iter().rev().enumerate() {
                    out.push(if idx == 0 { ' ' } else { ',' });
                    out.push_str(&b.name);
                    out.push('=');
                    out.push_str(&b.value.to_string());
                }
            }
            let next = match &cur.parent {
                Some(parent) => Rc::clone(&parent.frame),
                None => break,
            };
            cur = next;
        }
        DUMPING.set(false);
        out.push('>');
        out
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_chain())
    }
}
