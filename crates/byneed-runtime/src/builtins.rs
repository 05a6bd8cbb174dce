//! Builtin procedure glue.
//!
//! Wraps host procedures as first-class values and installs them in an
//! environment, so a builtin is indistinguishable from a user-defined
//! function at call sites.

use crate::env::Env;
use crate::eval::force;
use crate::value::{Builtin, NativeProc, Value};
use std::rc::Rc;

/// Binds a native procedure by name in `env` and returns the bound value.
pub fn register_builtin(env: &Env, name: &str, apply: NativeProc) -> Value {
    env.bind(
        name,
        Value::Builtin(Rc::new(Builtin { name: name.to_string(), apply })),
    )
}

/// Installs the standard builtins. `print` forces its argument, writes the
/// rendered value and a newline to stdout, and returns the original argument
/// unchanged so it stays usable downstream.
pub fn install_builtins(env: &Env) {
    register_builtin(
        env,
        "print",
        Box::new(|_, arg| {
            let val = force(arg)?;
            println!("{val}");
            Ok(arg.clone())
        }),
    );
}
