//! Call-by-need evaluation engine: environments, values, promises, and the
//! `eval`/`apply`/`promise`/`force` control core.

pub mod builtins;
pub mod church;
pub mod env;
pub mod error;
pub mod eval;
pub mod thunk;
pub mod value;

pub use builtins::{install_builtins, register_builtin};
pub use church::church_encode;
pub use env::Env;
pub use error::EvalError;
pub use eval::{apply, eval, force, promise};
pub use value::{Builtin, Closure, NativeProc, Value};
