mod errors;
mod interpreter;
mod object;

pub use errors::{RuntimeError, RuntimeErrorType, RuntimeResult};
pub use interpreter::Interpreter;
pub use object::Object;
