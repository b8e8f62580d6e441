//! RAII guard for block scopes.
//!
//! [`ScopedInterpreter`] pushes a frame when created and pops it when
//! dropped, so the frame is released on `?` returns and during unwinding as
//! well as on normal exit. It derefs to the interpreter, so code inside the
//! block calls interpreter methods on the guard directly.
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.execute(stmt)?;
//! // frame popped when `scoped` goes out of scope
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that pops the frame it pushed.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_frame();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a child frame that is popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_frame();
        ScopedInterpreter { interpreter: self }
    }
}
