//! Scope frames for variable lookup.
//!
//! Frames live in an arena and point at their enclosing frame by index.
//! Blocks nest strictly and nothing captures a frame, so the arena behaves
//! as a stack: entering a block pushes a frame whose parent is the current
//! one, leaving it drops that frame. The root frame at index 0 lives as long
//! as the environment.

use rustc_hash::FxHashMap;
use tracing::debug;

use lox_ir::Token;

use crate::errors::undefined_variable;
use crate::{EvalError, EvalResult, Value};

/// Index of a frame in the environment's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

impl FrameId {
    /// The root (global) frame.
    pub const ROOT: FrameId = FrameId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Bindings of one scope plus the link to its enclosing scope.
#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<String, Value>,
    parent: Option<FrameId>,
}

/// Chain of scope frames, innermost last.
#[derive(Clone, Debug)]
pub struct Environment {
    frames: Vec<Frame>,
    current: FrameId,
}

impl Environment {
    /// Environment holding only the root frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
            current: FrameId::ROOT,
        }
    }

    /// Frame that definitions currently go into.
    #[inline]
    pub fn current(&self) -> FrameId {
        self.current
    }

    /// Number of live frames, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enter a child frame of the current one.
    pub fn push_frame(&mut self) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame {
            bindings: FxHashMap::default(),
            parent: Some(self.current),
        });
        self.current = id;
        debug!(frame = id.index(), depth = self.depth(), "push frame");
        id
    }

    /// Leave the current frame and free it. The root frame is never popped.
    pub fn pop_frame(&mut self) {
        let Some(parent) = self.frames[self.current.index()].parent else {
            return;
        };
        self.frames.truncate(self.current.index());
        self.current = parent;
        debug!(depth = self.depth(), "pop frame");
    }

    /// Bind `name` in the current frame, replacing any existing binding there.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.frames[self.current.index()]
            .bindings
            .insert(name.to_string(), value);
    }

    /// Value of the innermost binding of `name`.
    pub fn get(&self, name: &Token) -> EvalResult {
        self.resolve(&name.lexeme)
            .and_then(|id| self.frames[id.index()].bindings.get(name.lexeme.as_str()))
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    /// Overwrite the innermost existing binding of `name`.
    ///
    /// Never creates a binding; an unbound name is an error.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), EvalError> {
        let id = self
            .resolve(&name.lexeme)
            .ok_or_else(|| undefined_variable(name))?;
        self.frames[id.index()]
            .bindings
            .insert(name.lexeme.clone(), value);
        Ok(())
    }

    /// Frame holding the innermost binding of `name`.
    fn resolve(&self, name: &str) -> Option<FrameId> {
        let mut frame = Some(self.current);
        while let Some(id) = frame {
            let scope = &self.frames[id.index()];
            if scope.bindings.contains_key(name) {
                return Some(id);
            }
            frame = scope.parent;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
