use std::collections::HashMap;

use tracing::trace;

/// One lexical block's bindings.
#[derive(Debug, Clone)]
pub struct Frame<V> {
    variable_lookup: HashMap<String, V>,
}

impl<V> Frame<V> {
    pub fn new() -> Self {
        Frame {
            variable_lookup: HashMap::new(),
        }
    }

    /// Binds `name`, overwriting an earlier binding in this frame.
    pub fn define(&mut self, name: String, value: V) {
        self.variable_lookup.insert(name, value);
    }

    pub fn get_variable(&self, name: &str) -> Option<&V> {
        self.variable_lookup.get(name)
    }

    /// Number of names bound in this frame.
    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

impl<V> Default for Frame<V> {
    fn default() -> Self {
        Frame::new()
    }
}

/// Stack of frames, innermost last.
///
/// Misuse (popping or defining with no open frame) panics: it means the
/// caller's push/pop pairing is broken, not that the input is invalid.
#[derive(Debug, Clone)]
pub struct ScopeStack<V> {
    frames: Vec<Frame<V>>,
}

impl<V> ScopeStack<V> {
    pub fn new() -> Self {
        ScopeStack { frames: vec![] }
    }

    /// Enters a new block.
    pub fn push(&mut self) {
        self.frames.push(Frame::new());
        trace!(depth = self.frames.len(), "scope pushed");
    }

    /// Leaves the innermost block, returning its bindings.
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn pop(&mut self) -> Frame<V> {
        let frame = match self.frames.pop() {
            Some(frame) => frame,
            None => panic!("Attempted to pop a scope from an empty scope stack"),
        };
        trace!(depth = self.frames.len(), "scope popped");
        frame
    }

    /// Binds `name` in the innermost frame.
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn define(&mut self, name: &str, value: V) {
        match self.frames.last_mut() {
            Some(frame) => frame.define(name.to_string(), value),
            None => panic!("Attempted to define `{}` with no open scope", name),
        }
    }

    /// Searches from the innermost frame outwards.
    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get_variable(name))
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame `nth` levels out from the innermost one.
    ///
    /// # Panics
    ///
    /// Panics if `nth` is not less than the number of open frames.
    pub fn get_nth_parent_frame(&self, nth: usize) -> &Frame<V> {
        let depth = self.frames.len();
        if nth >= depth {
            panic!(
                "Attempted to access frame {} of a scope stack with {} frames",
                nth, depth
            );
        }
        &self.frames[depth - nth - 1]
    }
}

impl<V> Default for ScopeStack<V> {
    fn default() -> Self {
        ScopeStack::new()
    }
}
