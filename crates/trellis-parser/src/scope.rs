//! Lexical scope tracking for open `namespace` and type blocks.

/// What kind of block a [`Frame`] was opened by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Namespace,
    Type,
}

/// One open block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    kind: FrameKind,
    name: String,
}

impl Frame {
    pub(crate) fn kind(&self) -> FrameKind {
        self.kind
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

/// Stack of the blocks currently open in one source.
///
/// Every namespace or type opening pushes a frame, whether or not a body
/// follows on the same line, so that each `}` pops exactly one frame.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    pub(crate) fn push(&mut self, kind: FrameKind, name: &str) {
        self.frames.push(Frame {
            kind,
            name: name.to_string(),
        });
    }

    /// Pops the innermost frame, or returns `None` if nothing is open.
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Returns the names of all open namespaces, outermost first.
    pub(crate) fn namespace_path(&self) -> Vec<String> {
        self.frames
            .iter()
            .filter(|frame| frame.kind == FrameKind::Namespace)
            .map(|frame| frame.name.clone())
            .collect()
    }

    /// Returns the innermost open type, searching from the top of the stack.
    pub(crate) fn current_type(&self) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.kind == FrameKind::Type)
            .map(Frame::name)
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
