//! Type definitions for the application shell.

/// Which filter a cycling key acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Priority,
}

/// Direction to step through a list of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

impl CycleDirection {
    pub fn is_forward(self) -> bool {
        self == CycleDirection::Forward
    }
}
