use std::collections::VecDeque;

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Shader-friendly index (0=info, 1=success, 2=error)
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Info => 0.0,
            Self::Success => 1.0,
            Self::Error => 2.0,
        }
    }
}

/// A transient message for the toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    /// Dismiss any visible notices before showing this one
    pub clear: bool,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            clear: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            clear: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            clear: false,
        }
    }

    pub fn clearing(mut self) -> Self {
        self.clear = true;
        self
    }
}

/// Notices waiting for the single toast slot, shown one after another.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice. A clearing notice drops everything queued before it.
    pub fn push(&mut self, notice: Notice) {
        if notice.clear {
            self.pending.clear();
        }
        self.pending.push_back(notice);
    }

    /// Notice currently on screen
    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Dismiss the current notice and return the next one, if any.
    pub fn advance(&mut self) -> Option<&Notice> {
        self.pending.pop_front();
        self.pending.front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
