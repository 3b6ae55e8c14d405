//! An in-memory log sink that captures the step's diagnostic lines.

use snsnotify::core::LogSink;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for MemoryLog {
    fn append(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
