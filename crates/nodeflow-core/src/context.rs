//! Execution Context: per-run state handed to every stage

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub trace_id: String,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::with_trace_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_trace_id(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
        }
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
