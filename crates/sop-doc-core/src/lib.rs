//! Core orchestration layer for sop-doc.

use sop_doc_config::Config;
use sop_doc_ops::Operations;

/// Entry point for higher-level consumers (CLI, embedding adapters, etc.).
/// Each invocation constructs fresh state; nothing persists across runs.
pub struct SopDoc {
    ops: Operations,
}

impl SopDoc {
    /// Bootstrap the optimizer engine from configuration.
    pub fn bootstrap(config: Config) -> Self {
        Self {
            ops: Operations::new(config),
        }
    }

    /// Access the operation bundle.
    pub fn operations(&self) -> &Operations {
        &self.ops
    }
}
