//! Session configuration. Plain structs with defaults; log verbosity
//! comes from `RUST_LOG`.

use crate::money::MoneyFormatter;

/// What happens to the local favorite flag when its remote write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleFailurePolicy {
    /// Revert the optimistic flip, unless a later toggle replaced it.
    #[default]
    Rollback,
    /// Keep the optimistic value until the next load reconciles it.
    KeepOptimistic,
}

#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Inbox size of the session actor. Zero is treated as 1.
    pub channel_capacity: usize,
    pub on_toggle_failure: ToggleFailurePolicy,
    pub formatter: MoneyFormatter,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            on_toggle_failure: ToggleFailurePolicy::default(),
            formatter: MoneyFormatter::default(),
        }
    }
}
