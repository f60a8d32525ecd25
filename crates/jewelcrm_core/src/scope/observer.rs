//! Observability hook for scope decisions.
//!
//! The filter reports one `ScopeReport` per call and never logs on its own.
//! Reports carry counts and policy names only, never notification content.

use crate::model::actor::Role;
use log::debug;

/// Summary of one scope evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeReport<'a> {
    /// `None` when no active actor was available.
    pub role: Option<&'a Role>,
    /// Applied policy name, or `"none"` without an actor.
    pub policy: &'static str,
    pub total: usize,
    pub visible: usize,
}

/// Receiver for scope reports.
pub trait ScopeObserver {
    fn on_scope(&self, report: &ScopeReport<'_>);
}

/// Forwards reports to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScopeObserver;

impl ScopeObserver for LogScopeObserver {
    fn on_scope(&self, report: &ScopeReport<'_>) {
        let role = report.role.map(Role::as_str).unwrap_or("none");
        debug!(
            "event=scope_applied module=scope role={} policy={} total={} visible={}",
            role, report.policy, report.total, report.visible
        );
    }
}

/// Discards reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScopeObserver;

impl ScopeObserver for NoopScopeObserver {
    fn on_scope(&self, _report: &ScopeReport<'_>) {}
}
