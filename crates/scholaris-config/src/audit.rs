use std::env;

/// Audit logging configuration.
///
/// The audit middleware always emits a tracing event per request. When
/// `enabled` is set it also persists a row to `audit_logs`; `detailed`
/// additionally records response status and latency on that row.
#[derive(Clone, Debug)]
pub struct AuditConfig {
    pub enabled: bool,
    pub detailed: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            detailed: true,
        }
    }
}

impl AuditConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("AUDIT_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            detailed: env::var("AUDIT_DETAILED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
