// src/health.rs

use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

use crate::api::ChatBackend;
use crate::error::WidgetError;

/// Shared "request in flight" flag read by the renderer.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, visible: bool) {
        self.0.store(visible, Ordering::Relaxed);
    }

    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Capability to show or hide the loading indicator.
pub trait LoadingIndicator: Send + Sync + Debug {
    fn set_loading_visible(&self, visible: bool);
}

/// Reports backend liveness at startup and owns the loading indicator.
#[derive(Debug)]
pub struct HealthMonitor {
    backend: Arc<dyn ChatBackend>,
    loading: Option<LoadingFlag>,
}

impl HealthMonitor {
    pub fn new(backend: Arc<dyn ChatBackend>, loading: Option<LoadingFlag>) -> Self {
        Self { backend, loading }
    }

    /// One health probe. Failures are logged and otherwise ignored.
    pub async fn check_health(&self) -> Option<crate::api::HealthReport> {
        match self.backend.health().await {
            Ok(report) => {
                if report.is_success() {
                    info!("System health: {} {}", report.summary(), report.raw);
                } else {
                    warn!("System health (HTTP {}): {} {}", report.http_status, report.summary(), report.raw);
                }
                Some(report)
            }
            Err(e) => {
                error!("{}", WidgetError::HealthCheckFailure(e));
                None
            }
        }
    }

    pub fn set_loading_visible(&self, visible: bool) {
        if let Some(flag) = &self.loading {
            flag.set(visible);
        }
    }
}

impl LoadingIndicator for HealthMonitor {
    fn set_loading_visible(&self, visible: bool) {
        HealthMonitor::set_loading_visible(self, visible);
    }
}
