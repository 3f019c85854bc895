//! Shared status context
//!
//! Notifications may arrive from several tasks or interrupt handlers. The
//! context sits behind an embassy-sync blocking mutex so each dispatch runs
//! to completion before the next one starts. Pick the raw mutex to match
//! the callers: `CriticalSectionRawMutex` across interrupts,
//! `NoopRawMutex` for a single executor.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use sidelight_core::config::WidgetConfig;
use sidelight_core::events::Notification;
use sidelight_core::state::Changes;
use sidelight_core::traits::{Clock, StatusSource};
use sidelight_display::DisplaySurface;

use crate::context::StatusContext;
use crate::registry::StatusError;

/// Mutex-guarded [`StatusContext`]
pub struct SharedStatus<M: RawMutex, S, C, const N: usize> {
    inner: Mutex<M, RefCell<StatusContext<S, C, N>>>,
}

impl<M: RawMutex, S: DisplaySurface, C: Clock, const N: usize> SharedStatus<M, S, C, N> {
    pub const fn new(context: StatusContext<S, C, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(context)),
        }
    }

    /// Dispatch a notification
    pub fn notify(&self, notification: &Notification) -> Changes {
        self.with(|context| context.on_notification(notification))
    }

    /// Refresh clock-driven regions
    pub fn tick(&self) -> Changes {
        self.with(StatusContext::on_tick)
    }

    /// Register a widget instance
    pub fn register<P: StatusSource + ?Sized>(
        &self,
        surface: S,
        config: WidgetConfig,
        source: &P,
    ) -> Result<usize, StatusError> {
        self.with(|context| context.register(surface, config, source))
    }

    /// Run `f` with exclusive access to the context
    ///
    /// Must not be re-entered from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut StatusContext<S, C, N>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn into_inner(self) -> StatusContext<S, C, N> {
        self.inner.into_inner().into_inner()
    }
}
