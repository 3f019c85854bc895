//! Status context
//!
//! Owns everything the notification callbacks touch: the widget registry,
//! the listener subscriptions, the shared input state, the compositor and
//! the clock. Callers hand it notifications one at a time.

use heapless::Vec;
use sidelight_core::config::WidgetConfig;
use sidelight_core::events::{Notification, NotificationKind};
use sidelight_core::modifiers::Modifiers;
use sidelight_core::state::{Changes, StateUpdate};
use sidelight_core::traits::{Clock, StatusSource};
use sidelight_display::{Compositor, DisplaySurface};

use crate::listeners::{default_listener, InputState, Listener};
use crate::registry::{Registry, StatusError};
use crate::widget::WidgetInstance;

/// Maximum listener subscriptions
pub const MAX_SUBSCRIPTIONS: usize = 8;

struct Subscription {
    kind: NotificationKind,
    listener: &'static dyn Listener,
}

/// Dispatcher for up to `N` widget instances
pub struct StatusContext<S, C, const N: usize> {
    registry: Registry<S, N>,
    subscriptions: Vec<Subscription, MAX_SUBSCRIPTIONS>,
    input: InputState,
    compositor: Compositor,
    clock: C,
}

impl<S: DisplaySurface, C: Clock, const N: usize> StatusContext<S, C, N> {
    /// Create a context with no subscriptions
    pub fn new(clock: C) -> Self {
        Self {
            registry: Registry::new(),
            subscriptions: Vec::new(),
            input: InputState::new(),
            compositor: Compositor::new(),
            clock,
        }
    }

    /// Create a context subscribed to every notification kind
    pub fn with_default_listeners(clock: C) -> Self {
        let mut context = Self::new(clock);
        for kind in NotificationKind::ALL {
            // ALL is shorter than MAX_SUBSCRIPTIONS
            let _ = context.subscribe(kind, default_listener(kind));
        }
        context
    }

    /// Route a notification kind to a listener
    ///
    /// A kind may have several listeners; each one's update is applied in
    /// subscription order.
    pub fn subscribe(
        &mut self,
        kind: NotificationKind,
        listener: &'static dyn Listener,
    ) -> Result<(), StatusError> {
        self.subscriptions
            .push(Subscription { kind, listener })
            .map_err(|_| StatusError::SubscriptionsFull)?;
        debug!("subscribed {}", kind);
        Ok(())
    }

    pub fn is_subscribed(&self, kind: NotificationKind) -> bool {
        self.subscriptions.iter().any(|s| s.kind == kind)
    }

    /// Create, seed and fully draw a widget instance
    ///
    /// The first registration seeds the shared input state from the
    /// providers. Every instance then starts from that shared state, so one
    /// registered after typing has begun shows the same keystrokes, graph
    /// and modifiers as the others.
    pub fn register<P: StatusSource + ?Sized>(
        &mut self,
        surface: S,
        config: WidgetConfig,
        source: &P,
    ) -> Result<usize, StatusError> {
        if self.registry.is_full() {
            warn!("widget registry full");
            return Err(StatusError::RegistryFull);
        }
        if self.registry.is_empty() {
            self.input.seed(source);
        }

        let mut instance = WidgetInstance::new(surface, config, source);
        instance.adopt_input(&self.input);
        instance.redraw_all(&mut self.compositor, self.clock.uptime_ms());
        let index = self.registry.register(instance)?;
        info!("registered widget {}", index);
        Ok(index)
    }

    /// Handle one notification
    ///
    /// Returns the union of what changed across all instances. Kinds with no
    /// subscriber are dropped without touching any state.
    pub fn on_notification(&mut self, notification: &Notification) -> Changes {
        let kind = notification.kind();
        let mut changes = Changes::empty();
        let mut handled = 0usize;
        let uptime_ms = self.clock.uptime_ms();

        for subscription in self.subscriptions.iter().filter(|s| s.kind == kind) {
            handled += 1;
            if let Some(update) = subscription.listener.handle(notification, &mut self.input) {
                for instance in self.registry.iter_mut() {
                    changes |= instance.apply(&update, &mut self.compositor, uptime_ms);
                }
            }
        }

        if handled == 0 {
            trace!("ignored {}", kind);
        } else if notification.is_input_event() {
            trace!("dispatched {} to {} listener(s)", kind, handled);
        } else {
            debug!("dispatched {} to {} listener(s)", kind, handled);
        }
        changes
    }

    /// Refresh clock-driven regions
    pub fn on_tick(&mut self) -> Changes {
        let uptime_ms = self.clock.uptime_ms();
        let mut changes = Changes::empty();
        for instance in self.registry.iter_mut() {
            changes |= instance.apply(&StateUpdate::Uptime, &mut self.compositor, uptime_ms);
        }
        changes
    }

    /// Modifiers currently held, as tracked from key events
    pub fn modifiers(&self) -> Modifiers {
        self.input.modifiers()
    }

    /// Keyboard-wide input state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn instance(&self, index: usize) -> Option<&WidgetInstance<S>> {
        self.registry.get(index)
    }

    pub fn instance_mut(&mut self, index: usize) -> Option<&mut WidgetInstance<S>> {
        self.registry.get_mut(index)
    }

    /// Instances in registration order
    pub fn instances(&self) -> impl Iterator<Item = &WidgetInstance<S>> + '_ {
        self.registry.iter()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
