//! Widget registry
//!
//! Instances are only ever appended; there is no unregister.

use heapless::Vec;

use crate::widget::WidgetInstance;

/// Dispatch-side errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// No room for another widget instance
    RegistryFull,
    /// No room for another listener subscription
    SubscriptionsFull,
}

/// Fixed-capacity set of live widget instances
pub struct Registry<S, const N: usize> {
    instances: Vec<WidgetInstance<S>, N>,
}

impl<S, const N: usize> Default for Registry<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const N: usize> Registry<S, N> {
    pub const fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    /// Append an instance; returns its index
    pub fn register(&mut self, instance: WidgetInstance<S>) -> Result<usize, StatusError> {
        let index = self.instances.len();
        self.instances
            .push(instance)
            .map_err(|_| StatusError::RegistryFull)?;
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.instances.is_full()
    }

    pub fn get(&self, index: usize) -> Option<&WidgetInstance<S>> {
        self.instances.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut WidgetInstance<S>> {
        self.instances.get_mut(index)
    }

    /// Instances in registration order
    pub fn iter(&self) -> impl Iterator<Item = &WidgetInstance<S>> + '_ {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WidgetInstance<S>> + '_ {
        self.instances.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidelight_core::config::{Offset, Region, WidgetConfig};
    use sidelight_core::traits::StaticSource;
    use sidelight_display::{DisplayError, DisplaySurface, RegionBuffer};

    struct Null;

    impl DisplaySurface for Null {
        fn present(&mut self, _: Region, _: Offset, _: &RegionBuffer) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    fn widget(battery: u8) -> WidgetInstance<Null> {
        let source = StaticSource {
            battery,
            ..StaticSource::default()
        };
        WidgetInstance::new(Null, WidgetConfig::default(), &source)
    }

    #[test]
    fn test_register_until_full() {
        let mut registry: Registry<Null, 2> = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register(widget(10)), Ok(0));
        assert_eq!(registry.register(widget(20)), Ok(1));
        assert!(registry.is_full());
        assert_eq!(registry.register(widget(30)), Err(StatusError::RegistryFull));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let mut registry: Registry<Null, 3> = Registry::new();
        for battery in [5, 6, 7] {
            registry.register(widget(battery)).unwrap();
        }
        let seen: std::vec::Vec<u8> = registry.iter().map(|w| w.state().battery).collect();
        assert_eq!(seen, [5, 6, 7]);
        assert_eq!(registry.get(1).map(|w| w.state().battery), Some(6));
        assert!(registry.get(3).is_none());
    }
}
