//! Active layer and its display name

use core::fmt::Write;

use crate::config::Label;

/// Highest active keymap layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerInfo {
    pub index: u8,
    /// Label from the keymap; may be absent or empty
    pub label: Option<Label>,
}

impl LayerInfo {
    pub fn new(index: u8, label: Option<Label>) -> Self {
        Self { index, label }
    }

    /// Text to show for this layer
    pub fn text(&self, names: &[Label; 3]) -> Label {
        layer_text(self.index, self.label.as_deref(), names)
    }
}

/// Select a layer's display text
///
/// A non-empty label wins; otherwise indices 0..=2 use the name table and
/// anything higher renders as `L<index>`. Never blank.
pub fn layer_text(index: u8, label: Option<&str>, names: &[Label; 3]) -> Label {
    match label {
        Some(text) if !text.is_empty() => crate::config::label(text),
        _ => match names.get(usize::from(index)) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => {
                let mut text = Label::new();
                let _ = write!(text, "L{}", index);
                text
            }
        },
    }
}
