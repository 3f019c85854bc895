//! Bounded history buffers
//!
//! Two fixed-capacity sequences back the widget state:
//! - [`BoundedHistory`]: grows up to `N` entries, then evicts the oldest
//!   on every push (recent keystrokes)
//! - [`SampleWindow`]: always exactly `N` entries, zero-filled at start,
//!   values shift toward index 0 as new samples arrive (typing speed)
//!
//! Both are read oldest-first, so consumers never track a head index.

use heapless::Deque;

use crate::config::{KEYSTROKE_CAPACITY, TYPING_SPEED_SAMPLES};

/// FIFO buffer that drops its oldest entry when full
#[derive(Debug, Clone)]
pub struct BoundedHistory<T, const N: usize> {
    entries: Deque<T, N>,
}

impl<T, const N: usize> Default for BoundedHistory<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedHistory<T, N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append an entry, evicting the oldest one if the buffer is full
    ///
    /// Returns the evicted entry.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.entries.is_full() {
            self.entries.pop_front()
        } else {
            None
        };
        // Cannot fail: a slot was freed above if the deque was full
        let _ = self.entries.push_back(value);
        evicted
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    /// Most recently pushed entry
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedHistory<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Recently typed characters
pub type KeystrokeBuffer = BoundedHistory<char, KEYSTROKE_CAPACITY>;

impl<const N: usize> BoundedHistory<char, N> {
    /// Copy the buffer into a string for display
    ///
    /// Characters that do not fit the byte budget are dropped.
    pub fn text<const B: usize>(&self) -> heapless::String<B> {
        let mut text = heapless::String::new();
        for &c in self.iter() {
            if text.push(c).is_err() {
                break;
            }
        }
        text
    }
}

/// Fixed-length sliding window of integer samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleWindow<const N: usize> {
    samples: [u8; N],
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleWindow<N> {
    /// Create a zero-filled window
    pub const fn new() -> Self {
        Self { samples: [0; N] }
    }

    /// Shift every sample one slot toward index 0 and write `value` last
    pub fn push(&mut self, value: u8) {
        if N == 0 {
            return;
        }
        self.samples.copy_within(1.., 0);
        self.samples[N - 1] = value;
    }

    /// Samples in chronological order (oldest first)
    pub fn samples(&self) -> &[u8; N] {
        &self.samples
    }

    /// Newest sample
    pub fn latest(&self) -> u8 {
        self.samples.last().copied().unwrap_or(0)
    }
}

/// Typing-speed history
pub type TypingSpeedHistory = SampleWindow<TYPING_SPEED_SAMPLES>;

/// Vertical scaling derived from a sample window
///
/// `range` is never zero: a flat history scales with a range of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GraphScale {
    pub min: u8,
    pub max: u8,
    pub range: u16,
}

impl GraphScale {
    /// Compute min, max and range over the samples
    pub fn from_samples(samples: &[u8]) -> Self {
        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        let range = match u16::from(max - min) {
            0 => 1,
            range => range,
        };
        Self { min, max, range }
    }

    /// Height above the baseline for a sample, in `0..=height`
    pub fn scale(&self, sample: u8, height: u16) -> u16 {
        let offset = u32::from(sample.saturating_sub(self.min));
        let scaled = offset * u32::from(height) / u32::from(self.range);
        scaled.min(u32::from(height)) as u16
    }
}
