// SPDX-License-Identifier: MPL-2.0
//! Multi-selection bookkeeping for the image grid.
//!
//! Selection is keyed by position in the most recent image sequence and keeps
//! the order in which indices were added, which is also the order reported to
//! the host.

/// Ordered set of selected image indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `index` if absent, removes it otherwise, and returns the new set.
    pub fn toggle(&mut self, index: usize) -> &[usize] {
        if let Some(position) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(position);
        } else {
            self.indices.push(index);
        }
        &self.indices
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in insertion order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Indices that no longer point into a sequence of `len` images.
    ///
    /// Purely informational: stale indices stay selected until toggled.
    #[must_use]
    pub fn stale_indices(&self, len: usize) -> Vec<usize> {
        self.indices.iter().copied().filter(|&i| i >= len).collect()
    }
}
