//! Per-pass route legend and color assignment

use crate::Color;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single legend row: a route number and the color used to draw it
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegendEntry {
    pub route_number: String,
    pub color: Color,
}

/// Route number to color mapping accumulated during one planning pass
///
/// Colors are handed out from the palette in first-seen order, wrapping
/// around when there are more routes than colors. Entries keep that order.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    palette: Vec<Color>,
    entries: Vec<LegendEntry>,
    /// Route number -> position in `entries`
    index: HashMap<String, usize>,
}

impl Legend {
    /// Create an empty legend drawing from the given palette
    ///
    /// The palette must not be empty.
    pub fn new(palette: Vec<Color>) -> Self {
        assert!(!palette.is_empty(), "legend palette must not be empty");
        Self {
            palette,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Return the color for a route, assigning the next palette color on first use
    pub fn assign_color(&mut self, route_number: &str) -> Color {
        if let Some(&position) = self.index.get(route_number) {
            return self.entries[position].color;
        }

        let position = self.entries.len();
        let color = self.palette[position % self.palette.len()];
        self.entries.push(LegendEntry {
            route_number: route_number.to_owned(),
            color,
        });
        self.index.insert(route_number.to_owned(), position);

        tracing::trace!("Assigned {} to route {}", color, route_number);
        color
    }

    /// Color already assigned to a route in this pass
    #[inline]
    pub fn color_of(&self, route_number: &str) -> Option<Color> {
        self.index
            .get(route_number)
            .map(|&position| self.entries[position].color)
    }

    /// All entries in first-seen order
    #[inline]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every assignment, keeping the palette
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    #[inline]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PALETTE.to_vec())
    }
}
