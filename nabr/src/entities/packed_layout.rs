use crate::geometry::primitives::Rect;

/// A unit placed in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedUnit {
    pub unit_type: String,
    pub rect: Rect,
}

/// Ordered sequence of placed units, as produced by [`fill`](crate::packing::fill).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PackedLayout {
    pub placed_units: Vec<PlacedUnit>,
}

impl PackedLayout {
    pub fn len(&self) -> usize {
        self.placed_units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedUnit> {
        self.placed_units.iter()
    }

    /// Number of placed units per unit type, in order of first placement.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = vec![];
        for pu in &self.placed_units {
            match counts.iter_mut().find(|(t, _)| *t == pu.unit_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((pu.unit_type.as_str(), 1)),
            }
        }
        counts
    }

    /// Sum of the areas of all placed units.
    pub fn total_area(&self) -> f64 {
        self.placed_units.iter().map(|pu| pu.rect.area()).sum()
    }

    /// Smallest rectangle containing every placed unit, `None` if nothing was placed.
    pub fn bbox(&self) -> Option<Rect> {
        self.placed_units
            .iter()
            .map(|pu| pu.rect)
            .reduce(Rect::bounding_rect)
    }
}
