use crate::error::ValidationError;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Relative weight of every unit type in a plan. Densities are not normalized.
///
/// Keeps the order in which unit types were first defined.
/// If a unit type is defined twice, the last density wins.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Mix {
    densities: Vec<(String, f64)>,
}

impl Mix {
    pub fn try_new<S: AsRef<str>>(types: &[S], densities: &[f64]) -> Result<Self, ValidationError> {
        if types.len() != densities.len() {
            return Err(ValidationError::LengthMismatch {
                types: types.len(),
                densities: densities.len(),
            });
        }
        let mut mix = Mix::default();
        for (unit_type, density) in types.iter().zip(densities) {
            mix.insert(unit_type.as_ref(), *density);
        }
        Ok(mix)
    }

    fn insert(&mut self, unit_type: &str, density: f64) {
        match self.densities.iter_mut().find(|(t, _)| t == unit_type) {
            Some((_, d)) => *d = density,
            None => self.densities.push((unit_type.to_string(), density)),
        }
    }

    pub fn density(&self, unit_type: &str) -> Option<f64> {
        self.densities
            .iter()
            .find(|(t, _)| t == unit_type)
            .map(|(_, d)| *d)
    }

    /// All `(unit_type, density)` pairs in definition order.
    pub fn densities(&self) -> impl Iterator<Item = (&str, f64)> {
        self.densities.iter().map(|(t, d)| (t.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

impl Display for Mix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .densities
            .iter()
            .map(|(t, d)| format!("{t}: {d}"))
            .join(", ");
        write!(f, "{{{entries}}}")
    }
}
