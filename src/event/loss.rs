use serde::{Serialize, Deserialize};

/// A scalar training loss, optionally broken down into named components
/// (one per model output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loss {
    components: Vec<(String, f64)>,
}

impl Loss {
    /// A loss with a single unnamed component.
    pub fn single(value: f64) -> Loss {
        Loss { components: vec![("loss".to_string(), value)] }
    }

    /// A loss broken down into named components.
    pub fn new(components: Vec<(String, f64)>) -> Loss {
        Loss { components }
    }

    /// Total loss: the sum of all component values.
    pub fn total(&self) -> f64 {
        self.components.iter().map(|(_, value)| value).sum()
    }

    pub fn components(&self) -> &[(String, f64)] {
        &self.components
    }
}
