use super::types::ElementSymbol;

/// One row of the input atom table.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub label: String,
    pub position: [f64; 3],
    pub magnetic_moment: f64,
}

impl AtomRecord {
    pub fn new(label: impl Into<String>, position: [f64; 3], magnetic_moment: f64) -> Self {
        Self {
            label: label.into(),
            position,
            magnetic_moment,
        }
    }

    #[inline]
    pub fn symbol(&self) -> Option<ElementSymbol> {
        ElementSymbol::from_label(&self.label)
    }
}
