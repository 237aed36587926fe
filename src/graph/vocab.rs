//! Element vocabulary and one-hot encoding.

use serde::{Deserialize, Serialize};

use super::error::Error;
use crate::model::types::ElementSymbol;

/// Fixed mapping from element symbol to a dense index `0..K`.
///
/// The declaration order fixes the one-hot layout of every node feature, so
/// two dictionaries with the same symbols in a different order produce
/// different feature matrices. Symbols outside the dictionary are unknown:
/// their atoms are dropped from the node set.
///
/// # Examples
///
/// ```
/// use atom_graph::{ElementSymbol, TypeDictionary};
///
/// let vocab = TypeDictionary::default();
/// assert_eq!(vocab.len(), 3);
/// assert_eq!(vocab.index_of(ElementSymbol::OXYGEN), Some(1));
/// assert_eq!(vocab.index_of(ElementSymbol::new('H')), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ElementSymbol>", into = "Vec<ElementSymbol>")]
pub struct TypeDictionary {
    symbols: Vec<ElementSymbol>,
}

impl TypeDictionary {
    /// Creates a dictionary from symbols in one-hot order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Vocabulary`] if `symbols` is empty or contains a
    /// duplicate.
    pub fn new(symbols: impl IntoIterator<Item = ElementSymbol>) -> Result<Self, Error> {
        let symbols: Vec<ElementSymbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::vocabulary("at least one element symbol is required"));
        }
        for (idx, sym) in symbols.iter().enumerate() {
            if symbols[..idx].contains(sym) {
                return Err(Error::vocabulary(format!("symbol '{sym}' is listed twice")));
            }
        }
        Ok(Self { symbols })
    }

    #[inline]
    pub fn index_of(&self, symbol: ElementSymbol) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    #[inline]
    pub fn contains(&self, symbol: ElementSymbol) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Number of known types, `K`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[ElementSymbol] {
        &self.symbols
    }

    /// One-hot vector of length `K` for `symbol`, or `None` if unknown.
    pub fn one_hot(&self, symbol: ElementSymbol) -> Option<Vec<f64>> {
        let idx = self.index_of(symbol)?;
        let mut encoded = vec![0.0; self.symbols.len()];
        encoded[idx] = 1.0;
        Some(encoded)
    }
}

impl Default for TypeDictionary {
    fn default() -> Self {
        Self {
            symbols: vec![
                ElementSymbol::NITROGEN,
                ElementSymbol::OXYGEN,
                ElementSymbol::CARBON,
            ],
        }
    }
}

impl TryFrom<Vec<ElementSymbol>> for TypeDictionary {
    type Error = Error;

    fn try_from(symbols: Vec<ElementSymbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<TypeDictionary> for Vec<ElementSymbol> {
    fn from(vocab: TypeDictionary) -> Self {
        vocab.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> ElementSymbol {
        ElementSymbol::new(c)
    }

    #[test]
    fn default_vocabulary_is_nitrogen_oxygen_carbon() {
        let vocab = TypeDictionary::default();
        assert_eq!(vocab.symbols(), &[sym('N'), sym('O'), sym('C')]);
        assert_eq!(vocab.index_of(sym('N')), Some(0));
        assert_eq!(vocab.index_of(sym('O')), Some(1));
        assert_eq!(vocab.index_of(sym('C')), Some(2));
    }

    #[test]
    fn unknown_symbol_has_no_index() {
        let vocab = TypeDictionary::default();
        assert_eq!(vocab.index_of(sym('H')), None);
        assert!(!vocab.contains(sym('S')));
        assert!(vocab.one_hot(sym('H')).is_none());
    }

    #[test]
    fn one_hot_follows_declaration_order() {
        let vocab = TypeDictionary::default();
        assert_eq!(vocab.one_hot(sym('C')), Some(vec![0.0, 0.0, 1.0]));

        let reordered = TypeDictionary::new([sym('C'), sym('N'), sym('O')]).unwrap();
        assert_eq!(reordered.one_hot(sym('C')), Some(vec![1.0, 0.0, 0.0]));
    }

    #[test]
    fn custom_vocabulary_changes_width() {
        let vocab = TypeDictionary::new([sym('C'), sym('H'), sym('N'), sym('O')]).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.one_hot(sym('H')), Some(vec![0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn rejects_empty_vocabulary() {
        let result = TypeDictionary::new(std::iter::empty());
        assert!(matches!(result, Err(Error::Vocabulary(_))));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let result = TypeDictionary::new([sym('C'), sym('N'), sym('C')]);
        assert!(matches!(result, Err(Error::Vocabulary(msg)) if msg.contains("'C'")));
    }
}
