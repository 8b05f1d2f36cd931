use std::collections::BTreeMap;

use tracing::info;

use crate::record::StockRecord;

/// What `select_or_create` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The symbol was already active.
    AlreadyActive,
    /// The symbol was in history; its previous field selection is back.
    Restored,
    /// A fresh, empty record was created.
    Created,
}

/// Every symbol seen in this session plus the one under investigation.
///
/// `active`, when set, is always a key of `records`.
#[derive(Debug, Default)]
pub struct StockRegistry {
    records: BTreeMap<String, StockRecord>,
    active: Option<String>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    pub fn select_or_create(&mut self, symbol: &str) -> (String, Selection) {
        let symbol = Self::normalize(symbol);

        let selection = if self.active.as_deref() == Some(symbol.as_str()) {
            Selection::AlreadyActive
        } else if self.records.contains_key(&symbol) {
            Selection::Restored
        } else {
            self.records
                .insert(symbol.clone(), StockRecord::new(symbol.clone()));
            Selection::Created
        };

        if selection != Selection::AlreadyActive {
            info!(symbol = %symbol, ?selection, "active stock changed");
            self.active = Some(symbol.clone());
        }

        (symbol, selection)
    }

    pub fn active(&self) -> Option<&StockRecord> {
        self.active.as_ref().and_then(|s| self.records.get(s))
    }

    pub fn active_mut(&mut self) -> Option<&mut StockRecord> {
        self.active.as_ref().and_then(|s| self.records.get_mut(s))
    }

    /// All symbols ever selected, ascending.
    pub fn history(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_identity() {
        let mut reg = StockRegistry::new();

        assert_eq!(
            reg.select_or_create("aapl"),
            ("AAPL".to_string(), Selection::Created)
        );
        assert_eq!(
            reg.select_or_create("AAPL"),
            ("AAPL".to_string(), Selection::AlreadyActive)
        );
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.active().map(|r| r.symbol()), Some("AAPL"));
    }

    #[test]
    fn new_symbol_starts_empty_and_old_symbol_restores_fields() {
        let mut reg = StockRegistry::new();

        reg.select_or_create("aapl");
        if let Some(rec) = reg.active_mut() {
            rec.add_fields("p o");
        }

        let (_, sel) = reg.select_or_create("msft");
        assert_eq!(sel, Selection::Created);
        assert!(reg.active().is_some_and(|r| r.fields().is_empty()));

        let (_, sel) = reg.select_or_create(" Aapl ");
        assert_eq!(sel, Selection::Restored);
        assert_eq!(reg.active().map(|r| r.fields().to_vec()), Some(vec![
            "p".to_string(),
            "o".to_string()
        ]));
    }

    #[test]
    fn history_lists_every_symbol() {
        let mut reg = StockRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.active().is_none());

        reg.select_or_create("tsla");
        reg.select_or_create("aapl");
        reg.select_or_create("tsla");

        assert_eq!(reg.history(), vec!["AAPL", "TSLA"]);
    }
}
