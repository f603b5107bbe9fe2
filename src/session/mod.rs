mod pager;

pub use pager::Pager;

use crate::{
    config::NavPolicy,
    data::SymbolCatalog,
    domain::SymbolRecord,
    error::CatalogError,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Owned browsing state: the loaded catalog plus the pager walking it. Lives
/// on the App once the catalog load completes; nothing here is global.
pub struct Session {
    catalog: SymbolCatalog,
    pager: Pager,
}

impl Session {
    pub fn new(catalog: SymbolCatalog, policy: NavPolicy) -> Self {
        let pager = Pager::new(catalog.len(), policy);
        Self { catalog, pager }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn selected(&self) -> Option<&SymbolRecord> {
        let index = self.pager.index()?;
        self.catalog.get(index).ok()
    }

    /// Search activation path: resolve the symbol to its catalog position and
    /// move the pager there.
    pub fn select_symbol(&mut self, symbol: &str) -> Result<usize, CatalogError> {
        let index = self
            .catalog
            .find_index(symbol)
            .ok_or_else(|| CatalogError::SymbolNotFound(symbol.to_owned()))?;
        self.pager.set_index(index)?;

        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("selection moved to {} (index {})", symbol, index);
        }

        Ok(index)
    }

    /// Best-effort restore of a persisted selection; a vanished symbol just
    /// leaves the pager at the start.
    pub fn restore_symbol(&mut self, symbol: &str) -> bool {
        match self.select_symbol(symbol) {
            Ok(_) => true,
            Err(_) => {
                log::info!("persisted symbol {} no longer in catalog", symbol);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SymbolRecord;

    fn session() -> Session {
        let catalog = SymbolCatalog::new(vec![
            SymbolRecord { symbol: "A".into(), company_name: None },
            SymbolRecord { symbol: "B".into(), company_name: None },
            SymbolRecord { symbol: "C".into(), company_name: None },
        ]);
        Session::new(catalog, NavPolicy::Wrap)
    }

    #[test]
    fn select_symbol_moves_the_pager() {
        let mut s = session();
        assert_eq!(s.select_symbol("C").unwrap(), 2);
        assert_eq!(s.selected().unwrap().symbol, "C");
    }

    #[test]
    fn unknown_symbol_leaves_selection_unchanged() {
        let mut s = session();
        let err = s.select_symbol("ZZZ").unwrap_err();
        assert!(matches!(err, CatalogError::SymbolNotFound(sym) if sym == "ZZZ"));
        assert_eq!(s.selected().unwrap().symbol, "A");
    }

    #[test]
    fn restore_falls_back_quietly() {
        let mut s = session();
        assert!(s.restore_symbol("B"));
        assert!(!s.restore_symbol("GONE"));
        assert_eq!(s.selected().unwrap().symbol, "B");
    }
}
