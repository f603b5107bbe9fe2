use crate::data::SymbolCatalog;

/// One filter match, carrying its catalog position for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub symbol: String,
    pub company_name: Option<String>,
}

pub struct SearchIndex;

impl SearchIndex {
    /// Case-insensitive substring filter over symbol and company name. An
    /// empty query yields the whole catalog. Hits are ranked: symbol-prefix
    /// matches first, then symbol substrings, then name-only matches;
    /// catalog order breaks ties within a rank.
    pub fn filter(catalog: &SymbolCatalog, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();

        let mut ranked: Vec<(u8, SearchHit)> = Vec::new();
        for (index, record) in catalog.records().iter().enumerate() {
            let symbol_lower = record.symbol.to_lowercase();
            let name_lower = record
                .company_name
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default();

            let rank = if needle.is_empty() || symbol_lower.starts_with(&needle) {
                0
            } else if symbol_lower.contains(&needle) {
                1
            } else if name_lower.contains(&needle) {
                2
            } else {
                continue;
            };

            ranked.push((
                rank,
                SearchHit {
                    index,
                    symbol: record.symbol.clone(),
                    company_name: record.company_name.clone(),
                },
            ));
        }

        ranked.sort_by_key(|(rank, hit)| (*rank, hit.index));
        ranked.into_iter().map(|(_, hit)| hit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SymbolRecord;

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            SymbolRecord { symbol: "HDFCBANK".into(), company_name: Some("HDFC Bank".into()) },
            SymbolRecord { symbol: "ICICIBANK".into(), company_name: Some("ICICI Bank".into()) },
            SymbolRecord { symbol: "RELIANCE".into(), company_name: Some("Reliance Industries".into()) },
            SymbolRecord { symbol: "BANKBARODA".into(), company_name: Some("Bank of Baroda".into()) },
            SymbolRecord { symbol: "TCS".into(), company_name: Some("Tata Consultancy Services".into()) },
        ])
    }

    #[test]
    fn empty_query_returns_the_entire_catalog() {
        let hits = SearchIndex::filter(&catalog(), "");
        assert_eq!(hits.len(), 5);
        // catalog order preserved
        assert_eq!(hits[0].symbol, "HDFCBANK");
        assert_eq!(hits[4].symbol, "TCS");
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(SearchIndex::filter(&catalog(), "zzzz").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_over_symbol_and_name() {
        let hits = SearchIndex::filter(&catalog(), "reliance");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "RELIANCE");

        let hits = SearchIndex::filter(&catalog(), "tata");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "TCS");
    }

    #[test]
    fn symbol_prefix_outranks_substring_outranks_name_only() {
        let hits = SearchIndex::filter(&catalog(), "bank");
        let symbols: Vec<&str> = hits.iter().map(|h| h.symbol.as_str()).collect();
        // prefix first, then symbol substrings in catalog order; no name-only
        // hits here since every "bank" name also matches its symbol
        assert_eq!(symbols, vec!["BANKBARODA", "HDFCBANK", "ICICIBANK"]);
    }

    #[test]
    fn hits_carry_catalog_positions() {
        let hits = SearchIndex::filter(&catalog(), "icici");
        assert_eq!(hits[0].index, 1);
    }
}
