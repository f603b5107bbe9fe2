use serde::{Deserialize, Serialize};

/// One tradable listing from the catalog resource. The upstream JSON uses
/// PascalCase keys (`Symbol`, `CompanyName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,

    // No skip_serializing_if here: the cache slot round-trips these records
    // through bincode, which needs every field present.
    #[serde(rename = "CompanyName", default)]
    pub company_name: Option<String>,
}

impl SymbolRecord {
    /// Label for list rows: symbol alone, or "SYMBOL (Company Name)".
    pub fn display_label(&self) -> String {
        match &self.company_name {
            Some(name) if !name.is_empty() => format!("{} ({})", self.symbol, name),
            _ => self.symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pascal_case_keys() {
        let rec: SymbolRecord =
            serde_json::from_str(r#"{"Symbol":"RELIANCE","CompanyName":"Reliance Industries"}"#)
                .unwrap();
        assert_eq!(rec.symbol, "RELIANCE");
        assert_eq!(rec.company_name.as_deref(), Some("Reliance Industries"));
    }

    #[test]
    fn company_name_is_optional() {
        let rec: SymbolRecord = serde_json::from_str(r#"{"Symbol":"TCS"}"#).unwrap();
        assert_eq!(rec.symbol, "TCS");
        assert!(rec.company_name.is_none());
        assert_eq!(rec.display_label(), "TCS");
    }
}
