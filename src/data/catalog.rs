//! Symbol catalog: the ordered list of listings the pager walks, with a
//! single-slot on-disk cache in front of the resource fetch.

use {
    crate::{
        config::{CATALOG, PERSISTENCE, YAHOO},
        domain::SymbolRecord,
        error::CatalogError,
    },
    anyhow::Context,
    serde::{Deserialize, Serialize},
    std::{fmt, fs, path::Path, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Ordered, immutable-after-load symbol list.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    records: Vec<SymbolRecord>,
}

impl SymbolCatalog {
    pub fn new(records: Vec<SymbolRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Result<&SymbolRecord, CatalogError> {
        self.records.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// First exact match, case-sensitive. Catalog symbols are upper-case by
    /// convention and search hits come from the same records, so no folding.
    pub fn find_index(&self, symbol: &str) -> Option<usize> {
        self.records.iter().position(|r| r.symbol == symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    CacheSlot,
    Resource,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CacheSlot => write!(f, "cache slot"),
            Self::Resource => write!(f, "resource"),
        }
    }
}

pub struct CatalogLoad {
    pub catalog: SymbolCatalog,
    pub source: CatalogSource,
}

/// Cache-first load. A cache hit short-circuits the resource fetch entirely
/// (the slot carries no TTL; `--prefer-api` is the refresh path). A fresh
/// fetch overwrites the slot whole, no merging.
pub async fn load_catalog(
    prefer_api: bool,
    resource_override: Option<&str>,
) -> Result<CatalogLoad, CatalogError> {
    let slot_path = Path::new(PERSISTENCE.catalog.slot_path);

    if !prefer_api {
        if let Some(records) = read_cache_slot(slot_path) {
            return Ok(CatalogLoad {
                catalog: SymbolCatalog::new(records),
                source: CatalogSource::CacheSlot,
            });
        }
    }

    let resource = resource_override.unwrap_or(CATALOG.resource);
    let records = fetch_resource(resource).await?;
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    if let Err(e) = write_cache_slot(slot_path, &records) {
        // The slot is an optimization; a failed write must not fail the load.
        log::warn!("catalog cache write failed: {e:#}");
    }

    Ok(CatalogLoad {
        catalog: SymbolCatalog::new(records),
        source: CatalogSource::Resource,
    })
}

async fn fetch_resource(resource: &str) -> Result<Vec<SymbolRecord>, CatalogError> {
    let text = if resource.starts_with("http://") || resource.starts_with("https://") {
        let client = reqwest::Client::builder()
            .user_agent(YAHOO.client.user_agent)
            .timeout(Duration::from_millis(YAHOO.client.timeout_ms))
            .build()?;
        client.get(resource).send().await?.error_for_status()?.text().await?
    } else {
        fs::read_to_string(resource)?
    };

    parse_catalog_json(&text)
}

fn parse_catalog_json(text: &str) -> Result<Vec<SymbolRecord>, CatalogError> {
    let records: Vec<SymbolRecord> = serde_json::from_str(text)?;
    // Blank symbols can't be addressed or fetched; drop them like any other
    // invalid upstream row.
    Ok(records.into_iter().filter(|r| !r.symbol.is_empty()).collect())
}

// ── Cache slot ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct CacheSlot {
    version: u32,
    records: Vec<SymbolRecord>,
}

fn read_cache_slot(path: &Path) -> Option<Vec<SymbolRecord>> {
    let bytes = fs::read(path).ok()?;
    let records = decode_cache_slot(&bytes)?;

    #[cfg(debug_assertions)]
    if DF.log_cache {
        log::info!("catalog cache hit: {} symbols from {:?}", records.len(), path);
    }

    Some(records)
}

fn write_cache_slot(path: &Path, records: &[SymbolRecord]) -> anyhow::Result<()> {
    let bytes = encode_cache_slot(records)?;
    fs::write(path, bytes).with_context(|| format!("writing catalog cache slot {path:?}"))?;

    #[cfg(debug_assertions)]
    if DF.log_cache {
        log::info!("catalog cache slot rewritten: {} symbols", records.len());
    }

    Ok(())
}

/// An undecodable, version-mismatched, or empty slot reads as a miss, never
/// an error.
fn decode_cache_slot(bytes: &[u8]) -> Option<Vec<SymbolRecord>> {
    let slot: CacheSlot = bincode::deserialize(bytes).ok()?;
    if slot.version != PERSISTENCE.catalog.version || slot.records.is_empty() {
        return None;
    }
    Some(slot.records)
}

fn encode_cache_slot(records: &[SymbolRecord]) -> anyhow::Result<Vec<u8>> {
    bincode::serialize(&CacheSlot {
        version: PERSISTENCE.catalog.version,
        records: records.to_vec(),
    })
    .context("serializing catalog cache slot")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog3() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            SymbolRecord { symbol: "RELIANCE".into(), company_name: Some("Reliance Industries".into()) },
            SymbolRecord { symbol: "TCS".into(), company_name: None },
            SymbolRecord { symbol: "INFY".into(), company_name: Some("Infosys".into()) },
        ])
    }

    #[test]
    fn get_checks_bounds() {
        let catalog = catalog3();
        assert_eq!(catalog.get(1).unwrap().symbol, "TCS");
        let err = catalog.get(3).unwrap_err();
        assert!(matches!(err, CatalogError::IndexOutOfRange { index: 3, len: 3 }));

        let empty = SymbolCatalog::default();
        assert!(matches!(empty.get(0), Err(CatalogError::IndexOutOfRange { .. })));
    }

    #[test]
    fn find_index_is_exact_and_case_sensitive() {
        let catalog = catalog3();
        assert_eq!(catalog.find_index("INFY"), Some(2));
        assert_eq!(catalog.find_index("infy"), None);
        assert_eq!(catalog.find_index("INF"), None);
    }

    #[test]
    fn parse_drops_blank_symbols() {
        let records = parse_catalog_json(
            r#"[{"Symbol":"TCS"},{"Symbol":""},{"Symbol":"INFY","CompanyName":"Infosys"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "TCS");
    }

    #[test]
    fn cache_slot_round_trips() {
        let records = catalog3().records().to_vec();
        let bytes = encode_cache_slot(&records).unwrap();
        assert_eq!(decode_cache_slot(&bytes), Some(records));
    }

    #[test]
    fn cache_slot_version_mismatch_reads_as_miss() {
        let stale = bincode::serialize(&CacheSlot {
            version: PERSISTENCE.catalog.version + 1,
            records: catalog3().records().to_vec(),
        })
        .unwrap();
        assert_eq!(decode_cache_slot(&stale), None);
    }

    #[test]
    fn empty_or_garbage_slot_reads_as_miss() {
        let empty = bincode::serialize(&CacheSlot { version: PERSISTENCE.catalog.version, records: vec![] }).unwrap();
        assert_eq!(decode_cache_slot(&empty), None);
        assert_eq!(decode_cache_slot(b"not a slot"), None);
    }
}
