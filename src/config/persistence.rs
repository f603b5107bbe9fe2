//! File persistence and serialization configuration

/// Configuration for the catalog cache slot
pub struct CatalogCacheConfig {
    /// Single-slot cache file holding the whole serialized catalog
    pub slot_path: &'static str,
    /// Current version of the cache serialization format
    pub version: u32,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub catalog: CatalogCacheConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    catalog: CatalogCacheConfig {
        slot_path: "catalog_cache.bin",
        version: 1,
    },
    app: AppPersistenceConfig {
        state_path: ".chart_hopper.json",
    },
};
