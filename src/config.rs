use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub catalog_path: PathBuf,
    pub export_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_path = env::var("STORE_PATH")
            .unwrap_or_else(|_| "storefront_store.json".to_string());
        let catalog_path =
            env::var("CATALOG_PATH").unwrap_or_else(|_| "products.json".to_string());
        let export_dir = env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
        Ok(Self {
            store_path: store_path.into(),
            catalog_path: catalog_path.into(),
            export_dir: export_dir.into(),
        })
    }
}
