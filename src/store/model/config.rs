/// Client configs
#[derive(Debug, Clone)]
pub(crate) struct StoreConfig {
    pub base_url: String,
}

impl StoreConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            // request paths are joined with a slash
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
