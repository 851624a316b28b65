use confik::Configuration;

fn default_server_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_data_path() -> String {
    "data/data.json".to_string()
}

fn default_static_dir() -> String {
    "./resources/static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

#[derive(Debug, Configuration, Clone)]
pub struct CatalogConfig {
    #[confik(default = default_server_addr())]
    pub server_addr: String,
    #[confik(default = default_data_path())]
    pub data_path: String,
    #[confik(default = default_static_dir())]
    pub static_dir: String,
    #[confik(default = default_log_level())]
    pub log_level: String,
}

#[derive(Debug, Configuration, Clone)]
pub struct BrowserConfig {
    #[confik(default = default_api_url())]
    pub api_url: String,
    #[confik(default = crate::constants::DEFAULT_LIMIT)]
    pub items_per_page: usize,
    #[confik(default = default_log_level())]
    pub log_level: String,
}
