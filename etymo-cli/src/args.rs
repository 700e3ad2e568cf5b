use clap::Parser;
use common_libs::error::ServiceExuctionResult;
use etymo_client::config::{ClientConfig, ConfigOverrides};
use etymo_client::constants::DEFAULT_CONFIG;

/// Look up etymologies from the command line. Without WORDs, one word per stdin line.
#[derive(Parser, Debug)]
#[command(name = "etymo", version, about)]
pub struct Args {
    /// JSON config file [default: config/etymo.json when present]
    #[arg(long)]
    pub config: Option<String>,

    /// Base url of the etymology service
    #[arg(long)]
    pub url: Option<String>,

    /// Response schema: similarity or legacy
    #[arg(long)]
    pub schema: Option<String>,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write every rendered panel to this JSON file
    #[arg(long)]
    pub output: Option<String>,

    /// log4rs yaml file
    #[arg(long)]
    pub log_config: Option<String>,

    pub words: Vec<String>,
}

impl Args {
    pub fn client_config(&self) -> ServiceExuctionResult<ClientConfig> {
        let (file, required) = match &self.config {
            Some(file) => (file.as_str(), true),
            None => (DEFAULT_CONFIG, false),
        };
        let overrides = ConfigOverrides {
            base_url: self.url.clone(),
            schema: self.schema.clone(),
            timeout_secs: self.timeout,
            log_config: self.log_config.clone(),
        };
        ClientConfig::load(file, required, |key| std::env::var(key).ok(), overrides)
    }
}
