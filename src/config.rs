use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the remote collection API
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote collection API.
    pub base_url: String,
    /// Per-request timeout for upstream calls, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
}

impl AppConfig {
    /// Load configuration from defaults, optional config file, environment
    /// (`WORKBENCH_` prefix, `__` separator), and CLI flags.
    ///
    /// Priority: CLI flag > env var > config file > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 30)?
            .set_default("resilience.timeout_disabled", false)?;

        // Optional config file (YAML), via --config or CONFIG_FILE
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        }

        // Environment variables, e.g. WORKBENCH_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("WORKBENCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags win over everything. clap also resolves the per-flag
        // env vars (PORT, API_BASE_URL, ...), so those land here too.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(base_url) = cli.api_base_url {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
