use antiox_core::domain::common::{
    AnalysisConfig, AntioxConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_LLM_TIMEOUT_SECS, LLMConfig,
};
use clap::{ArgAction, Args as ClapArgs, Parser};

pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "antiox-api", version, about = "Antioxidant Protection Index API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(
        long,
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = DEFAULT_LLM_TIMEOUT_SECS)]
    pub llm_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalysisArgs {
    /// Reject analysis requests carrying more inputs than this.
    #[arg(long, env = "MAX_INPUTS")]
    pub max_inputs: Option<usize>,

    /// Largest accepted analysis body. Images travel base64-encoded inside it.
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for AntioxConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout_secs: args.llm.llm_timeout_secs,
            },
            analysis: AnalysisConfig {
                max_inputs: args.analysis.max_inputs,
            },
        }
    }
}
