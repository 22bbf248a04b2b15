use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "careerforge")]
#[command(about = "AI career content and brand naming gateway")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // OpenAI-compatible upstream base URL
    #[arg(short, long, default_value = "https://api.openai.com")]
    pub upstream_url: String,

    // Upstream model id
    #[arg(short, long, default_value = "gpt-4o-mini")]
    pub model: String,

    // Upstream API key, from deployment configuration only
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // Career endpoint: max requests per window
    #[arg(long, default_value_t = 15)]
    pub career_rate_limit: u32,

    // Naming endpoint: max requests per window
    #[arg(long, default_value_t = 10)]
    pub naming_rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // DNS-over-HTTPS resolver endpoint
    #[arg(long, default_value = "https://dns.google/resolve")]
    pub doh_url: String,

    // Per-lookup DNS timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub dns_timeout: u64,

    // Rate map sweep interval in seconds
    #[arg(long, default_value_t = 300)]
    pub sweep_interval: u64,
}
