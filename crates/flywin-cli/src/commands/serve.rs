//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flywin_core::audit::ClaudeClient;
use flywin_core::config::{
    AuditConfig, DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use flywin_core::AuditService;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3001")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model used for audits
    #[arg(long, env = "FLYWIN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Output token ceiling per audit
    #[arg(long, env = "FLYWIN_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Anthropic API base URL
    #[arg(long, env = "ANTHROPIC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for one model request, in seconds
    #[arg(long, env = "FLYWIN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: flywin-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Validated model settings from flags and environment.
    pub fn audit_config(&self) -> Result<AuditConfig> {
        let config = AuditConfig {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.audit_config()?;
    tracing::debug!(?config, "Loaded audit configuration");

    let client = ClaudeClient::new(&config)?;
    let service = AuditService::new(Arc::new(client));

    println!();
    println!(
        "  {} {}",
        "Flywin".cyan().bold(),
        "Audit Server".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!(
        "  {}        http://{}:{}/api/audit",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}      {}",
        "Model".green(),
        config.model
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    flywin_web::run_server(service, &args.host, args.port).await?;

    Ok(())
}
