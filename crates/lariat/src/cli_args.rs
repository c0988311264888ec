//! All the CLI arguments for Lariat

/// The name of the default config file.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "lariat.toml";

/// Fill your terminal with a lasso and dust
#[derive(clap::Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
#[non_exhaustive]
pub struct CliArgs {
    /// Name of the effect(s) to use.
    #[arg(short, long("use"))]
    pub enabled_effects: Vec<String>,

    /// Use a custom config directory.
    #[arg(long)]
    pub config_dir: Option<std::path::PathBuf>,

    /// The name of the main config file, relative to the config directory.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub main_config: std::path::PathBuf,

    /// Override the config file's log path.
    #[arg(long)]
    pub log_path: Option<std::path::PathBuf>,

    /// Override the config file's log level.
    #[arg(long)]
    pub log_level: Option<crate::config::main::LogLevel>,

    /// Start with the ambient night mode already lit.
    #[arg(long)]
    pub night: bool,
}
