use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spamcheck-server")]
#[command(author, version, about = "Spam/ham classification service", long_about = None)]
pub struct Cli {
    /// Configuration file path (ignored if it does not exist)
    #[arg(short, long, env = "SPAMCHECK_CONFIG", default_value = "spamcheck.yaml")]
    pub config: PathBuf,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding spam_model.json and tfidf_vectorizer.json
    /// (defaults to the executable's directory)
    #[arg(short = 'm', long, env = "SPAMCHECK_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, env = "SPAMCHECK_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}
