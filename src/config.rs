//! Process Configuration
//!
//! Settings come from command-line flags first, then `ENELLERETT_*` environment
//! variables, then built-in defaults.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const USAGE: &str = "Usage: enellerett [--bind <addr:port>] [--en <file>] [--ett <file>] \
[--hit-queue <n>] [--stats-interval <secs>]";

const DEFAULT_BIND: &str = "0.0.0.0:6969";
const DEFAULT_EN: &str = "data/en.txt";
const DEFAULT_ETT: &str = "data/ett.txt";
const DEFAULT_HIT_QUEUE: usize = 1024;
const DEFAULT_STATS_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Word list of "en" nouns, one per line.
    pub en_path: PathBuf,
    /// Word list of "ett" nouns, one per line.
    pub ett_path: PathBuf,
    /// Maximum number of hits waiting to be written.
    pub hit_queue_capacity: usize,
    pub stats_interval: Duration,
}

impl Config {
    /// Reads the real process arguments and environment.
    pub fn from_env() -> Result<Option<Self>> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Builds a config from `args` (without the program name) and an
    /// environment lookup. Returns `Ok(None)` when help was requested.
    pub fn parse<F>(args: &[String], env: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env("ENELLERETT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let mut en_path = env("ENELLERETT_EN").unwrap_or_else(|| DEFAULT_EN.to_string());
        let mut ett_path = env("ENELLERETT_ETT").unwrap_or_else(|| DEFAULT_ETT.to_string());
        let mut hit_queue_capacity = DEFAULT_HIT_QUEUE;
        let mut stats_interval_secs = DEFAULT_STATS_INTERVAL_SECS;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--help" || flag == "-h" {
                return Ok(None);
            }

            let value = args
                .get(i + 1)
                .with_context(|| format!("{} requires a value", flag))?;

            match flag {
                "--bind" => bind = value.clone(),
                "--en" => en_path = value.clone(),
                "--ett" => ett_path = value.clone(),
                "--hit-queue" => {
                    hit_queue_capacity = value
                        .parse()
                        .with_context(|| format!("invalid --hit-queue value '{}'", value))?;
                }
                "--stats-interval" => {
                    stats_interval_secs = value
                        .parse()
                        .with_context(|| format!("invalid --stats-interval value '{}'", value))?;
                }
                _ => anyhow::bail!("unknown argument '{}'\n{}", flag, USAGE),
            }
            i += 2;
        }

        if hit_queue_capacity == 0 {
            anyhow::bail!("--hit-queue must be at least 1");
        }
        if stats_interval_secs == 0 {
            anyhow::bail!("--stats-interval must be at least 1 second");
        }

        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind))?;

        Ok(Some(Self {
            bind,
            en_path: PathBuf::from(en_path),
            ett_path: PathBuf::from(ett_path),
            hit_queue_capacity,
            stats_interval: Duration::from_secs(stats_interval_secs),
        }))
    }
}
