use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "HASHLINK_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "HASHLINK_GATEWAY_BASE_URL";
pub const KEY_PREFIX_LEN_ENV: &str = "HASHLINK_GATEWAY_KEY_PREFIX_LEN";
pub const LOG_FORMAT_ENV: &str = "HASHLINK_GATEWAY_LOG_FORMAT";
pub const STORE_CAPACITY_ENV: &str = "HASHLINK_GATEWAY_STORE_CAPACITY";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_KEY_PREFIX_LEN: &str = "8";
pub const DEFAULT_STORE_CAPACITY: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashlink-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public base URL that shortened links are rendered under.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Digest bytes kept per key; keys are twice as many hex characters.
    #[arg(
        long,
        env = KEY_PREFIX_LEN_ENV,
        default_value = DEFAULT_KEY_PREFIX_LEN,
        value_parser = clap::value_parser!(u8).range(1..=32),
    )]
    pub key_prefix_len: u8,

    /// Entries to preallocate in the in-memory store.
    #[arg(long, env = STORE_CAPACITY_ENV, default_value = DEFAULT_STORE_CAPACITY)]
    pub store_capacity: usize,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
