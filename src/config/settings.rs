// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
///
/// Layered from defaults, optional `config/*.toml` files and
/// `SCRUBRS__`-prefixed environment variables, in that order.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub compliance: ComplianceSettings,
    pub scrub: ScrubSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    /// Seconds
    pub connect_timeout: Option<u64>,
    /// Seconds
    pub idle_timeout: Option<u64>,
}

/// Vendor checker configuration.
#[derive(Debug, Deserialize)]
pub struct ComplianceSettings {
    /// Per-checker deadline enforced by the aggregator
    pub checker_timeout_ms: u64,
    pub tcpa: TcpaSettings,
    pub blacklist: BlacklistSettings,
    pub synergy: SynergySettings,
    pub webrecon: WebreconSettings,
}

#[derive(Debug, Deserialize)]
pub struct TcpaSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct BlacklistSettings {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct SynergySettings {
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
pub struct WebreconSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub session_ttl_secs: u64,
}

/// Bulk scrub pagination limits.
#[derive(Debug, Deserialize)]
pub struct ScrubSettings {
    pub batch_size: u64,
    /// Safety cap on pages per run
    pub max_batches: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default compliance settings; credentials have no default
            .set_default("compliance.checker_timeout_ms", 10_000)?
            .set_default(
                "compliance.tcpa.base_url",
                "https://api.tcpalitigatorlist.com",
            )?
            .set_default("compliance.tcpa.username", "")?
            .set_default("compliance.tcpa.password", "")?
            .set_default(
                "compliance.blacklist.base_url",
                "https://api.blacklistalliance.net",
            )?
            .set_default("compliance.blacklist.api_key", "")?
            .set_default("compliance.synergy.api_url", "")?
            .set_default("compliance.webrecon.base_url", "https://www.webrecon.com")?
            .set_default("compliance.webrecon.username", "")?
            .set_default("compliance.webrecon.password", "")?
            .set_default("compliance.webrecon.session_ttl_secs", 1800)?
            // Default scrub pagination settings
            .set_default("scrub.batch_size", 500)?
            .set_default("scrub.max_batches", 10_000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCRUBRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
