//! Configuration structs

mod app_config;

pub use app_config::{
    AccountConfig, AppConfig, AppSettings, CacheBackend, CacheConfig, ConfigError,
    DatabaseConfig, Environment, RedisConfig, SeedConfig, StorageConfig,
};
