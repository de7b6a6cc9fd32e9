//! # 配置装载
//!
//! 叠加顺序 (后者覆盖前者)：
//! 1. `AppConfig::default()`
//! 2. 可选的部署配置文件 `futdash.toml`
//! 3. 环境变量 `FUTDASH__SECTION__KEY`
//! 4. 兼容旧变量 `NEWSAPI_KEY` / `HF_API_TOKEN`，仅在上述来源均未提供时生效

use config::{Config, Environment, File, Source};
use futdash_core::config::AppConfig;

/// 部署配置文件名 (不含扩展名)
pub const CONFIG_FILE: &str = "futdash";

const ENV_PREFIX: &str = "FUTDASH";
const LEGACY_NEWS_KEY: &str = "NEWSAPI_KEY";
const LEGACY_HF_TOKEN: &str = "HF_API_TOKEN";

/// # Summary
/// 从文件与进程环境装载配置。
///
/// # Returns
/// 合并后的配置，尚未校验，调用方需再执行 `validate()`。
pub fn load() -> Result<AppConfig, config::ConfigError> {
    let mut app_config = layered(File::with_name(CONFIG_FILE).required(false), environment())?;
    apply_legacy_env(
        &mut app_config,
        std::env::var(LEGACY_NEWS_KEY).ok(),
        std::env::var(LEGACY_HF_TOKEN).ok(),
    );
    Ok(app_config)
}

/// `FUTDASH__NEWS__API_KEY` → `news.api_key`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// 文件层在下，环境变量层在上
fn layered<F>(file: F, env: Environment) -> Result<AppConfig, config::ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}

/// 旧变量只填补空缺，不覆盖显式配置
fn apply_legacy_env(app_config: &mut AppConfig, news_key: Option<String>, hf_token: Option<String>) {
    if app_config.news.api_key.trim().is_empty()
        && let Some(key) = news_key.filter(|k| !k.trim().is_empty())
    {
        app_config.news.api_key = key;
    }

    let has_token = app_config
        .summary
        .api_token
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    if !has_token && let Some(token) = hf_token.filter(|t| !t.trim().is_empty()) {
        app_config.summary.api_token = Some(token);
    }
}
