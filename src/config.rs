//! Environment-driven application configuration.
//!
//! Everything the engine consumes is carried in explicit structs handed in
//! at call time; env vars are read once at startup in `AppConfig::from_env`.

use serde::{Deserialize, Serialize};
use std::env;

use crate::signals::error::SignalError;

/// Deployment environment, used to pick the log formatter.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Which classification policy the zone classifier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ZonePolicy {
    /// Score by the longest horizon the price sits below; buy additionally
    /// requires the close to be below every trend value.
    BelowTrend,
    /// Score by the longest horizon the price is touching, falling back to
    /// proximity bands around the nearest horizon.
    TrendTouch,
}

/// Volatility definition the buy threshold is calibrated against.
///
/// The two must never be mixed within one deployment; the threshold default
/// assumes `LogAnnualized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum VolatilityMethod {
    /// Std-dev of log returns, annualized by sqrt(252), in percent.
    LogAnnualized,
    /// Std-dev of simple percentage returns, unannualized.
    SimplePct,
}

/// Parameters of the signal engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// EMA horizons in trading days, shortest first.
    pub horizons: Vec<u32>,
    /// Trailing observations fed to the volatility estimator.
    pub volatility_lookback: usize,
    /// Buy gate: volatility must be at or below this, in percent.
    pub volatility_threshold_pct: f64,
    /// Touch tolerance for the trend-touch policy, in percent.
    pub touch_tolerance_pct: f64,
    pub policy: ZonePolicy,
    pub volatility_method: VolatilityMethod,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizons: vec![20, 50, 100, 200],
            volatility_lookback: 63,
            volatility_threshold_pct: 2.5,
            touch_tolerance_pct: 0.5,
            policy: ZonePolicy::BelowTrend,
            volatility_method: VolatilityMethod::LogAnnualized,
        }
    }
}

impl EngineConfig {
    /// Reject configurations the engine cannot run with.
    ///
    /// Horizons must be non-empty and strictly increasing; caught here so
    /// no computation starts on a bad config.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.horizons.is_empty() {
            return Err(SignalError::InvalidConfig("horizon list is empty".into()));
        }
        if self.horizons.iter().any(|&h| h == 0) {
            return Err(SignalError::InvalidConfig("horizon of 0 days".into()));
        }
        if self.horizons.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SignalError::InvalidConfig(
                "horizons must be strictly increasing".into(),
            ));
        }
        if self.volatility_threshold_pct < 0.0 {
            return Err(SignalError::InvalidConfig(
                "volatility threshold must be non-negative".into(),
            ));
        }
        if self.touch_tolerance_pct < 0.0 {
            return Err(SignalError::InvalidConfig(
                "touch tolerance must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Longest configured horizon in days.
    pub fn max_horizon(&self) -> u32 {
        self.horizons.last().copied().unwrap_or(0)
    }

    /// Calendar days of history to request: longest horizon plus a buffer.
    pub fn required_history_days(&self) -> u32 {
        (self.max_horizon() as f64 * 1.5) as u32
    }
}

/// SMTP delivery settings. Absent when the sender credentials are not set,
/// in which case the worker logs the report instead of mailing it.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay: String,
    pub sender: String,
    pub password: String,
    pub receivers: Vec<String>,
}

/// Top-level worker configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tickers: Vec<String>,
    /// Cron expression for in-process scheduling; `None` means run one
    /// batch and exit (external scheduler mode).
    pub report_cron: Option<String>,
    pub last_buy_path: String,
    pub mail: Option<MailConfig>,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tickers: vec![
                "NIFTYBEES.NS".to_string(),
                "BANKBEES.NS".to_string(),
                "GOLDBEES.NS".to_string(),
                "AUTOBEES.NS".to_string(),
                "ITBEES.NS".to_string(),
                "JUNIORBEES.NS".to_string(),
                "PHARMABEES.NS".to_string(),
                "SPY".to_string(),
                "QQQ".to_string(),
            ],
            report_cron: None,
            last_buy_path: "last_buy_dates.json".to_string(),
            mail: None,
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Assemble the configuration from environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tickers = env::var("TICKERS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|t: &Vec<String>| !t.is_empty())
            .unwrap_or(defaults.tickers);

        let mail = env::var("EMAIL_SENDER").ok().map(|sender| MailConfig {
            relay: env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            sender,
            password: env::var("EMAIL_PASSWORD").unwrap_or_default(),
            receivers: env::var("EMAIL_RECEIVERS")
                .unwrap_or_default()
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
        });

        let engine = EngineConfig {
            volatility_threshold_pct: env_f64(
                "VOLATILITY_THRESHOLD",
                defaults.engine.volatility_threshold_pct,
            ),
            touch_tolerance_pct: env_f64("TOUCH_TOLERANCE", defaults.engine.touch_tolerance_pct),
            policy: match env::var("ZONE_POLICY").ok().as_deref() {
                Some("TrendTouch") => ZonePolicy::TrendTouch,
                _ => ZonePolicy::BelowTrend,
            },
            ..defaults.engine
        };

        Self {
            tickers,
            report_cron: env::var("REPORT_CRON").ok().filter(|c| !c.is_empty()),
            last_buy_path: env::var("LAST_BUY_FILE")
                .unwrap_or_else(|_| defaults.last_buy_path.clone()),
            mail,
            engine,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
