use anyhow::{bail, Result};

const DATABASE_PATH_VAR: &str = "DATABASE_PATH";
const REPORT_POLICY_VAR: &str = "SWISS_REPORT_POLICY";

/// How match reports are checked against the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPolicy {
    /// Record any (winner, loser) pair, scheduled or not.
    #[default]
    Unconditional,
    /// Only accept results for a pending scheduled match, which is then completed.
    RequireScheduled,
}

impl ReportPolicy {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "unconditional" | "any" => Ok(ReportPolicy::Unconditional),
            "scheduled" | "require-scheduled" => Ok(ReportPolicy::RequireScheduled),
            other => bail!("Unknown report policy: {}", other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TournamentSettings {
    pub report_policy: ReportPolicy,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "swiss_tournament.db".to_string(),
            pool_size: 4,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub tournament: TournamentSettings,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH` and `SWISS_REPORT_POLICY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup(DATABASE_PATH_VAR) {
            config.database.path = path;
        }
        if let Some(policy) = lookup(REPORT_POLICY_VAR) {
            config.tournament.report_policy = ReportPolicy::parse(&policy)?;
        }

        Ok(config)
    }
}
