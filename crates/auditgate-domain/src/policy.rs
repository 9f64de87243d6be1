use time::Duration;

/// Default look-ahead for flagging allowlist entries that are about to lapse.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub expiring_window_days: u32,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
        }
    }
}

impl EffectiveConfig {
    pub fn expiring_window(&self) -> Duration {
        Duration::days(i64::from(self.expiring_window_days))
    }
}
