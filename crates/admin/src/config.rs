use std::fs::File;

use anyhow::{anyhow, Context, Result};
use lesson_filter::{Overrides, SliceRule};
use serde::{Deserialize, Serialize};
use sevenedu_client::ApiToken;
use xdg::BaseDirectories;

/// Course whose lesson list carries a duplicated 40-lesson block at
/// positions 24..64, left behind by a botched re-import. The slice hides the
/// duplicate block until the backend record is repaired.
const DOUBLE_IMPORT_COURSE: &str = "a06d565b-1d61-4564-af5d-1ceb4cfb3f6b";

/// Course whose first 32 lessons belong to an older revision of the content.
// TODO: get the content team to confirm 32 is the right boundary.
const STALE_PREFIX_COURSE: &str = "16c43a51-8c65-4a29-995c-f2e8ab0d6073";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub token: ApiToken,

    /// Base URL override, mostly for pointing at staging.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-course lesson slice rules. These are corrections for broken
    /// backend course records, not business rules: drop an entry once its
    /// record is fixed, and every other course is unaffected.
    #[serde(default = "default_overrides")]
    pub overrides: Overrides,
}

/// The corrections currently needed in production.
pub fn default_overrides() -> Overrides {
    let mut overrides = Overrides::new();
    overrides.set(
        DOUBLE_IMPORT_COURSE,
        SliceRule::DropRange { start: 24, end: 64 },
    );
    overrides.set(STALE_PREFIX_COURSE, SliceRule::DropPrefix { count: 32 });
    overrides
}

impl Config {
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: None,
            overrides: default_overrides(),
        }
    }

    pub fn load() -> Result<Self> {
        let path = BaseDirectories::with_prefix("sevenedu-admin")?
            .find_config_file("config.json")
            .ok_or_else(|| anyhow!("config does not exist, run `init` first"))?;

        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path =
            BaseDirectories::with_prefix("sevenedu-admin")?.place_config_file("config.json")?;

        let mut file = File::create(&path).context("error opening config file")?;
        serde_json::to_writer(&mut file, &self).context("error serialising config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_courses_have_correction_entries() {
        let overrides = default_overrides();
        assert_eq!(
            overrides.rule_for(DOUBLE_IMPORT_COURSE),
            SliceRule::DropRange { start: 24, end: 64 }
        );
        assert_eq!(
            overrides.rule_for(STALE_PREFIX_COURSE),
            SliceRule::DropPrefix { count: 32 }
        );
        assert_eq!(overrides.rule_for("any-other-course"), SliceRule::Identity);
    }

    #[test]
    fn missing_overrides_field_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(config.overrides, default_overrides());
    }

    #[test]
    fn configured_overrides_replace_the_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"token": "abc", "overrides": {"c1": {"rule": "drop_prefix", "count": 3}}}"#,
        )
        .unwrap();
        assert_eq!(
            config.overrides.rule_for("c1"),
            SliceRule::DropPrefix { count: 3 }
        );
        assert_eq!(
            config.overrides.rule_for(DOUBLE_IMPORT_COURSE),
            SliceRule::Identity
        );
    }
}
