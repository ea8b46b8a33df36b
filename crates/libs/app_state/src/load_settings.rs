use crate::{AppConstants, AppSettings};
use color_eyre::eyre::Result;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

const SETTINGS_FILE: &str = "config/settings.yaml";

/// Loads the application settings from the yaml file (if present) merged
/// with `APP__`-prefixed environment variables. `.env` is read first so a
/// local `APP__SECRETS__DATABASE_URL` can override the file.
pub fn load_app_settings() -> Result<AppSettings> {
    dotenv::from_path(".env").ok();

    let mut builder = config::Config::builder();
    if Path::new(SETTINGS_FILE).exists() {
        builder = builder.add_source(config::File::with_name(SETTINGS_FILE));
    } else {
        warn!("No {SETTINGS_FILE} found, using defaults and environment only");
    }
    builder = builder.add_source(
        config::Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;
    Ok(settings)
}

fn load_app_constants() -> Result<AppConstants> {
    let mut builder = config::Config::builder();
    if Path::new(SETTINGS_FILE).exists() {
        builder = builder.add_source(config::File::with_name(SETTINGS_FILE));
    }
    let config = builder.build()?;
    // The constants live under their own key so they can share the file
    // with AppSettings.
    let constants = config
        .get::<AppConstants>("constants")
        .unwrap_or_default();
    Ok(constants)
}

pub static CONSTANTS: LazyLock<AppConstants> =
    LazyLock::new(|| load_app_constants().expect("Cannot load app constants."));

#[must_use]
pub fn constants() -> &'static AppConstants {
    &CONSTANTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_sane_defaults() {
        let constants = AppConstants::default();
        assert_eq!(constants.story.active_window_hours, 24);
        assert_eq!(constants.album.unassigned_album_id, -1);
        assert!(constants.auth.refresh_token_expiry_days > 0);
    }

    #[test]
    fn constants_accessor_does_not_require_a_settings_file() {
        let constants = constants();
        assert_eq!(constants.feed.default_page_size, 6);
    }
}
