use spinwheel_shared::config::{WheelConfig, OVERRIDE_KEYS};
use web_sys::{window, UrlSearchParams};

/// Builds the wheel configuration from the page URL.
///
/// `?config=<json>` supplies a whole (or partial) configuration; the short
/// options (`duration`, `points`, `names`, ...) are applied on top of it.
/// Anything malformed is logged and skipped.
pub fn load_config() -> WheelConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    let params = match UrlSearchParams::new_with_str(&search) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Could not read query parameters: {:?}", e);
            return WheelConfig::default();
        }
    };

    let mut config = match params.get("config") {
        Some(json) => serde_json::from_str::<WheelConfig>(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config parameter: {}", e);
            WheelConfig::default()
        }),
        None => WheelConfig::default(),
    };

    for key in OVERRIDE_KEYS {
        if let Some(value) = params.get(key) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("Ignoring option: {}", e);
            }
        }
    }

    match config.checked() {
        Ok(config) => {
            log::debug!("Wheel config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            WheelConfig::default()
        }
    }
}
