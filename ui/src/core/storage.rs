//! Local persistence for the visitor's theme preference.
//!
//! Web builds use `localStorage`; native builds keep a small JSON file under
//! the platform data directory. Either way the surface is the same: load the
//! stored theme id if one exists, store the current one on switch. Load
//! failures are treated as "no preference" so a corrupt record can never
//! prevent the page from rendering.

#[cfg(not(target_arch = "wasm32"))]
use serde::{Deserialize, Serialize};

const THEME_KEY: &str = "theme";

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Preferences {
    theme: String,
    updated_at: String,
}

/// The previously stored theme id, if any.
pub fn load_theme_id() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(THEME_KEY).ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = preferences_path().ok()?;
        let raw = std::fs::read_to_string(path).ok()?;
        let prefs: Preferences = serde_json::from_str(&raw).ok()?;
        Some(prefs.theme)
    }
}

/// Persist the active theme id.
pub fn store_theme_id(id: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()
            .ok_or("window unavailable")?
            .local_storage()
            .map_err(|_| "localStorage unavailable".to_string())?
            .ok_or("localStorage disabled")?;
        storage
            .set_item(THEME_KEY, id)
            .map_err(|_| "localStorage write blocked".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use time::format_description::well_known::Rfc3339;
        use time::OffsetDateTime;

        let path = preferences_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
        }
        let prefs = Preferences {
            theme: id.to_string(),
            updated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        };
        let json = serde_json::to_string_pretty(&prefs).map_err(|err| err.to_string())?;
        std::fs::write(&path, json).map_err(|err| err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "Folio", "Folio")
        .ok_or("Unable to determine preferences directory")?;
    Ok(dirs.data_dir().join("preferences.json"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip_as_json() {
        let prefs = Preferences {
            theme: "purple".into(),
            updated_at: "2026-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, "purple");
    }
}
