use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::api::types::ApiResult;
use crate::config::NekoConfig;
use crate::modules::catalog::CatalogError;
use crate::neko::Neko;

pub static CONFIGURED_NEKO: OnceLock<Neko> = OnceLock::new();

pub fn configure_neko(config_toml: &str) -> Result<(), *mut ApiResult> {
    let config = NekoConfig::from_toml_str(config_toml)
        .map_err(|e| ApiResult::error(format!("Failed to configure: {}", e)).into_raw())?;

    let neko = Neko::new(config)
        .map_err(|e| ApiResult::error(format!("Failed to configure: {}", e)).into_raw())?;

    CONFIGURED_NEKO
        .set(neko)
        .map_err(|_| ApiResult::error("Neko already configured").into_raw())?;

    debug!("C API configured from TOML");
    Ok(())
}

/// The configured instance, or a default one until `configure_neko` succeeds.
pub fn current_neko() -> &'static Neko {
    static FALLBACK: OnceLock<Neko> = OnceLock::new();
    CONFIGURED_NEKO
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(Neko::default))
}

pub fn with_neko<F, T>(f: F) -> *mut ApiResult
where
    F: FnOnce(&Neko) -> Result<T, CatalogError>,
    T: Into<String>,
{
    match f(current_neko()) {
        Ok(data) => ApiResult::success(data).into_raw(),
        Err(error) => ApiResult::error(error.to_string()).into_raw(),
    }
}

pub fn format_json<T: Serialize + ?Sized>(value: &T) -> *mut ApiResult {
    match serde_json::to_string(value) {
        Ok(json) => ApiResult::success(json).into_raw(),
        Err(e) => ApiResult::error(format!("Failed to serialize response: {}", e)).into_raw(),
    }
}
