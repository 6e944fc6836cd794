use any_spawner::Executor;
use contracts::shared::routes::PageView;

use crate::domain::{decode, encode};
use crate::shared::config::{load_config, ControllerConfig};
use crate::shared::dom;

/// One-time runtime setup: config, logging, panic hook, async executor.
pub fn init() -> ControllerConfig {
    let (config, warning) = load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.level());
    console_error_panic_hook::set_once();
    install_executor();

    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    config
}

/// Install wasm-bindgen-futures as the global executor behind leptos
/// effects and tasks. `true` when this call installed it; `false` when one
/// was already in place.
pub fn install_executor() -> bool {
    Executor::init_wasm_bindgen().is_ok()
}

/// Mount the controller matching the current page path.
pub fn boot() {
    let config = init();

    let path = match dom::current_path() {
        Ok(path) => path,
        Err(err) => {
            log::error!("Cannot read page path: {}", err);
            return;
        }
    };

    match PageView::from_pathname(&path) {
        PageView::Encode => encode::mount(config),
        PageView::Decode => decode::mount(config),
        PageView::Other => log::debug!("No controller for {}", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_is_installed_globally() {
        install_executor();
        assert!(!install_executor());
    }
}
