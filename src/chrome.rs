//! Platform Chrome
//!
//! Status bar tint and platform detection. Purely decorative.

use tracing::{debug, warn};

/// Status bar / browser toolbar color
pub const STATUS_BAR_COLOR: &str = "#1c1d25";
pub const LOGO_URL: &str = "https://www.dropbox.com/s/yv6i5ngootzz7bu/swapi.b0c6107a.png?dl=1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Other,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_platform() -> Platform {
    use std::sync::OnceLock;
    static PLATFORM: OnceLock<Platform> = OnceLock::new();

    *PLATFORM.get_or_init(|| {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| Platform::from_user_agent(&ua))
            .unwrap_or(Platform::Other)
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_platform() -> Platform {
    Platform::Other
}

/// Tint the status bar through the `theme-color` meta tag, creating it if needed
pub fn apply_status_bar(color: &str) {
    match set_theme_color(color) {
        Some(()) => debug!(color, "status bar tinted"),
        None => warn!("could not set theme-color meta tag"),
    }
}

fn set_theme_color(color: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let meta = match document.query_selector("meta[name=\"theme-color\"]").ok()? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta").ok()?;
            created.set_attribute("name", "theme-color").ok()?;
            document.head()?.append_child(&created).ok()?;
            created
        }
    };
    meta.set_attribute("content", color).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_user_agent() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile";
        assert_eq!(Platform::from_user_agent(iphone), Platform::Ios);
        assert_eq!(Platform::from_user_agent(android), Platform::Other);
        assert_eq!(Platform::from_user_agent(""), Platform::Other);
    }
}
