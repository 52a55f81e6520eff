//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use std::sync::Arc;
use std::time::Duration;

use profile_card::config::SourceConfig;
use profile_card::source::{HttpUserSource, UserSource};
use profile_card::ui::profile::ProfileContainer;
use profile_card::ui::render::render_to_text;

/// HTTP source pointed at `base_url` with short timeouts.
pub fn http_source(base_url: &str, timeout_seconds: u32) -> Arc<dyn UserSource> {
    let config = SourceConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
        ..SourceConfig::default()
    };
    Arc::new(HttpUserSource::from_config(&config).expect("valid source config"))
}

/// Render a container into a 60x12 buffer as plain text.
pub fn screen(container: &ProfileContainer) -> String {
    render_to_text(container, 60, 12)
}

/// Apply pending intents until `done` holds or `timeout` elapses.
pub async fn pump_until(
    container: &mut ProfileContainer,
    timeout: Duration,
    done: impl Fn(&ProfileContainer) -> bool,
) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        container.apply_pending();
        if done(container) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}
