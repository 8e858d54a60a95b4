//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod session;

pub use session::{run_session, SessionCommand};

use crate::config::settings::Settings;

/// Format the effective settings for the `config` command
pub fn format_settings(settings: &Settings, source: &std::path::Path) -> String {
    let mut output = String::new();
    output.push_str("budgetcalc Configuration\n");
    output.push_str("========================\n");
    output.push_str(&format!("Settings file:    {}\n", source.display()));
    output.push_str(&format!("Currency symbol:  {}\n", settings.currency_symbol));
    output.push_str(&format!("Negative input:   {:?}\n", settings.negative_input));
    output.push_str(&format!("Log level:        {}\n", settings.log_level));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_settings() {
        let text = format_settings(&Settings::default(), Path::new("/tmp/config.json"));
        assert!(text.contains("/tmp/config.json"));
        assert!(text.contains("Currency symbol:  $"));
        assert!(text.contains("Negative input:   Clamp"));
    }
}
