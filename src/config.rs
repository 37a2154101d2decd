//! Fixed names and the runtime configuration for a gathering run
//!
//! The constants here describe the antiSMASH output layout this tool reads
//! and the page layout it writes. None of them change at runtime.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Key holding the module ("bubble") visualisation of a region, one of the
/// `antismash.outputs.html.visualisers.*` entries in `regions.js`
pub const BUBBLE_VIEW_KEY: &str = "antismash.outputs.html.visualisers.bubble_view";

/// Line prefix of the assignment carrying per-region results in `regions.js`
pub const RESULTS_DATA_MARKER: &str = "var resultsData = ";

/// Any top-level declaration; ends the results assignment
pub const DECLARATION_PREFIX: &str = "var ";

/// Companion script written by antiSMASH next to the results JSON
pub const REGIONS_FILE: &str = "regions.js";

/// Extension of the full results file
pub const RESULTS_EXTENSION: &str = "json";

/// Results file schema versions this tool understands
pub const SUPPORTED_SCHEMAS: RangeInclusive<i64> = 2..=3;

pub const HTML_FILE: &str = "index.html";
pub const DATA_FILE: &str = "data.js";

/// Assignment prefix of the generated data file, read by the page script as `data`
pub const DATA_VARIABLE_PREFIX: &str = "var data = ";

/// Suffix the antiSMASH drawing code expects on a bubble container id
pub const CONTAINER_SUFFIX: &str = "-domain-bubble-svg-container";

/// Name of the bundled static asset directory
pub const ASSETS_DIR_NAME: &str = "dependencies";

/// Settings for one gathering run
#[derive(Debug, Clone, Default)]
pub struct GatherConfig {
    /// Explicit asset directory; resolved with [`default_assets_dir`] when unset
    pub assets_dir: Option<PathBuf>,
    /// Open the generated page once written
    pub open_report: bool,
    /// Suppress progress output
    pub quiet: bool,
}

impl GatherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    pub fn with_open_report(mut self, open: bool) -> Self {
        self.open_report = open;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The asset directory this run copies from
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(default_assets_dir)
    }
}

/// `dependencies/` beside the executable, falling back to the one in the source tree.
pub fn default_assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR_NAME)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_schemas() {
        assert!(!SUPPORTED_SCHEMAS.contains(&1));
        assert!(SUPPORTED_SCHEMAS.contains(&2));
        assert!(SUPPORTED_SCHEMAS.contains(&3));
        assert!(!SUPPORTED_SCHEMAS.contains(&4));
    }

    #[test]
    fn test_builder() {
        let config = GatherConfig::new()
            .with_assets_dir("/opt/assets")
            .with_open_report(true)
            .with_quiet(true);
        assert_eq!(config.assets_dir(), PathBuf::from("/opt/assets"));
        assert!(config.open_report);
        assert!(config.quiet);
    }

    #[test]
    fn test_default_assets_dir_name() {
        let dir = GatherConfig::new().assets_dir();
        assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some(ASSETS_DIR_NAME));
    }
}
