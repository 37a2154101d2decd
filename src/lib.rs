//! gather-modules - one page of module visualisations from many antiSMASH runs
//!
//! antiSMASH draws the NRPS/PKS module ("bubble") view of each region on that
//! run's own result page. This crate collects those drawings from any number of
//! result directories into a single static page, so modules from different
//! genomes can be compared side by side.
//!
//! # Pipeline
//!
//! 1. **Regions** ([`extract::results`]): every region of every record is read
//!    from the results JSON and given a positional anchor (`r1c1`, `r1c2`, ...).
//! 2. **Module data** ([`extract::regions`]): the `resultsData` assignment is
//!    cut out of `regions.js` and the bubble view of each anchor is kept.
//! 3. **Merge** ([`gather`]): regions are joined to their module data per
//!    directory. Regions without data, and records left empty, are dropped.
//! 4. **Page** ([`report`]): `index.html`, `data.js` and the bundled assets are
//!    written to the output directory.
//!
//! # Quick Start
//!
//! ```no_run
//! use gather_modules::{report, GatherConfig};
//! use std::path::Path;
//!
//! let config = GatherConfig::new().with_assets_dir("dependencies");
//! let index = report::generate_page(Path::new("antismash_runs"), Path::new("modules"), &config)?;
//! println!("Page written to {}", index.display());
//! # Ok::<(), gather_modules::GatherError>(())
//! ```
//!
//! # Modules
//!
//! - [`config`]: fixed file names and keys, run configuration
//! - [`extract`]: results JSON and `regions.js` readers
//! - [`gather`]: per-directory merge and multi-directory aggregation
//! - [`report`]: page, data file and asset output

pub mod config;
pub mod error;
pub mod extract;
pub mod gather;
pub mod report;

pub use config::GatherConfig;
pub use error::{GatherError, Result};
pub use extract::{Anchor, Area, BubbleData, LocatedArea};
pub use gather::{gather_all, gather_from_dir, ModuleArea, ModuleRecord};
pub use report::generate_page;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is reachable from the crate root.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _config = GatherConfig::new();
        let anchor = Anchor::from_indices(0, 0);
        assert_eq!(anchor.to_string(), "r1c1");
        let _ = BubbleData::default();
    }

    #[test]
    fn test_error_accessible() {
        let err = GatherError::IncompatibleSchema(9);
        assert!(err.to_string().contains("incompatible"));
    }
}
