//! Gathering module data from antiSMASH result directories
//!
//! A result directory holds the full results JSON and the `regions.js` script.
//! Each directory is reduced to the records that have at least one region with
//! module visualisation data; those records are then concatenated across
//! directories in the order the directories were given.
//!
//! Any failing directory aborts the whole gathering run.

use crate::config::{REGIONS_FILE, RESULTS_EXTENSION};
use crate::error::{GatherError, Result};
use crate::extract::{load_areas, load_bubble_data, BubbleData, LocatedArea};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One record and the regions of it that have module data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRecord {
    pub name: String,
    pub areas: Vec<ModuleArea>,
}

/// A region with the drawing data of its first module visualisation variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleArea {
    pub start: i64,
    pub end: i64,
    pub products: Vec<String>,
    pub bubbles: Value,
    /// Page element prefix, assigned when the page is rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl ModuleRecord {
    fn new(name: String) -> Self {
        Self { name, areas: Vec::new() }
    }
}

/// Directory entries sorted by file name, not descending into subdirectories
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            GatherError::io(&path, e.into())
        })?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Finds the full results file (`*.json`) of a result directory.
///
/// With several candidates the first by file name is used.
pub fn find_results_file(dir: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = sorted_entries(dir)?
        .into_iter()
        .filter(|p| !is_hidden(p) && p.is_file())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(RESULTS_EXTENSION))
        .collect();

    if candidates.is_empty() {
        return Err(GatherError::NoResultsFile(dir.to_path_buf()));
    }
    if candidates.len() > 1 {
        log::warn!(
            "{}: {} results files found, using {}",
            dir.display(),
            candidates.len(),
            candidates[0].display()
        );
    }
    Ok(candidates.swap_remove(0))
}

/// Joins regions with their module data, grouped by record in first-seen order.
///
/// Regions without usable module data are dropped, and so are records left
/// with no regions.
pub fn merge_areas(areas: Vec<LocatedArea>, bubbles: &BubbleData) -> Vec<ModuleRecord> {
    let mut records: Vec<ModuleRecord> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for located in areas {
        let slot = *by_name.entry(located.record.clone()).or_insert_with(|| {
            records.push(ModuleRecord::new(located.record.clone()));
            records.len() - 1
        });

        let Some(data) = bubbles.first_variant(&located.anchor) else {
            log::debug!("{} ({}): no module data", located.anchor, located.record);
            continue;
        };

        records[slot].areas.push(ModuleArea {
            start: located.area.start,
            end: located.area.end,
            products: located.area.products,
            bubbles: data.clone(),
            anchor: None,
        });
    }

    records.retain(|record| !record.areas.is_empty());
    records
}

/// Gathers the records with module data from a single result directory.
pub fn gather_from_dir(dir: &Path) -> Result<Vec<ModuleRecord>> {
    let results_file = find_results_file(dir)?;
    log::debug!("Results file: {}", results_file.display());
    let areas = load_areas(&results_file)?;

    let bubbles = load_bubble_data(&dir.join(REGIONS_FILE))?;
    if bubbles.is_empty() {
        log::warn!("{}: {} lists no regions", dir.display(), REGIONS_FILE);
    } else {
        log::debug!("{}: {} of {} region(s) listed in {}", dir.display(), bubbles.len(), areas.len(), REGIONS_FILE);
    }

    let records = merge_areas(areas, &bubbles);
    log::info!(
        "{}: {} record(s), {} region(s) with module data",
        dir.display(),
        records.len(),
        records.iter().map(|r| r.areas.len()).sum::<usize>()
    );
    Ok(records)
}

/// Result directories inside `input_dir`, sorted by name.
///
/// Hidden entries and entries that are not directories are skipped.
pub fn find_result_dirs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for path in sorted_entries(input_dir)? {
        if is_hidden(&path) {
            log::debug!("Skipping hidden entry {}", path.display());
        } else if path.is_dir() {
            dirs.push(path);
        } else {
            log::warn!("Skipping {}: not a directory", path.display());
        }
    }
    Ok(dirs)
}

/// Gathers every directory in order, stopping at the first failure.
pub fn process_all_results(dirs: &[PathBuf], progress: &ProgressBar) -> Result<Vec<ModuleRecord>> {
    let mut all = Vec::new();
    for dir in dirs {
        progress.set_message(
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        all.extend(gather_from_dir(dir)?);
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(all)
}

/// Gathers all result directories found in `input_dir`.
pub fn gather_all(input_dir: &Path, quiet: bool) -> Result<Vec<ModuleRecord>> {
    let dirs = find_result_dirs(input_dir)?;
    if dirs.is_empty() {
        return Err(GatherError::NoResultDirectories(input_dir.to_path_buf()));
    }
    log::info!("Found {} result director{}", dirs.len(), if dirs.len() == 1 { "y" } else { "ies" });

    let progress = if !quiet && dirs.len() > 1 {
        let pb = ProgressBar::new(dirs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    process_all_results(&dirs, &progress)
}
