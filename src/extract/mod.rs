//! Readers for the two antiSMASH outputs a result directory contributes
//!
//! - [`results`]: regions of every record from the full results JSON
//! - [`regions`]: module visualisation data from the generated `regions.js`
//!
//! Both sides refer to a region by its positional [`Anchor`], which is the
//! only thing joining them.

pub mod anchor;
pub mod regions;
pub mod results;

pub use anchor::Anchor;
pub use regions::{extract_assignment_literal, load_bubble_data, read_bubble_data, BubbleData};
pub use results::{load_areas, read_areas, Area, LocatedArea};
