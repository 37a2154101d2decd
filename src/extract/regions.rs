//! Module visualisation ("bubble") data from antiSMASH's `regions.js`
//!
//! `regions.js` is a generated script, not a data file. The per-region data we
//! want is a single assignment somewhere in the middle of it:
//!
//! ```text
//! var recordData = [...];
//! var resultsData = {"r1c1": {"antismash.outputs.html.visualisers.bubble_view":
//!     {"1": {...}, "2": {...}}, ...}, ...};
//! var details_data = {...};
//! ```
//!
//! The assignment is cut out line by line: everything from the marker up to the
//! next line that starts another `var ` declaration. There is no brace
//! matching, so a continuation line beginning with `var ` inside the literal
//! would truncate it. antiSMASH never writes one, and the parse would then fail
//! loudly rather than produce wrong data.

use super::anchor::Anchor;
use crate::config::{BUBBLE_VIEW_KEY, DECLARATION_PREFIX, RESULTS_DATA_MARKER};
use crate::error::{GatherError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Bubble visualisations per anchor: visualiser variant name -> drawing data.
///
/// Variants keep the order they had in `regions.js`.
#[derive(Debug, Clone, Default)]
pub struct BubbleData {
    views: HashMap<Anchor, Option<Map<String, Value>>>,
}

impl BubbleData {
    /// Number of anchors present in the results data, with or without a view
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// All variants for an anchor, `None` when the region has no bubble view
    pub fn variants(&self, anchor: &Anchor) -> Option<&Map<String, Value>> {
        self.views.get(anchor).and_then(|v| v.as_ref())
    }

    /// The first variant (antiSMASH lists the largest candidate cluster first).
    ///
    /// Empty or falsy drawing data counts as no data.
    pub fn first_variant(&self, anchor: &Anchor) -> Option<&Value> {
        self.variants(anchor)
            .and_then(|variants| variants.values().next())
            .filter(|data| is_truthy(data))
    }
}

/// JavaScript-style truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Returns the text assigned by the first line starting with `marker`.
///
/// Collects the rest of the marker line and every following line up to, not
/// including, the next `var ` declaration. Lines are joined with single
/// spaces, trailing whitespace and one trailing `;` are removed. Returns
/// `None` when no line starts with `marker`.
pub fn extract_assignment_literal<R: BufRead>(reader: R, marker: &str) -> io::Result<Option<String>> {
    let mut lines = reader.lines();

    let mut section = loop {
        match lines.next() {
            None => return Ok(None),
            Some(line) => {
                let line = line?;
                if let Some(rest) = line.strip_prefix(marker) {
                    break vec![rest.to_string()];
                }
            }
        }
    };

    for line in lines {
        let line = line?;
        if line.starts_with(DECLARATION_PREFIX) {
            break;
        }
        section.push(line);
    }

    let joined = section.join(" ");
    let trimmed = joined.trim_end();
    let literal = trimmed.strip_suffix(';').unwrap_or(trimmed);
    Ok(Some(literal.to_string()))
}

/// Reads the bubble data of every anchor from a `regions.js` stream.
///
/// `source` is only used for error messages.
pub fn read_bubble_data<R: BufRead>(reader: R, source: &Path) -> Result<BubbleData> {
    let literal = extract_assignment_literal(reader, RESULTS_DATA_MARKER)
        .map_err(|e| GatherError::io(source, e))?
        .ok_or_else(|| GatherError::MissingResultsData(source.to_path_buf()))?;

    let results: Map<String, Value> =
        serde_json::from_str(&literal).map_err(|e| GatherError::json(source, e))?;

    let mut views = HashMap::with_capacity(results.len());
    for (key, data) in results {
        let Ok(anchor) = key.parse::<Anchor>() else {
            log::debug!("{}: ignoring non-region key {:?}", source.display(), key);
            continue;
        };
        let region = data.as_object().ok_or_else(|| GatherError::MalformedBubbleData {
            anchor: key.clone(),
            reason: "region entry is not an object".to_string(),
        })?;
        let view = match region.get(BUBBLE_VIEW_KEY) {
            Some(Value::Object(variants)) => Some(variants.clone()),
            Some(other) if is_truthy(other) => {
                return Err(GatherError::MalformedBubbleData {
                    anchor: key,
                    reason: format!("{} is not an object", BUBBLE_VIEW_KEY),
                });
            }
            _ => None,
        };
        views.insert(anchor, view);
    }

    log::debug!(
        "{}: {} region(s), {} with module data",
        source.display(),
        views.len(),
        views.values().filter(|v| v.is_some()).count()
    );
    Ok(BubbleData { views })
}

/// Opens and reads the `regions.js` file at `path`.
pub fn load_bubble_data(path: &Path) -> Result<BubbleData> {
    let file = File::open(path).map_err(|e| GatherError::io(path, e))?;
    read_bubble_data(BufReader::new(file), path)
}
