//! Positional region anchors (`r1c5` = first record, fifth region)
//!
//! Anchors are derived only from the position of a region inside one results
//! file. Two files loaded separately both start at `r1c1`, so anchors are only
//! comparable within a single load.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor {
    /// 1-based record index
    pub record: usize,
    /// 1-based region index within the record
    pub area: usize,
}

impl Anchor {
    /// Builds the anchor for 0-based record and area indices.
    pub fn from_indices(record_index: usize, area_index: usize) -> Self {
        Self { record: record_index + 1, area: area_index + 1 }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.record, self.area)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnchorError(String);

impl fmt::Display for ParseAnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a region anchor: {:?}", self.0)
    }
}

impl std::error::Error for ParseAnchorError {}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAnchorError(s.to_string());
        let rest = s.strip_prefix('r').ok_or_else(err)?;
        let (record, area) = rest.split_once('c').ok_or_else(err)?;
        let record: usize = record.parse().map_err(|_| err())?;
        let area: usize = area.parse().map_err(|_| err())?;
        if record == 0 || area == 0 {
            return Err(err());
        }
        Ok(Self { record, area })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_one_based() {
        assert_eq!(Anchor::from_indices(0, 0).to_string(), "r1c1");
        assert_eq!(Anchor::from_indices(2, 9).to_string(), "r3c10");
    }

    #[test]
    fn test_parse() {
        assert_eq!("r12c3".parse::<Anchor>(), Ok(Anchor { record: 12, area: 3 }));
        assert!("r0c1".parse::<Anchor>().is_err());
        assert!("c1r1".parse::<Anchor>().is_err());
        assert!("r1".parse::<Anchor>().is_err());
        assert!("r1c".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_display_parse_agree() {
        let anchor = Anchor::from_indices(4, 1);
        assert_eq!(anchor.to_string().parse::<Anchor>(), Ok(anchor));
    }
}
