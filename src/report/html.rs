//! The `index.html` shell: one label and one drawing container per region
//!
//! The page draws nothing by itself. The bundled antiSMASH script finds each
//! container by id once `data.js` is loaded and renders the module bubbles
//! into it.

use super::{area_anchor, container_id};
use crate::config::DATA_FILE;
use crate::gather::ModuleRecord;
use std::io::{self, Write};

const LABEL_STYLE: &str = "font-weight:bold; margin-bottom: -2em; margin-top: 2em;";

/// Writes the page. Areas without an assigned anchor get the one
/// [`area_anchor`] derives from the record name and start.
pub fn write<W: Write>(writer: &mut W, records: &[ModuleRecord]) -> io::Result<()> {
    write!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Collected modules from antiSMASH results</title>
  <link rel="stylesheet" type="text/css" href="style.css">
</head>
<body>
"#)?;

    for record in records {
        for area in &record.areas {
            let anchor = area
                .anchor
                .clone()
                .unwrap_or_else(|| area_anchor(&record.name, area.start));
            writeln!(
                writer,
                r#"  <div style="{}">{}: {}-{}: {}</div>"#,
                LABEL_STYLE,
                record.name,
                area.start,
                area.end,
                area.products.join(", ")
            )?;
            writeln!(writer, r#"  <div id="{}"></div>"#, container_id(&anchor))?;
        }
    }

    write!(writer, r#"
  <script src="custom_antismash.js"></script>
  <script src="{data_file}"></script>
  <script src="jquery.js"></script>
  <script>
    $(document).ready(function() {{
        for (const record of data) {{
            for (const area of record.areas) {{
                viewer["actualDrawDomainBubbleData"](area.anchor, area.bubbles);
            }}
        }}
    }})
  </script>
</body>
</html>
"#,
        data_file = DATA_FILE
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gather::ModuleArea;
    use crate::report::assign_anchors;
    use serde_json::json;

    fn render(records: &mut [ModuleRecord]) -> String {
        assign_anchors(records);
        let mut out = Vec::new();
        write(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn area(start: i64, end: i64, products: &[&str]) -> ModuleArea {
        ModuleArea {
            start,
            end,
            products: products.iter().map(|p| p.to_string()).collect(),
            bubbles: json!({"modules": []}),
            anchor: None,
        }
    }

    #[test]
    fn test_label_and_container_per_area() {
        let mut records = vec![ModuleRecord {
            name: "NC_003888.3".to_string(),
            areas: vec![area(100, 2000, &["NRPS", "T1PKS"]), area(5000, 9000, &["terpene"])],
        }];
        let html = render(&mut records);
        assert!(html.contains(">NC_003888.3: 100-2000: NRPS, T1PKS</div>"));
        assert!(html.contains(">NC_003888.3: 5000-9000: terpene</div>"));
        assert!(html.contains(r#"<div id="NC_003888-3-100-domain-bubble-svg-container"></div>"#));
        assert!(html.contains(r#"<div id="NC_003888-3-5000-domain-bubble-svg-container"></div>"#));
        assert_eq!(html.matches("-domain-bubble-svg-container").count(), 2);
    }

    #[test]
    fn test_areas_in_record_order() {
        let mut records = vec![
            ModuleRecord { name: "b".to_string(), areas: vec![area(1, 2, &[])] },
            ModuleRecord { name: "a".to_string(), areas: vec![area(3, 4, &[])] },
        ];
        let html = render(&mut records);
        let b = html.find("b-1-domain").unwrap();
        let a = html.find("a-3-domain").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_unassigned_anchor_derived_from_record() {
        let records = vec![ModuleRecord { name: "NZ.7".to_string(), areas: vec![area(300, 400, &["NRPS"])] }];
        let mut out = Vec::new();
        write(&mut out, &records).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(r#"<div id="NZ-7-300-domain-bubble-svg-container"></div>"#));
        assert!(!html.contains(r#"id="-domain-bubble-svg-container""#));
    }

    #[test]
    fn test_loads_scripts() {
        let html = render(&mut []);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<script src="data.js"></script>"#));
        assert!(html.contains("actualDrawDomainBubbleData"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains("domain-bubble-svg-container"));
    }
}
