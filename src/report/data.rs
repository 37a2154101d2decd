//! The `data.js` file: the gathered records as a script-loadable `data` variable

use crate::config::DATA_VARIABLE_PREFIX;
use crate::gather::ModuleRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, records: &[ModuleRecord]) -> io::Result<()> {
    writer.write_all(DATA_VARIABLE_PREFIX.as_bytes())?;
    let mut serializer = Serializer::with_formatter(&mut *writer, PrettyFormatter::with_indent(b" "));
    records.serialize(&mut serializer)?;
    writer.write_all(b";")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gather::ModuleArea;
    use serde_json::{json, Value};

    fn render(records: &[ModuleRecord]) -> String {
        let mut out = Vec::new();
        write(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[]), "var data = [];");
    }

    #[test]
    fn test_layout_and_field_order() {
        let records = vec![ModuleRecord {
            name: "rec".to_string(),
            areas: vec![ModuleArea {
                start: 1,
                end: 2,
                products: vec!["NRPS".to_string()],
                bubbles: json!({"b": 1, "a": 2}),
                anchor: Some("rec-1".to_string()),
            }],
        }];
        let expected = r#"var data = [
 {
  "name": "rec",
  "areas": [
   {
    "start": 1,
    "end": 2,
    "products": [
     "NRPS"
    ],
    "bubbles": {
     "b": 1,
     "a": 2
    },
    "anchor": "rec-1"
   }
  ]
 }
];"#;
        assert_eq!(render(&records), expected);
    }

    #[test]
    fn test_payload_is_valid_json() {
        let records = vec![ModuleRecord {
            name: "quote\"d".to_string(),
            areas: vec![],
        }];
        let text = render(&records);
        let body = text.strip_prefix("var data = ").unwrap().strip_suffix(';').unwrap();
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed[0]["name"], "quote\"d");
    }
}
