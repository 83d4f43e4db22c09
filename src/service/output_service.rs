use crate::prelude::*;
use crate::scrape::aggregate::LocationRecord;
use crate::service::var_service::OutputMode;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    io::{stdout, Write},
    path::Path,
};

/// Pretty-prints the records with tab indentation and a trailing newline.
pub fn to_json(records: &[LocationRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    records.serialize(&mut serializer)?;
    buf.push(b'\n');

    Ok(String::from_utf8(buf)?)
}

pub fn print_locations<W: Write>(records: &[LocationRecord], out: &mut W) -> Result<()> {
    out.write_all(to_json(records)?.as_bytes())?;
    out.flush()?;

    Ok(())
}

pub fn write_locations(records: &[LocationRecord], mode: OutputMode, path: &Path) -> Result<()> {
    match mode {
        OutputMode::File => {
            std::fs::write(path, to_json(records)?)
                .with_context(|| format!("Failed to write locations to {}", path.display()))?;
            tracing::info!("Wrote {} locations to {}", records.len(), path.display());
        }
        OutputMode::Stdout => print_locations(records, &mut stdout().lock())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env::temp_dir, fs, process};

    fn records() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("Fort Example, California".to_string()),
            LocationRecord::new("Base Two, Nevada".to_string()),
        ]
    }

    #[test]
    fn indents_with_tabs() {
        let json = to_json(&records()[..1]).unwrap();
        assert_eq!(
            json,
            "[\n\t{\n\t\t\"title\": \"Fort Example, California\",\n\t\t\"keywords\": []\n\t}\n]\n"
        );
    }

    #[test]
    fn prints_same_json_as_file_output() {
        let mut out: Vec<u8> = Vec::new();
        print_locations(&records(), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, to_json(&records()).unwrap());
        let parsed: Vec<LocationRecord> = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed, records());
    }

    #[test]
    fn empty_output_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn file_round_trips_and_overwrites() {
        let path = temp_dir().join(format!("spacea-locations-{}.json", process::id()));
        fs::write(&path, "stale content that is longer than the new output".repeat(20)).unwrap();

        write_locations(&records(), OutputMode::File, &path).unwrap();
        let parsed: Vec<LocationRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(parsed, records());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = temp_dir()
            .join("spacea-locations-missing-dir")
            .join("nested")
            .join("out.json");
        let err = write_locations(&records(), OutputMode::File, &path).unwrap_err();
        assert!(err.to_string().contains("out.json"));
    }
}
