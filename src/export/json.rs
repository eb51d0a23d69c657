use super::report::FootprintReport;
use crate::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn export_json<P: AsRef<Path>>(report: &FootprintReport, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    info!(path = %path_ref.display(), "exported json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnergyConfig;
    use crate::model::{CarType, UserInputs};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn exported_document_has_inputs_result_and_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("footprint.json");
        let inputs = UserInputs {
            car_type: CarType::Electric,
            miles_driven: 100.0,
            ai_video_mins: 3.0,
            ..UserInputs::default()
        };
        let report = FootprintReport::new(&EnergyConfig::default(), inputs);

        export_json(&report, &path).unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["inputs"]["carType"], "electric");
        assert_eq!(value["inputs"]["homeSize"], "medium");
        assert_eq!(value["result"]["aiSubtotal"], 3.0);
        assert_eq!(value["comparison"]["tier"], "good");
        assert!(value["comparison"]["aiNote"]
            .as_str()
            .unwrap()
            .contains("adds 3.0 kWh/day"));
    }
}
