use crate::calculator::comparison::round_half_up;
use crate::error::ExportError;
use crate::model::FootprintResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn export_csv<P: AsRef<Path>>(result: &FootprintResult, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(result, file)?;
    info!(path = %path_ref.display(), "exported csv");
    Ok(())
}

/// Writes the per-category table to any sink. Figures keep two decimals.
pub fn write_csv<W: Write>(result: &FootprintResult, sink: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(["Category", "kWh/day", "Share %"])?;

    for (category, share) in result.shares() {
        writer.write_record([
            category.label(),
            two_decimals(result.subtotal(category)).as_str(),
            two_decimals(share).as_str(),
        ])?;
    }

    let ai_share = if result.grand_total > 0.0 {
        result.ai_subtotal / result.grand_total * 100.0
    } else {
        0.0
    };
    writer.write_record([
        "AI Usage (within Digital Life)",
        two_decimals(result.ai_subtotal).as_str(),
        two_decimals(ai_share).as_str(),
    ])?;

    let total_share = if result.grand_total > 0.0 { 100.0 } else { 0.0 };
    writer.write_record([
        "Total",
        two_decimals(result.grand_total).as_str(),
        two_decimals(total_share).as_str(),
    ])?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

fn two_decimals(value: f64) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_one_row_per_category_plus_ai_and_total() {
        let result = FootprintResult::new(5.0, 1.0, 20.0, 30.0, 45.0);
        let mut buffer = Vec::new();

        write_csv(&result, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Category,kWh/day,Share %\n\
             Digital Life,5.00,5.00\n\
             Transportation,20.00,20.00\n\
             Home Energy,30.00,30.00\n\
             Food & Lifestyle,45.00,45.00\n\
             AI Usage (within Digital Life),1.00,1.00\n\
             Total,100.00,100.00\n"
        );
    }

    #[test]
    fn export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("footprint.csv");
        let result = FootprintResult::new(0.0, 0.0, 0.0, 30.0, 15.0);

        export_csv(&result, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.ends_with("Total,45.00,100.00\n"));
    }

    #[test]
    fn missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("footprint.csv");
        let result = FootprintResult::new(0.0, 0.0, 0.0, 30.0, 15.0);

        let err = export_csv(&result, &path).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
