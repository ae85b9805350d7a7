use crate::error::CatalogError;
use crate::svg_scanner::IconRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the icon catalog to `output_path`, echoing each filename to stdout
pub fn generate_manifest(records: &[IconRecord], output_path: &Path) -> Result<(), CatalogError> {
    let file = File::create(output_path).map_err(|source| CatalogError::CreateOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let stdout = io::stdout();

    write_records(records, output_path, &mut writer, &mut stdout.lock())?;
    writer.flush().map_err(|source| output_error(output_path, source))
}

/// Write one block per record to `out` and one filename line per record to `log`
fn write_records(
    records: &[IconRecord],
    output_path: &Path,
    mut out: impl Write,
    mut log: impl Write,
) -> Result<(), CatalogError> {
    for record in records {
        out.write_all(format_record(record).as_bytes())
            .map_err(|source| output_error(output_path, source))?;
        writeln!(log, "{}", record.id).map_err(CatalogError::WriteConsole)?;
    }
    Ok(())
}

fn output_error(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::WriteOutput {
        path: path.to_path_buf(),
        source,
    }
}

/// Format a single record. Blocks are concatenated as-is, each one
/// ending in "},\n", without any enclosing array.
fn format_record(record: &IconRecord) -> String {
    format!(
        "{{\n\t\"id\": \"{}\",\n\t\"label\": {{\n\t\t\"en\": \"{}\"\n\t}}\n}},\n",
        record.id, record.label
    )
}
