use std::io::Write;
use tempfile::NamedTempFile;

/// Writes an intent script with the standard header and the given rows.
pub fn write_script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "op, value, count").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Writes an ATM directory CSV with the given `id,name,location` rows.
pub fn write_directory(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id, name, location").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
