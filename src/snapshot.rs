use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::errors::SolverError;

/// One cell-centred output row. Face-centred quantities (`x`, `v`) are already
/// averaged to the cell centre by the scheme.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotRow {
    pub x: f64,
    pub rho: f64,
    pub v: f64,
    pub p: f64,
}

/// Serializes cell-centred fields to one delimited text file per write stride.
///
/// The delimiter and column order are fixed: the plotting collaborator
/// consuming these files is out of scope but depends on them.
pub struct SnapshotWriter {
    directory: PathBuf,
}

const SEPARATOR: char = ';';
const EXTENSION: &str = "csv";

impl SnapshotWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Create the output directory if absent and clear snapshots left over
    /// from a previous run of the same scenario.
    pub fn prepare(&self) -> Result<(), SolverError> {
        fs::create_dir_all(&self.directory)?;
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// Write the snapshot for `step` as `<step>.csv`.
    pub fn write(&self, step: usize, rows: &[SnapshotRow]) -> Result<(), SolverError> {
        let path = self.directory.join(format!("{}.{}", step, EXTENSION));
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(file, "x{sep}rho{sep}v{sep}P", sep = SEPARATOR)?;
        for row in rows {
            writeln!(
                file,
                "{}{sep}{}{sep}{}{sep}{}",
                row.x,
                row.rho,
                row.v,
                row.p,
                sep = SEPARATOR
            )?;
        }
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("lmm_hydro_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_layout() {
        let writer = SnapshotWriter::new(scratch_dir("write_layout"));
        writer.prepare().unwrap();
        let rows = [SnapshotRow {
            x: 0.5,
            rho: 1.,
            v: 0.,
            p: 1.,
        }];
        writer.write(42, &rows).unwrap();
        let contents = fs::read_to_string(writer.directory().join("42.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("x;rho;v;P"));
        assert_eq!(lines.next(), Some("0.5;1;0;1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_prepare_clears_stale_snapshots() {
        let writer = SnapshotWriter::new(scratch_dir("clears_stale"));
        writer.prepare().unwrap();
        writer.write(1, &[]).unwrap();
        writer.prepare().unwrap();
        assert!(!writer.directory().join("1.csv").exists());
    }
}
