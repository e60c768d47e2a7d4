//! Query log partitioned by calendar year and month.
//!
//! The core engine performs no I/O; recording queries is the embedding
//! application's job. [`QueryLog`] appends `<ISO-8601 timestamp>;<query>`
//! lines to `<dir>/<year>/<month>.log`, creating directories as needed, so
//! log files rotate naturally at month boundaries without any rename or
//! truncation step.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use chrono::Local;

/// Appends abbreviation queries to year/month-partitioned log files.
#[derive(Debug, Clone)]
pub struct QueryLog {
    dir: Utf8PathBuf,
}

impl QueryLog {
    /// Create a query log rooted at `dir`.
    pub const fn new(dir: Utf8PathBuf) -> Self {
        Self { dir }
    }

    /// Append one query record, timestamped now.
    pub fn append(&self, query: &str) -> anyhow::Result<()> {
        let now = Local::now();
        let year_dir = self.dir.join(now.format("%Y").to_string());
        std::fs::create_dir_all(&year_dir)
            .with_context(|| format!("failed to create query log directory {year_dir}"))?;

        let file_path = year_dir.join(format!("{}.log", now.format("%m")));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path.as_std_path())
            .with_context(|| format!("failed to open query log {file_path}"))?;
        writeln!(file, "{};{}", now.to_rfc3339(), query)
            .with_context(|| format!("failed to write query log {file_path}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    #[test]
    fn append_creates_year_month_partition() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(tmp.path()).unwrap().to_path_buf();
        let log = QueryLog::new(dir.clone());

        log.append("Journal of Physics").unwrap();
        log.append("Nature").unwrap();

        let now = Local::now();
        let expected = dir
            .join(now.format("%Y").to_string())
            .join(format!("{}.log", now.format("%m")));
        let content = std::fs::read_to_string(expected.as_std_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(";Journal of Physics"));
        assert!(lines[1].ends_with(";Nature"));
    }
}
