//! Per-run accumulation of mod outcomes.

use super::ModOutcome;

/// Names of mods grouped by how they were resolved during one run.
///
/// Lists preserve manifest order. Skipped entries are only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Mods downloaded at the target version.
    pub matched: Vec<String>,
    /// Mods only available at another version, saved to the fallback dir.
    pub fallback: Vec<String>,
    /// Mods with no resolvable version or an unparseable URL.
    pub missing: Vec<String>,
    /// Mods whose file was resolved but could not be written to disk.
    pub failed_downloads: Vec<String>,
    /// Entries ignored because they do not reference the supported host.
    pub skipped: usize,
}

impl ReconcileReport {
    /// Records one entry's outcome under `name`.
    pub fn record(&mut self, name: &str, outcome: &ModOutcome) {
        match outcome {
            ModOutcome::Skipped => self.skipped += 1,
            ModOutcome::Matched(fetched) => {
                self.matched.push(name.to_string());
                if fetched.path.is_none() {
                    self.failed_downloads.push(name.to_string());
                }
            }
            ModOutcome::Fallback { fetched, .. } => {
                self.fallback.push(name.to_string());
                if fetched.path.is_none() {
                    self.failed_downloads.push(name.to_string());
                }
            }
            ModOutcome::Missing(_) => self.missing.push(name.to_string()),
        }
    }

    /// Number of entries that were processed (not skipped).
    #[must_use]
    pub fn processed(&self) -> usize {
        self.matched.len() + self.fallback.len() + self.missing.len()
    }
}
