use std::fmt;

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Candidates handed to the driver.
    pub total: usize,
    pub compiled: usize,
    /// Compiler ran and rejected the source, or the artifact could not be
    /// put in place.
    pub failed: usize,
    /// Compiler could not be started at all.
    pub not_invoked: usize,
    /// Artifacts that were already newer than their source.
    pub skipped: usize,
}

impl BuildSummary {
    #[inline]
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failed + self.not_invoked
    }

    /// Nothing compiled and nothing failed.
    #[inline]
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.compiled == 0 && self.failures() == 0
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.is_up_to_date() {
            return vec![format!(
                "All shaders are up to date. A total of {} shaders were found.",
                self.total
            )];
        }

        let mut lines = Vec::with_capacity(2);
        if self.compiled > 0 {
            lines.push(format!("Successfully compiled {} shaders", self.compiled));
        }
        if self.failures() > 0 {
            let mut line = format!("Failed to compile {} shaders", self.failures());
            if self.not_invoked > 0 {
                line.push_str(&format!(" ({} could not invoke the compiler)", self.not_invoked));
            }
            lines.push(line);
        }
        lines
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
