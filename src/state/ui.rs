#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page state that is not part of the game rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Shown under the picker when a chosen file could not be read.
    pub load_error: Option<String>,
    /// True while a chosen file is being read.
    pub loading: bool,
    /// Bumped for every celebration so the confetti layer restarts. Zero means none yet.
    pub celebration_seq: u64,
    /// Length of the most recent celebration.
    pub celebration_ms: u32,
}

impl UiState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    /// Record the outcome of a file read; `error` is `None` on success.
    pub fn finish_load(&mut self, error: Option<String>) {
        self.loading = false;
        self.load_error = error;
    }

    pub fn start_celebration(&mut self, duration_ms: u32) {
        self.celebration_seq = self.celebration_seq.wrapping_add(1).max(1);
        self.celebration_ms = duration_ms;
    }
}
