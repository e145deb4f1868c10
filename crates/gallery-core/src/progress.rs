/// Loaded/total counter behind the loader overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    pub fn add_pending(&mut self, count: usize) {
        self.total += count;
    }

    /// Count one finished item, whether it loaded or failed.
    pub fn finish_one(&mut self) {
        self.loaded = (self.loaded + 1).min(self.total);
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.loaded as f32 / self.total as f32 * 100.0).round() as u32
    }

    pub fn is_done(&self) -> bool {
        self.loaded >= self.total
    }
}
