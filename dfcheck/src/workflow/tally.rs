use std::sync::Mutex;

/// Running counts of checked files.
pub struct ValidationTally {
    inner: Mutex<Counts>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub valid: usize,
    pub invalid: usize,
    pub unreadable: usize,
}

impl Counts {
    pub fn checked(&self) -> usize {
        self.valid + self.invalid + self.unreadable
    }

    pub fn failures(&self) -> usize {
        self.invalid + self.unreadable
    }
}

impl ValidationTally {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counts::default()),
        }
    }

    pub fn record_valid(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.valid += 1;
        }
    }

    pub fn record_invalid(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.invalid += 1;
        }
    }

    pub fn record_unreadable(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.unreadable += 1;
        }
    }

    pub fn snapshot(&self) -> Counts {
        if let Ok(counts) = self.inner.lock() {
            *counts
        } else {
            Counts::default()
        }
    }
}

impl Default for ValidationTally {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let tally = ValidationTally::new();
        tally.record_valid();
        tally.record_valid();
        tally.record_invalid();
        tally.record_unreadable();
        let counts = tally.snapshot();
        assert_eq!(counts.checked(), 4);
        assert_eq!(counts.failures(), 2);
    }
}
