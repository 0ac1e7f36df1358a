/// Running count/min/max of a stream of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    count: usize,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl RunningStats {
    /// Empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value in; NaN is ignored
    pub fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
    }

    /// Forget everything
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Number of values seen
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest value, NaN if empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value, NaN if empty
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`, NaN if empty
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_nan() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert!(stats.min().is_nan());
        assert!(stats.range().is_nan());
    }

    #[test]
    fn test_update_and_restart() {
        let mut stats = RunningStats::new();
        for v in [3.0, -1.0, 7.5, f64::NAN] {
            stats.update(v);
        }
        assert_eq!(stats.count(), 3);
        assert_eq!(stats.min(), -1.0);
        assert_eq!(stats.max(), 7.5);
        assert_eq!(stats.range(), 8.5);

        stats.restart();
        assert_eq!(stats.count(), 0);
    }
}
