/// Half-open interval `[start, stop)` over integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: i64,
    pub stop: i64,
}

impl Interval {
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// `[start, end]`, both ends included.
    pub fn inclusive(start: i64, end: i64) -> Self {
        Self { start, stop: end + 1 }
    }

    pub fn size(&self) -> i64 {
        (self.stop - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.stop
    }

    /// The whole interval lies below `value`.
    pub fn before(&self, value: i64) -> bool {
        self.stop <= value
    }

    /// The whole interval lies above `value`.
    pub fn after(&self, value: i64) -> bool {
        self.start > value
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let result = Interval::new(self.start.max(other.start), self.stop.min(other.stop));
        (!result.is_empty()).then_some(result)
    }

    /// Splits into the part below `at` and the part from `at` onwards.
    pub fn split_at(&self, at: i64) -> (Option<Interval>, Option<Interval>) {
        let low = Interval::new(self.start, self.stop.min(at));
        let high = Interval::new(self.start.max(at), self.stop);
        ((!low.is_empty()).then_some(low), (!high.is_empty()).then_some(high))
    }

    pub fn shifted(&self, by: i64) -> Interval {
        Interval::new(self.start + by, self.stop + by)
    }
}

/// Sorted union of the given intervals; touching intervals are joined.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|interval| !interval.is_empty());
    intervals.sort_unstable();
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.stop => last.stop = last.stop.max(interval.stop),
            _ => merged.push(interval),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive() {
        let interval = Interval::inclusive(3, 5);
        assert_eq!(interval.size(), 3);
        assert!(interval.contains(5));
        assert!(!interval.contains(6));
        assert!(interval.before(6));
        assert!(interval.after(2));
    }

    #[test]
    fn test_split_and_intersect() {
        let interval = Interval::new(10, 20);
        assert_eq!(
            interval.split_at(15),
            (Some(Interval::new(10, 15)), Some(Interval::new(15, 20)))
        );
        assert_eq!(interval.split_at(5), (None, Some(interval)));
        assert_eq!(interval.intersection(&Interval::new(18, 30)), Some(Interval::new(18, 20)));
        assert_eq!(interval.intersection(&Interval::new(20, 30)), None);
        assert_eq!(interval.shifted(-10), Interval::new(0, 10));
    }

    #[test]
    fn test_merge() {
        let merged = merge(vec![
            Interval::inclusive(16, 20),
            Interval::inclusive(3, 5),
            Interval::inclusive(12, 18),
            Interval::inclusive(10, 14),
        ]);
        assert_eq!(merged, vec![Interval::inclusive(3, 5), Interval::inclusive(10, 20)]);
        assert_eq!(merged.iter().map(Interval::size).sum::<i64>(), 14);
    }
}
