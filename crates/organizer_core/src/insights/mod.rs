//! Read-only projections over store collections.
//!
//! Nothing here mutates or persists; each function takes the slices it
//! needs so callers can pass `OrganizerStore` accessors directly.

pub mod analytics;
pub mod calendar;
pub mod grades;
pub mod matrix;
pub mod tree;

/// `round(part / whole * 100)`, 0 when `whole` is not positive.
pub(crate) fn percentage(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    round_to_u32(part / whole * 100.0)
}

/// `round(total / count)`, 0 for an empty set.
pub(crate) fn rounded_mean(total: f64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    round_to_u32(total / count as f64)
}

fn round_to_u32(value: f64) -> u32 {
    let rounded = value.round();
    if !rounded.is_finite() || rounded <= 0.0 {
        0
    } else if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

#[cfg(test)]
mod tests {
    use super::{percentage, rounded_mean};

    #[test]
    fn percentage_rounds_and_guards_zero_whole() {
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(5.0, 0.0), 0);
        assert_eq!(percentage(-5.0, 10.0), 0);
    }

    #[test]
    fn rounded_mean_handles_empty_set() {
        assert_eq!(rounded_mean(7.0, 2), 4);
        assert_eq!(rounded_mean(7.0, 0), 0);
    }
}
