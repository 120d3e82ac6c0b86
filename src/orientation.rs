//! Axis orientation for pen coordinates.

use std::fmt;

use crate::report::Report;

/// Coordinate transform applied to every pen report.
///
/// Chosen once at startup from the `swap_directions` / `swap_axis` settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// x from bytes 4/5 (inverted), y from bytes 2/3.
    #[default]
    Native,
    /// x from bytes 2/3, y from bytes 4/5 (inverted).
    SwappedAxes,
    /// x from bytes 4/5, y from bytes 2/3 (inverted).
    Reversed,
    /// x from bytes 2/3 (inverted), y from bytes 4/5.
    SwappedReversed,
}

impl Orientation {
    pub fn from_flags(swap_directions: bool, swap_axis: bool) -> Self {
        match (swap_directions, swap_axis) {
            (false, false) => Orientation::Native,
            (false, true) => Orientation::SwappedAxes,
            (true, false) => Orientation::Reversed,
            (true, true) => Orientation::SwappedReversed,
        }
    }

    /// Decode the pen position of a report into output space.
    pub fn decode_axes(&self, report: &Report, max_x: u32, max_y: u32) -> (u32, u32) {
        let a = report.word(2, 3);
        let b = report.word(4, 5);
        match self {
            Orientation::Native => (max_x.saturating_sub(b), a),
            Orientation::SwappedAxes => (a, max_y.saturating_sub(b)),
            Orientation::Reversed => (b, max_y.saturating_sub(a)),
            Orientation::SwappedReversed => (max_x.saturating_sub(a), b),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Native => write!(f, "native"),
            Orientation::SwappedAxes => write!(f, "swapped-axes"),
            Orientation::Reversed => write!(f, "reversed"),
            Orientation::SwappedReversed => write!(f, "swapped-reversed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen_report(b2: u8, b3: u8, b4: u8, b5: u8) -> Report {
        Report::new([0, 193, b2, b3, b4, b5, 0, 0])
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(Orientation::from_flags(false, false), Orientation::Native);
        assert_eq!(Orientation::from_flags(false, true), Orientation::SwappedAxes);
        assert_eq!(Orientation::from_flags(true, false), Orientation::Reversed);
        assert_eq!(Orientation::from_flags(true, true), Orientation::SwappedReversed);
    }

    #[test]
    fn test_native_transform() {
        let r = pen_report(10, 0, 20, 0);
        assert_eq!(Orientation::Native.decode_axes(&r, 1000, 500), (980, 10));
    }

    #[test]
    fn test_swapped_axes_transform() {
        let r = pen_report(10, 1, 20, 1);
        // a = 255 + 10, b = 255 + 20
        assert_eq!(Orientation::SwappedAxes.decode_axes(&r, 1000, 500), (265, 500 - 275));
    }

    #[test]
    fn test_reversed_transform() {
        let r = pen_report(10, 1, 20, 1);
        assert_eq!(Orientation::Reversed.decode_axes(&r, 1000, 500), (275, 500 - 265));
    }

    #[test]
    fn test_swapped_reversed_transform() {
        let r = pen_report(10, 1, 20, 1);
        assert_eq!(Orientation::SwappedReversed.decode_axes(&r, 1000, 500), (1000 - 265, 275));
    }

    #[test]
    fn test_inverted_axis_saturates_at_zero() {
        let r = pen_report(0, 0, 255, 255);
        assert_eq!(Orientation::Native.decode_axes(&r, 1000, 500), (0, 0));
    }

    #[test]
    fn test_decode_is_stateless() {
        let r = pen_report(7, 3, 9, 2);
        for o in [
            Orientation::Native,
            Orientation::SwappedAxes,
            Orientation::Reversed,
            Orientation::SwappedReversed,
        ] {
            assert_eq!(o.decode_axes(&r, 4095, 2047), o.decode_axes(&r, 4095, 2047));
        }
    }
}
