//! Raw interrupt reports from the tablet and their classification.

use std::fmt;

/// Length of one report on the tablet's data endpoint.
pub const REPORT_LEN: usize = 8;

/// byte[1] of a pen report while the pen hovers above the surface.
pub const PEN_HOVER: u8 = 192;
/// byte[1] of a pen report while the nib is pressed on the surface.
pub const PEN_CONTACT: u8 = 193;
/// byte[0] of a tablet button report.
pub const BUTTON_REPORT_ID: u8 = 2;

/// One fixed-size report read from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report([u8; REPORT_LEN]);

/// What a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Pen position report. `touch` is set for byte[1] == 192, which the
    /// hardware sends while the pen is *not* in contact.
    Pen { touch: bool },
    Button,
    Unknown,
}

impl Report {
    pub fn new(bytes: [u8; REPORT_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a report from a transfer buffer. Trailing bytes past the report
    /// length are ignored; short transfers yield `None`.
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        let bytes: [u8; REPORT_LEN] = buf.get(..REPORT_LEN)?.try_into().ok()?;
        Some(Self::new(bytes))
    }

    pub fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Reassemble a 16-bit field as `hi * 255 + lo`.
    ///
    /// The multiplier is 255, not 256. Existing calibrations for this tablet
    /// depend on it.
    pub fn word(&self, lo: usize, hi: usize) -> u32 {
        u32::from(self.0[hi]) * 255 + u32::from(self.0[lo])
    }

    /// Route the report to the pen or button path. Pen reports are checked
    /// first.
    pub fn kind(&self) -> ReportKind {
        match self.0[1] {
            PEN_HOVER => return ReportKind::Pen { touch: true },
            PEN_CONTACT => return ReportKind::Pen { touch: false },
            _ => {}
        }
        if self.0[0] == BUTTON_REPORT_ID {
            ReportKind::Button
        } else {
            ReportKind::Unknown
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Pen { touch: true } => write!(f, "pen hover"),
            ReportKind::Pen { touch: false } => write!(f, "pen contact"),
            ReportKind::Button => write!(f, "button"),
            ReportKind::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(buf: &[u8]) -> ReportKind {
        Report::from_bytes(buf).map_or(ReportKind::Unknown, |r| r.kind())
    }

    #[test]
    fn test_pen_reports() {
        assert_eq!(classify(&[0, 192, 0, 0, 0, 0, 0, 0]), ReportKind::Pen { touch: true });
        assert_eq!(classify(&[0, 193, 0, 0, 0, 0, 0, 0]), ReportKind::Pen { touch: false });
        // byte[0] == 2 does not override a pen marker
        assert_eq!(classify(&[2, 193, 0, 0, 0, 0, 0, 0]), ReportKind::Pen { touch: false });
    }

    #[test]
    fn test_button_and_unknown_reports() {
        assert_eq!(classify(&[2, 0, 0, 0, 0, 0, 0, 0]), ReportKind::Button);
        assert_eq!(classify(&[2, 4, 0, 0, 0, 0, 0, 0]), ReportKind::Button);
        assert_eq!(classify(&[1, 0, 0, 0, 0, 0, 0, 0]), ReportKind::Unknown);
        assert_eq!(classify(&[0, 194, 0, 0, 0, 0, 0, 0]), ReportKind::Unknown);
    }

    #[test]
    fn test_short_buffer_is_unknown() {
        assert_eq!(classify(&[2, 192, 0]), ReportKind::Unknown);
        assert_eq!(classify(&[]), ReportKind::Unknown);
    }

    #[test]
    fn test_from_bytes_ignores_trailing_bytes() {
        let r = Report::from_bytes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        assert_eq!(r, Report::new([1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_word_uses_255_multiplier() {
        let r = Report::new([0, 0, 0, 0, 0, 0, 5, 1]);
        assert_eq!(r.word(6, 7), 260);
        let r = Report::new([0, 0, 255, 255, 0, 0, 0, 0]);
        assert_eq!(r.word(2, 3), 255 * 255 + 255);
    }

    #[test]
    fn test_display() {
        let r = Report::new([0x02, 0xc1, 0, 0x10, 0, 0, 0, 0xff]);
        assert_eq!(r.to_string(), "02 c1 00 10 00 00 00 ff");
        assert_eq!(ReportKind::Pen { touch: true }.to_string(), "pen hover");
    }
}
