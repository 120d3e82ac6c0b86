//! Dump raw tablet reports for debugging.
//! Run: moons-pad dump  to print every report with its classification.

use crate::error::DriverError;
use crate::shutdown::ShutdownFlag;
use crate::usb::ReportSource;

pub fn run_dump(source: &mut impl ReportSource, shutdown: ShutdownFlag) -> Result<(), DriverError> {
    eprintln!("Dumping tablet reports (Ctrl+C to stop):\n");
    let mut n = 0u64;
    while !shutdown.is_requested() {
        let Some(report) = source.next_report()? else {
            continue;
        };
        n += 1;
        println!("{:6}  {}  {}", n, report, report.kind());
    }
    eprintln!("\n{} reports", n);
    Ok(())
}
