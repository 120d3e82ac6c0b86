//! The forward loop: read a report, decode it, write it to the matching sink.

use evdevil::event::Key;

use crate::config::{Config, BUTTON_COUNT};
use crate::error::DriverError;
use crate::input::{self, ButtonStateMachine, PenDecoder};
use crate::report::{Report, ReportKind};
use crate::shutdown::ShutdownFlag;
use crate::sink::EventSink;
use crate::usb::ReportSource;

/// Outcome of one loop iteration.
#[derive(Debug)]
pub enum Step {
    Continue,
    Shutdown,
    Fatal(DriverError),
}

/// Owns the report source and both sinks for the lifetime of the loop.
///
/// Everything is released when the driver is dropped, which `run` does on
/// every exit path before returning.
pub struct Driver<S, P, B> {
    source: S,
    pen_sink: P,
    pad_sink: B,
    pen: PenDecoder,
    buttons: ButtonStateMachine,
    bindings: [Vec<Key>; BUTTON_COUNT],
    shutdown: ShutdownFlag,
    report_count: u64,
}

impl<S, P, B> Driver<S, P, B>
where
    S: ReportSource,
    P: EventSink,
    B: EventSink,
{
    pub fn new(source: S, pen_sink: P, pad_sink: B, config: &Config, shutdown: ShutdownFlag) -> Self {
        Self {
            source,
            pen_sink,
            pad_sink,
            pen: PenDecoder::new(config),
            buttons: ButtonStateMachine::new(),
            bindings: config.button_bindings.clone(),
            shutdown,
            report_count: 0,
        }
    }

    pub fn step(&mut self) -> Step {
        if self.shutdown.is_requested() {
            return Step::Shutdown;
        }
        let report = match self.source.next_report() {
            Ok(Some(report)) => report,
            Ok(None) => return Step::Continue,
            Err(e) => return Step::Fatal(e),
        };
        match self.dispatch(&report) {
            Ok(()) => Step::Continue,
            Err(e) => Step::Fatal(e),
        }
    }

    fn dispatch(&mut self, report: &Report) -> Result<(), DriverError> {
        match report.kind() {
            ReportKind::Pen { touch } => {
                let sample = self.pen.decode(report, touch);
                self.pen_sink.write(&input::pen_events(&sample))?;
                self.pen_sink.synchronize()?;
            }
            ReportKind::Button => {
                if let Some(transition) = self.buttons.step(report) {
                    log::debug!(
                        "Button {:?} {:?} (active {:?})",
                        transition.slot,
                        transition.phase,
                        self.buttons.active_slot()
                    );
                    self.pad_sink.write(&input::button_events(&transition, &self.bindings))?;
                    self.pad_sink.synchronize()?;
                }
            }
            ReportKind::Unknown => {
                log::trace!("Ignoring report {}", report);
                return Ok(());
            }
        }

        if self.report_count == 0 {
            log::info!("Tablet events flowing");
        }
        self.report_count += 1;
        if self.report_count.is_multiple_of(500) {
            log::debug!("Reports forwarded: {}", self.report_count);
        }
        Ok(())
    }

    /// Run until shutdown is requested or a fatal error occurs.
    pub fn run(mut self) -> Result<(), DriverError> {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Shutdown => {
                    log::info!("Shutdown requested after {} reports", self.report_count);
                    return Ok(());
                }
                Step::Fatal(e) => {
                    log::error!("{}", e);
                    return Err(e);
                }
            }
        }
    }
}
