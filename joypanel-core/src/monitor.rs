//! Monitor loop body
//!
//! Owns every runtime resource of the panel and advances two periodic
//! jobs from a millisecond timestamp:
//!
//! - heartbeat: toggle the liveness LED
//! - UI: acquire → render → report, in that order, to completion
//!
//! The caller supplies `now` from its tick source on every poll.

use joypanel_hal::{AnalogInput, InputPin, OutputPin, UartTx};

use crate::acquisition::PanelReader;
use crate::config::PanelConfig;
use crate::render::{RenderOutcome, Renderer};
use crate::scheduler::Interval;
use crate::traits::CharacterDisplay;

/// Serial banner printed once the display is up
pub const READY_BANNER: &str = "Controller Monitor Ready\r\n";

/// Display text shown during the boot hold
pub const READY_TEXT: &str = "Ready";

/// Non-fatal failures of one tick
///
/// The report line is always attempted, even when the display failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickError<DE, SE> {
    /// Display transfer failed
    Display(DE),
    /// Serial report failed
    Serial(SE),
    /// Both failed
    Both { display: DE, serial: SE },
}

impl<DE, SE> TickError<DE, SE> {
    fn merge<T>(display: Result<T, DE>, serial: Result<(), SE>) -> Result<T, Self> {
        match (display, serial) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(display), Ok(())) => Err(TickError::Display(display)),
            (Ok(_), Err(serial)) => Err(TickError::Serial(serial)),
            (Err(display), Err(serial)) => Err(TickError::Both { display, serial }),
        }
    }
}

/// Panel monitor
pub struct Monitor<D, A, P, L, S> {
    display: D,
    reader: PanelReader<A, P>,
    led: L,
    sink: S,
    renderer: Renderer,
    heartbeat: Interval,
    ui: Interval,
}

impl<D, A, P, L, S> Monitor<D, A, P, L, S>
where
    D: CharacterDisplay,
    A: AnalogInput,
    P: InputPin,
    L: OutputPin,
    S: UartTx,
{
    /// Assemble the monitor; both jobs start their first period at `now_ms`
    pub fn new(
        config: &PanelConfig,
        display: D,
        reader: PanelReader<A, P>,
        led: L,
        sink: S,
        now_ms: u32,
    ) -> Self {
        Self {
            display,
            reader,
            led,
            sink,
            renderer: Renderer::new(),
            heartbeat: Interval::new(config.heartbeat_period_ms, now_ms),
            ui: Interval::new(config.ui_period_ms, now_ms),
        }
    }

    /// Print the ready banner on serial and the display
    pub fn announce(&mut self) -> Result<(), TickError<D::Error, S::Error>> {
        let serial = self.sink.write_str(READY_BANNER);
        let display = self.display.write_text(READY_TEXT);
        TickError::merge(display, serial)
    }

    /// Restart both periods at `now_ms`
    pub fn resync(&mut self, now_ms: u32) {
        self.heartbeat.restart(now_ms);
        self.ui.restart(now_ms);
    }

    /// Run whatever is due at `now_ms`
    ///
    /// Returns the render outcome when the UI job ran this poll.
    pub fn poll(
        &mut self,
        now_ms: u32,
    ) -> Result<Option<RenderOutcome>, TickError<D::Error, S::Error>> {
        if self.heartbeat.poll(now_ms) {
            self.led.toggle();
        }

        if !self.ui.poll(now_ms) {
            return Ok(None);
        }

        let snapshot = self.reader.acquire();
        let rendered = self.renderer.render(&mut self.display, &snapshot);

        #[cfg(feature = "defmt")]
        if let Ok(RenderOutcome { redrawn: true, screen }) = &rendered {
            defmt::debug!("screen -> {}", screen);
        }

        let line = snapshot.report().encode();
        let reported = self.sink.write_str(line.as_str());

        TickError::merge(rendered, reported).map(Some)
    }

    /// The bound display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The report sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The heartbeat LED
    pub fn led(&self) -> &L {
        &self.led
    }
}
