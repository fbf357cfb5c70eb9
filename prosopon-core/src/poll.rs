//! Poll loop state machine and runner
//!
//! The loop claims the sensor bus once, then cycles read → decode →
//! render → sleep until something fails. Any failure releases the bus
//! claim and terminates the loop with a typed error; there is no retry.

use prosopon_protocol::{PacketError, SensorResult, SENSOR_RESULT_SIZE};

use crate::config::PollConfig;
use crate::render::render_faces;
use crate::traits::{Delay, DisplayDriver, SensorBus};

/// Poll loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollState {
    /// Bus claim held, no cycle started yet
    Locked,
    /// Waiting on the blocking result transfer
    Reading,
    /// Unpacking the raw buffer
    Decoding,
    /// Building and drawing the screen
    Rendering,
    /// Waiting out the poll interval
    Sleeping,
    /// Claim released after a failure; terminal
    Unlocked,
}

/// Events driving the poll state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// A read transfer was issued
    ReadStarted,
    /// The transfer completed
    FrameReceived,
    /// The buffer was unpacked
    Decoded,
    /// The screen was drawn and flushed
    Rendered,
    /// The poll interval elapsed
    SleepElapsed,
    /// Any failure in the cycle
    Fault,
}

impl PollState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, PollState::Unlocked)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: PollEvent) -> Self {
        use PollEvent::*;
        use PollState::*;

        match (self, event) {
            (Locked, ReadStarted) => Reading,
            (Reading, FrameReceived) => Decoding,
            (Decoding, Decoded) => Rendering,
            (Rendering, Rendered) => Sleeping,
            (Sleeping, SleepElapsed) => Reading,

            // Any failure releases the claim and ends the loop
            (_, Fault) => Unlocked,

            // Default: stay in current state
            _ => self,
        }
    }
}

/// Why the poll loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollError<B, D> {
    /// The result transfer failed
    Bus(B),
    /// The transfer produced a malformed buffer
    Decode(PacketError),
    /// The display rejected the screen
    Display(D),
}

/// The poll loop
///
/// Owns the loop state; bus, display, and delay are borrowed for the
/// duration of [`run`](Poller::run) so the caller keeps the resources
/// afterwards.
#[derive(Debug)]
pub struct Poller {
    config: PollConfig,
    state: PollState,
}

impl Poller {
    /// Create a poller with the given configuration
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            state: PollState::Locked,
        }
    }

    /// Current loop state
    pub fn state(&self) -> PollState {
        self.state
    }

    /// Claim the bus and poll until a fatal error
    ///
    /// Spins on the bus claim without a timeout; acquisition failure is
    /// never surfaced. Once claimed, each cycle reads one fixed-size
    /// result, decodes it, redraws the display, and sleeps the
    /// configured interval. The face list is rebuilt from scratch every
    /// cycle. On any failure the claim is released before the error is
    /// returned; that is the loop's only exit.
    pub fn run<B, D, T>(
        &mut self,
        bus: &mut B,
        display: &mut D,
        delay: &mut T,
    ) -> PollError<B::Error, D::Error>
    where
        B: SensorBus,
        D: DisplayDriver,
        T: Delay,
    {
        while !bus.try_claim() {}
        self.state = PollState::Locked;

        let mut buf = [0u8; SENSOR_RESULT_SIZE];

        self.state = self.state.transition(PollEvent::ReadStarted);
        loop {
            if let Err(e) = bus.read_result(&mut buf) {
                return self.fault(bus, PollError::Bus(e));
            }
            self.state = self.state.transition(PollEvent::FrameReceived);

            let result = match SensorResult::decode(&buf) {
                Ok(result) => result,
                Err(e) => return self.fault(bus, PollError::Decode(e)),
            };
            self.state = self.state.transition(PollEvent::Decoded);

            if let Err(e) = render_faces(result.faces()).draw(display) {
                return self.fault(bus, PollError::Display(e));
            }
            self.state = self.state.transition(PollEvent::Rendered);

            delay.delay_ms(self.config.interval_ms);
            self.state = self.state.transition(PollEvent::SleepElapsed);
        }
    }

    /// Release the bus claim and enter the terminal state
    fn fault<B: SensorBus, E>(&mut self, bus: &mut B, err: E) -> E {
        bus.release();
        self.state = self.state.transition(PollEvent::Fault);
        err
    }
}
