//! End-to-end tests for the polling pipeline with the real board
//! configuration and simulated hardware.

use titan_gamepad::{config, GamepadReport, HidTransport, InputSampler, ReportSource, Scheduler};

use core::convert::Infallible;
use embedded_hal::digital::InputPin;
use embedded_hal::spi::SpiBus;

/// Simulated button pin; `high == true` means released.
struct SimPin {
    high: bool,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Simulated MCP3008 answering every channel from a sample table.
struct SimAdc {
    samples: [u16; 8],
}

impl embedded_hal::spi::ErrorType for SimAdc {
    type Error = Infallible;
}

impl SpiBus for SimAdc {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let channel = ((write[1] >> 4) & 0x07) as usize;
        let sample = self.samples[channel];
        read[0] = 0xFF;
        read[1] = (sample >> 8) as u8;
        read[2] = sample as u8;
        Ok(())
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct SimTransport {
    ready: bool,
    refusals: usize,
    submitted: Vec<GamepadReport>,
}

impl HidTransport for SimTransport {
    fn service(&mut self) {}

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn submit(&mut self, report: &GamepadReport) -> bool {
        if self.refusals > 0 {
            self.refusals -= 1;
            return false;
        }
        self.submitted.push(*report);
        true
    }
}

/// Sampler over the real mapping tables: `pressed` lists indexes into
/// `config::DIGITAL_MAPPINGS` whose switch is held down.
fn board_sampler(pressed: &[usize], samples: [u16; 8]) -> InputSampler<SimAdc, SimPin, 16> {
    let pins: [SimPin; 16] = core::array::from_fn(|i| SimPin {
        high: !pressed.contains(&i),
    });
    InputSampler::new(
        SimAdc { samples },
        pins,
        config::DIGITAL_MAPPINGS.map(|(_, button)| button),
        &config::ANALOG_MAPPINGS,
    )
}

#[test]
fn idle_inputs_produce_the_all_zero_report() {
    // No buttons pressed, every stick at mid-scale.
    let mut sampler = board_sampler(&[], [512; 8]);

    let report = sampler.sample().unwrap();
    assert_eq!(report.as_bytes(), [0u8; 8]);
}

#[test]
fn first_switch_sets_exactly_button_bit_zero() {
    let mut sampler = board_sampler(&[0], [512; 8]);

    let report = sampler.sample().unwrap();
    assert_eq!(report.buttons, 1 << 0);
}

#[test]
fn hotfix_entries_map_to_their_swapped_bits() {
    // GPIO 16 and 17 are the out-of-order table entries (bits 12 and 8).
    let gpio16 = config::DIGITAL_MAPPINGS.iter().position(|&(p, _)| p == 16);
    let gpio17 = config::DIGITAL_MAPPINGS.iter().position(|&(p, _)| p == 17);

    let mut sampler = board_sampler(&[gpio16.unwrap(), gpio17.unwrap()], [512; 8]);
    let report = sampler.sample().unwrap();
    assert_eq!(report.buttons, (1 << 12) | (1 << 8));
}

#[test]
fn stick_deflection_reaches_the_mapped_axis_fields() {
    let mut samples = [512u16; 8];
    samples[0] = 0; // left X hard over
    samples[5] = 1023; // right Z hard over

    let mut sampler = board_sampler(&[], samples);
    let report = sampler.sample().unwrap();
    assert_eq!(report.x, -128);
    assert_eq!(report.rz, 127);
    assert_eq!(report.y, 0);
}

#[test]
fn steady_inputs_submit_one_report_through_the_scheduler() {
    let transport = SimTransport {
        ready: true,
        refusals: 0,
        submitted: Vec::new(),
    };
    let mut scheduler = Scheduler::new(board_sampler(&[3], [512; 8]), transport);

    let mut submissions = 0;
    for _ in 0..10 {
        if scheduler.poll_once().unwrap() {
            submissions += 1;
        }
    }
    assert_eq!(submissions, 1);
}

#[test]
fn press_during_busy_endpoint_still_reaches_the_host() {
    // The endpoint refuses the first push, as when the previous report is
    // still in flight at poll time.
    let transport = SimTransport {
        ready: true,
        refusals: 1,
        submitted: Vec::new(),
    };
    let mut scheduler = Scheduler::new(board_sampler(&[3], [512; 8]), transport);

    let mut submissions = 0;
    for _ in 0..10 {
        if scheduler.poll_once().unwrap() {
            submissions += 1;
        }
    }
    assert_eq!(submissions, 1);

    let delivered = scheduler.transport().submitted.last().unwrap();
    assert_eq!(delivered.buttons, 1 << 3);
}

#[test]
fn detached_host_pauses_the_pipeline() {
    let transport = SimTransport {
        ready: false,
        refusals: 0,
        submitted: Vec::new(),
    };
    let mut scheduler = Scheduler::new(board_sampler(&[3], [512; 8]), transport);

    for _ in 0..10 {
        assert_eq!(scheduler.poll_once(), Ok(false));
    }
}
