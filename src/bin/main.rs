#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embedded_hal::digital::StatefulOutputPin;
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::fugit::RateExtU32;
use rp2040_hal::gpio::{DynPinId, FunctionSioInput, FunctionSpi, Pin, Pins, PullUp};
use rp2040_hal::{self as hal, pac, Clock, Sio, Timer, Watchdog};
use static_cell::StaticCell;
use usb_device::bus::UsbBusAllocator;
use usb_device::device::{StringDescriptors, UsbDeviceBuilder, UsbVidPid};
use usbd_hid::hid_class::HIDClass;

use titan_gamepad::{config, Heartbeat, InputSampler, Scheduler, UsbHidSink, REPORT_DESCRIPTOR};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Second-stage bootloader for the Pico's W25Q080 flash.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// External crystal frequency on the Pico board.
const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;

/// Button input pin with its identity erased so all pins share one type.
type ButtonPin = Pin<DynPinId, FunctionSioInput, PullUp>;

/// The USB bus allocator must outlive the device and class borrowing it.
static USB_ALLOC: StaticCell<UsbBusAllocator<hal::usb::UsbBus>> = StaticCell::new();

#[hal::entry]
fn main() -> ! {
    info!("titan-gamepad starting...");

    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let mut led = pins.gpio25.into_push_pull_output();

    // Button inputs, in config::DIGITAL_MAPPINGS order.
    let button_pins: [ButtonPin; 16] = [
        pins.gpio0.into_pull_up_input().into_dyn_pin(),
        pins.gpio1.into_pull_up_input().into_dyn_pin(),
        pins.gpio2.into_pull_up_input().into_dyn_pin(),
        pins.gpio3.into_pull_up_input().into_dyn_pin(),
        pins.gpio4.into_pull_up_input().into_dyn_pin(),
        pins.gpio5.into_pull_up_input().into_dyn_pin(),
        pins.gpio6.into_pull_up_input().into_dyn_pin(),
        pins.gpio7.into_pull_up_input().into_dyn_pin(),
        pins.gpio10.into_pull_up_input().into_dyn_pin(),
        pins.gpio11.into_pull_up_input().into_dyn_pin(),
        pins.gpio12.into_pull_up_input().into_dyn_pin(),
        pins.gpio13.into_pull_up_input().into_dyn_pin(),
        pins.gpio14.into_pull_up_input().into_dyn_pin(),
        pins.gpio15.into_pull_up_input().into_dyn_pin(),
        pins.gpio16.into_pull_up_input().into_dyn_pin(),
        pins.gpio17.into_pull_up_input().into_dyn_pin(),
    ];
    for (pin, &(gpio, _)) in button_pins.iter().zip(config::DIGITAL_MAPPINGS.iter()) {
        debug_assert_eq!(pin.id().num, gpio, "pin array out of sync with mapping");
    }

    // SPI0 to the MCP3008. The CS line is handed to the SPI block so the
    // hardware frames each 3-byte exchange.
    let spi_sclk = pins.gpio18.into_function::<FunctionSpi>();
    let spi_mosi = pins.gpio19.into_function::<FunctionSpi>();
    let spi_miso = pins.gpio20.into_function::<FunctionSpi>();
    let _spi_csn = pins.gpio21.into_function::<FunctionSpi>();
    let spi = hal::spi::Spi::<_, _, _, 8>::new(pac.SPI0, (spi_mosi, spi_miso, spi_sclk)).init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        config::SPI_FREQ_HZ.Hz(),
        embedded_hal::spi::MODE_0,
    );

    let sampler = InputSampler::new(
        spi,
        button_pins,
        config::DIGITAL_MAPPINGS.map(|(_, button)| button),
        &config::ANALOG_MAPPINGS,
    );

    // USB: the HID class must be created before the device builder runs.
    let alloc = USB_ALLOC.init(UsbBusAllocator::new(hal::usb::UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    )));
    let hid = HIDClass::new(alloc, REPORT_DESCRIPTOR, config::USB_HID_POLL_MS);
    let device = UsbDeviceBuilder::new(alloc, UsbVidPid(config::USB_VID, config::USB_PID))
        .strings(&[StringDescriptors::default()
            .manufacturer(config::USB_MANUFACTURER)
            .product(config::USB_PRODUCT)
            .serial_number(config::USB_SERIAL_NUMBER)])
        .unwrap()
        .build();

    let mut scheduler = Scheduler::new(sampler, UsbHidSink::new(device, hid));
    let mut heartbeat = Heartbeat::new(config::HEARTBEAT_PERIOD_US);

    info!("titan-gamepad running");
    loop {
        if heartbeat.tick(timer.get_counter().ticks()) {
            let _ = led.toggle();
        }
        // A failed exchange leaves the previous report in effect; the next
        // cycle retries naturally.
        let _ = scheduler.poll_once();
    }
}
