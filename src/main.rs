#![no_main]
#![no_std]

use lib as _;

use lib::config::Config;
use lib::error::Error;
use lib::hw::{
    init_clock, init_lcd, Adc, BoardClock, HwClock, HwLcd, LcdInterface, MillisCounter,
};
use lib::visualizer::Visualizer;
use lib::BUFFER_LEN;
use rtic::app;
use stm32g0xx_hal::delay::DelayExt;
use stm32g0xx_hal::gpio::{GpioExt, Speed};

#[app(device = stm32g0xx_hal::stm32, peripherals = true)]
const APP: () = {
    struct Resources {
        visualizer: Visualizer<HwLcd, Adc, BoardClock, BUFFER_LEN>,
    }

    #[init]
    fn init(cx: init::Context) -> init::LateResources {
        let core: rtic::export::Peripherals = cx.core;
        let device: stm32g0xx_hal::stm32::Peripherals = cx.device;

        // Clock
        let mut rcc = init_clock(device.RCC);
        let mut delay = core.SYST.delay(&mut rcc);

        // GPIO
        let gpioa = device.GPIOA.split(&mut rcc);
        let gpiob = device.GPIOB.split(&mut rcc);

        // LCD
        let interface = LcdInterface::new(
            gpiob.pb0.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb1.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb2.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb3.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb4.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb5.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb6.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb7.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb8.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb9.into_push_pull_output().set_speed(Speed::VeryHigh),
        );
        let lcd = init_lcd(
            interface,
            gpioa.pa4.into_push_pull_output(),
            gpioa.pa5.into_push_pull_output(),
            &mut delay,
        )
        .unwrap();

        // ADC
        let adc = Adc::new(device.ADC, gpioa.pa1, &mut rcc, &mut delay);

        // Time base
        let counter = MillisCounter::new(device.TIM3, &mut rcc);
        let clock = HwClock::new(counter, delay);

        let visualizer = Visualizer::new(lcd, adc, clock, Config::DEFAULT);

        init::LateResources { visualizer }
    }

    #[idle(resources = [visualizer])]
    fn idle(cx: idle::Context) -> ! {
        let visualizer: &mut Visualizer<_, _, _, BUFFER_LEN> = cx.resources.visualizer;

        match visualizer.start().and_then(|()| visualizer.run()) {
            Err(Error::Lcd(_)) => defmt::error!("display stopped responding"),
            Err(Error::BufferWrite) => defmt::error!("text buffer overflow"),
            Ok(()) => {}
        }
        lib::exit()
    }
};
