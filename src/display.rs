//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::config::Config;
use crate::controller::Controller;
use crate::error::Error;
use crate::interface::LcdInterface;
use crate::target::RenderTarget;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver facade for one panel
///
/// Owns the hardware interface and configuration, and records the
/// render target binding after bring-up. The controller variant is the
/// type parameter `C` — a build-time decision, never a runtime one.
///
/// Single-threaded and non-reentrant by construction: every operation
/// blocks to completion on the exclusively-owned bus, typically during
/// system startup before any scheduler runs.
pub struct Display<'b, I, C>
where
    I: LcdInterface,
    C: Controller,
{
    /// Hardware interface
    interface: I,
    /// Panel tunables
    config: Config<C>,
    /// Bound render target, set by [`init`](Self::init)
    target: Option<RenderTarget<'b>>,
}

impl<'b, I, C> Display<'b, I, C>
where
    I: LcdInterface,
    C: Controller,
{
    /// Create a new Display instance
    ///
    /// No hardware is touched until [`init`](Self::init) or
    /// [`reset`](Self::reset) runs.
    pub fn new(interface: I, config: Config<C>) -> Self {
        Self {
            interface,
            config,
            target: None,
        }
    }

    /// Run the full bring-up sequence, then bind and clear `target`
    ///
    /// Issues the controller's fixed command sequence (including the
    /// hardware reset pulse) in deterministic order. Carries no state
    /// between runs: calling `init` again replays the same sequence and
    /// rebinds.
    pub fn init<D: DelayNs>(
        &mut self,
        target: RenderTarget<'b>,
        delay: &mut D,
    ) -> DisplayResult<I> {
        debug!("display: init");
        C::bring_up(&mut self.interface, &self.config, delay).map_err(Error::Interface)?;
        self.bind_target(target)
    }

    /// Perform the hardware reset pulse on its own
    ///
    /// For recovery scenarios outside full bring-up. Select is held
    /// across the pulse and no command bytes are transferred.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        trace!("display: reset pulse");
        self.interface
            .reset(delay, C::RESET_PULSE_MS)
            .map_err(Error::Interface)
    }

    /// Issue a single command byte to the panel
    pub fn command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface
            .send_command(command)
            .map_err(Error::Interface)
    }

    /// Issue pixel-data bytes to the panel
    pub fn write_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Bind a render target, clearing it
    ///
    /// Replaces any previous binding. The buffer stays externally
    /// owned; the driver only records the association.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if the buffer cannot hold a
    /// full frame for this controller.
    pub fn bind_target(&mut self, mut target: RenderTarget<'b>) -> DisplayResult<I> {
        let provided = target.buffer().len();
        if provided < C::BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: C::BUFFER_SIZE,
                provided,
            });
        }
        target.clear();
        self.target = Some(target);
        Ok(())
    }

    /// The bound render target, if any
    pub fn target(&self) -> Option<&RenderTarget<'b>> {
        self.target.as_ref()
    }

    /// Mutable access to the bound render target, for the drawing layer
    pub fn target_mut(&mut self) -> Option<&mut RenderTarget<'b>> {
        self.target.as_mut()
    }

    /// Panel width in pixels
    pub fn width(&self) -> u8 {
        C::WIDTH
    }

    /// Panel height in pixels
    pub fn height(&self) -> u8 {
        C::HEIGHT
    }

    /// Access the configuration
    pub fn config(&self) -> &Config<C> {
        &self.config
    }

    /// Give back the interface and any bound target
    pub fn release(self) -> (I, Option<RenderTarget<'b>>) {
        (self.interface, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{pcd8544, st7565r};
    use crate::config::Builder;
    use crate::controller::{Pcd8544, St7565r};
    use crate::target::BoundingBox;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Command(u8),
        Data(Vec<u8>),
        Reset(u32),
    }

    #[derive(Debug, Default)]
    struct MockInterface {
        ops: Vec<Op>,
    }

    impl LcdInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.ops.push(Op::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.ops.push(Op::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D, pulse_ms: u32) -> Result<(), Self::Error> {
            self.ops.push(Op::Reset(pulse_ms));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        delays_ns: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ns.push(ns);
        }
    }

    fn pcd8544_display() -> Display<'static, MockInterface, Pcd8544> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::default(), config)
    }

    fn st7565r_display() -> Display<'static, MockInterface, St7565r> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::default(), config)
    }

    fn pcd8544_expected_ops() -> Vec<Op> {
        alloc::vec![
            Op::Reset(1),
            Op::Command(pcd8544::FUNCTION_SET | pcd8544::EXTENDED_INSTRUCTION),
            Op::Command(pcd8544::SET_BIAS | 0x2),
            Op::Command(pcd8544::SET_VOP | 80),
            Op::Command(pcd8544::FUNCTION_SET),
            Op::Command(pcd8544::DISPLAY_CONTROL | pcd8544::DISPLAY_NORMAL),
        ]
    }

    #[test]
    fn pcd8544_init_issues_the_exact_sequence_and_nothing_else() {
        let mut display = pcd8544_display();
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0xFFu8; Pcd8544::BUFFER_SIZE].leak();
        let target = RenderTarget::new(buffer, BoundingBox::panel(84, 48));

        display.init(target, &mut delay).unwrap();

        assert_eq!(display.interface.ops, pcd8544_expected_ops());
    }

    #[test]
    fn pcd8544_init_binds_and_clears_the_target() {
        let mut display = pcd8544_display();
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0xFFu8; Pcd8544::BUFFER_SIZE].leak();
        let target = RenderTarget::new(buffer, BoundingBox::panel(84, 48));

        display.init(target, &mut delay).unwrap();

        let target = display.target().unwrap();
        assert!(target.buffer().iter().all(|&byte| byte == 0));
        assert_eq!(target.dirty(), BoundingBox::panel(84, 48));
    }

    #[test]
    fn init_is_idempotent_across_runs() {
        let mut display = pcd8544_display();
        let mut delay = RecordingDelay::default();
        let first = alloc::vec![0u8; Pcd8544::BUFFER_SIZE].leak();
        let second = alloc::vec![0u8; Pcd8544::BUFFER_SIZE].leak();

        display
            .init(RenderTarget::new(first, BoundingBox::panel(84, 48)), &mut delay)
            .unwrap();
        display
            .init(RenderTarget::new(second, BoundingBox::panel(84, 48)), &mut delay)
            .unwrap();

        let mut expected = pcd8544_expected_ops();
        expected.extend(pcd8544_expected_ops());
        assert_eq!(display.interface.ops, expected);
    }

    #[test]
    fn st7565r_init_issues_the_strict_command_order() {
        let mut display = st7565r_display();
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0u8; St7565r::BUFFER_SIZE].leak();
        let target = RenderTarget::new(buffer, BoundingBox::panel(128, 64));

        display.init(target, &mut delay).unwrap();

        let mut expected = alloc::vec![
            Op::Reset(1),
            Op::Command(st7565r::BIAS_RATIO),
            Op::Command(st7565r::ADC_NORMAL),
            Op::Command(st7565r::COM_REVERSE),
            Op::Command(st7565r::ALL_POINTS_NORMAL),
            Op::Command(st7565r::START_LINE),
            Op::Command(st7565r::RESISTOR_RATIO | 0x5),
            Op::Command(st7565r::VOLUME_MODE_SET),
            Op::Command(45),
            Op::Command(st7565r::POWER_CONTROL | 0x7),
            Op::Command(st7565r::DISPLAY_ON),
            Op::Command(st7565r::ALL_POINTS_ON),
            Op::Command(st7565r::ALL_POINTS_NORMAL),
            Op::Command(st7565r::START_LINE),
        ];
        for page in 0..8u8 {
            expected.push(Op::Command(st7565r::PAGE_ADDRESS | page));
            expected.push(Op::Command(st7565r::COLUMN_HIGH));
            expected.push(Op::Command(st7565r::COLUMN_LOW));
            expected.push(Op::Data(alloc::vec![0u8; 128]));
        }
        assert_eq!(display.interface.ops, expected);
    }

    #[test]
    fn st7565r_init_waits_for_settle_and_lamp_test() {
        let mut display = st7565r_display();
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0u8; St7565r::BUFFER_SIZE].leak();
        let target = RenderTarget::new(buffer, BoundingBox::panel(128, 64));

        display.init(target, &mut delay).unwrap();

        // 30ms power-on settle, then 500ms all-points-on hold.
        assert_eq!(delay.delays_ns.first(), Some(&30_000_000));
        assert!(delay.delays_ns.contains(&500_000_000));
    }

    #[test]
    fn command_passes_one_byte_through() {
        let mut display = pcd8544_display();
        display.command(0x3F).unwrap();
        assert_eq!(display.interface.ops, alloc::vec![Op::Command(0x3F)]);
    }

    #[test]
    fn write_data_passes_bytes_through() {
        let mut display = pcd8544_display();
        display.write_data(&[0xDE, 0xAD]).unwrap();
        assert_eq!(
            display.interface.ops,
            alloc::vec![Op::Data(alloc::vec![0xDE, 0xAD])]
        );
    }

    #[test]
    fn standalone_reset_transfers_no_command_bytes() {
        let mut display = st7565r_display();
        let mut delay = RecordingDelay::default();
        display.reset(&mut delay).unwrap();
        assert_eq!(display.interface.ops, alloc::vec![Op::Reset(1)]);
    }

    #[test]
    fn bind_rejects_undersized_buffers() {
        let mut display = pcd8544_display();
        let buffer = alloc::vec![0u8; 10].leak();
        let target = RenderTarget::new(buffer, BoundingBox::panel(84, 48));
        let result = display.bind_target(target);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 504,
                provided: 10
            })
        ));
        assert!(display.target().is_none());
    }

    #[test]
    fn contrast_override_lands_in_the_vop_command() {
        let config = Builder::<Pcd8544>::new().contrast(0x40).build().unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0u8; Pcd8544::BUFFER_SIZE].leak();

        display
            .init(
                RenderTarget::new(buffer, BoundingBox::panel(84, 48)),
                &mut delay,
            )
            .unwrap();

        assert!(display
            .interface
            .ops
            .contains(&Op::Command(pcd8544::SET_VOP | 0x40)));
    }

    #[test]
    fn release_returns_interface_and_target() {
        let mut display = pcd8544_display();
        let mut delay = RecordingDelay::default();
        let buffer = alloc::vec![0u8; Pcd8544::BUFFER_SIZE].leak();
        display
            .init(
                RenderTarget::new(buffer, BoundingBox::panel(84, 48)),
                &mut delay,
            )
            .unwrap();

        let (interface, target) = display.release();
        assert!(!interface.ops.is_empty());
        assert!(target.is_some());
    }
}
