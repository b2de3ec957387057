mod tests {
    use motion_strip::channel::TrySendError;
    use motion_strip::color::Rgb;
    use motion_strip::{
        Applied, ControllerConfig, LightController, LightStrip, OutputDriver, PayloadChannel,
        ResetError, StripError, SystemReset,
    };

    const NUM_LEDS: usize = 8;

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last = colors.to_vec();
        }
    }

    #[derive(Default)]
    struct CountingReset {
        calls: usize,
        fail: bool,
    }

    impl SystemReset for CountingReset {
        fn request_reset(&mut self) -> Result<(), ResetError> {
            self.calls += 1;
            if self.fail { Err(ResetError) } else { Ok(()) }
        }
    }

    fn strip(reset: CountingReset) -> LightStrip<RecordingDriver, CountingReset, NUM_LEDS> {
        let controller = LightController::new(&ControllerConfig::default());
        LightStrip::new(controller, RecordingDriver::default(), reset)
    }

    #[test]
    fn test_new_pushes_initial_frame() {
        let strip = strip(CountingReset::default());
        assert_eq!(strip.output().writes, 1);
        assert_eq!(strip.output().last, strip.controller().frame());
    }

    #[test]
    fn test_handle_writes_result() {
        let mut strip = strip(CountingReset::default());
        assert_eq!(strip.handle(b"H_SET,0"), Ok(Applied::Color));
        assert_eq!(strip.output().writes, 2);
        assert_eq!(strip.output().last, strip.controller().frame());
    }

    #[test]
    fn test_rejected_payload_is_not_written() {
        let mut strip = strip(CountingReset::default());
        let result = strip.handle(b"nope");
        assert!(matches!(result, Err(StripError::Command(_))));
        assert_eq!(strip.output().writes, 1);
    }

    #[test]
    fn test_reset_is_forwarded() {
        let mut strip = strip(CountingReset::default());
        assert_eq!(strip.handle(b"RESET"), Ok(Applied::ResetRequested));
        assert_eq!(strip.output().writes, 1);

        let mut failing = self::strip(CountingReset {
            calls: 0,
            fail: true,
        });
        assert_eq!(
            failing.handle(b"RESET"),
            Err(StripError::Reset(ResetError))
        );
    }

    #[test]
    fn test_drain_in_order() {
        let payloads: PayloadChannel<64, 4> = PayloadChannel::new();
        let sender = payloads.sender();
        sender.try_send(b"H_SET,120").unwrap();
        sender.try_send(b"garbage").unwrap();
        sender.try_send(b"B_SET,100").unwrap();

        let mut strip = strip(CountingReset::default());
        assert_eq!(strip.drain(&payloads.receiver()), 3);
        assert!(payloads.is_empty());
        assert_eq!(strip.output().writes, 3);
        assert_eq!(strip.output().last, [Rgb::new(0, 255, 0); NUM_LEDS]);
    }

    #[test]
    fn test_drain_stops_after_reset() {
        let payloads: PayloadChannel<64, 4> = PayloadChannel::new();
        payloads.try_send(b"RESET").unwrap();
        payloads.try_send(b"H_SET,0").unwrap();

        let mut strip = strip(CountingReset::default());
        assert_eq!(strip.drain(&payloads.receiver()), 1);
        assert_eq!(payloads.len(), 1);
    }

    #[test]
    fn test_channel_full_returns_payload() {
        let payloads: PayloadChannel<16, 2> = PayloadChannel::new();
        payloads.try_send(b"H,1").unwrap();
        payloads.try_send(b"H,2").unwrap();
        let Err(TrySendError(payload)) = payloads.try_send(b"H,3") else {
            panic!("expected a full channel");
        };
        assert_eq!(&payload[..], b"H,3");
        assert_eq!(&payloads.try_receive().unwrap()[..], b"H,1");
    }

    #[test]
    fn test_channel_cuts_long_payloads() {
        let payloads: PayloadChannel<4, 1> = PayloadChannel::new();
        payloads.try_send(b"H_SET,9").unwrap();
        assert_eq!(&payloads.receiver().try_receive().unwrap()[..], b"H_SE");
        assert!(payloads.try_receive().is_err());
    }
}
