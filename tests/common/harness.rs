//! tests/common/harness.rs
use bytes::Bytes;
use rtx_gate::{
    Config, Result, RtxStream, TemporalLayer,
    packet::{OutgoingPacket, PacketKind},
    transport::PacketSender,
};
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "rtx_gate=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .init();
    });
}

/// A loopback sender that counts what the stream puts on the wire.
#[derive(Debug, Default)]
pub struct CountingSender {
    pub packets: Vec<OutgoingPacket>,
}

impl CountingSender {
    /// Total packets sent, originals and retransmissions.
    pub fn sent(&self) -> usize {
        self.packets.len()
    }

    pub fn retransmissions(&self) -> usize {
        self.packets
            .iter()
            .filter(|p| p.kind == PacketKind::Retransmission)
            .count()
    }

    pub fn last_sequence_number(&self) -> Option<u16> {
        self.packets.last().map(|p| p.sequence_number)
    }
}

impl PacketSender for CountingSender {
    fn send_packet(&mut self, packet: OutgoingPacket) -> Result<()> {
        self.packets.push(packet);
        Ok(())
    }
}

/// A test harness owning a video stream that starts at a fixed sequence number.
pub struct TestHarness {
    pub stream: RtxStream<CountingSender>,
}

impl TestHarness {
    pub const FIRST_SEQ: u16 = 100;

    pub fn new(config: Config) -> Self {
        init_tracing();
        let mut config = config;
        config.stream.initial_sequence_number = Some(Self::FIRST_SEQ);
        let stream = RtxStream::new(&config, CountingSender::default(), Duration::ZERO).unwrap();
        Self { stream }
    }

    /// Sends one frame of `packets` packets on `layer`.
    pub fn send_frame(&mut self, layer: TemporalLayer, packets: usize) -> Vec<u16> {
        (0..packets)
            .map(|i| {
                let payload = Bytes::from(format!("layer={layer} part={i}"));
                self.stream.send(payload, layer).unwrap()
            })
            .collect()
    }
}
