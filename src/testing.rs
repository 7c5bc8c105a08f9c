//! 测试辅助工具模块
//! Test utilities module

use crate::{
    error::{Error, Result},
    packet::OutgoingPacket,
    transport::PacketSender,
};
use std::sync::Once;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "rtx_gate=debug".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A sender that keeps every packet it is given. While `fail` is set it
/// rejects packets with [`Error::ChannelFull`] instead.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: Vec<OutgoingPacket>,
    pub fail: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sequence_number(&self) -> Option<u16> {
        self.sent.last().map(|p| p.sequence_number)
    }
}

impl PacketSender for RecordingSender {
    fn send_packet(&mut self, packet: OutgoingPacket) -> Result<()> {
        if self.fail {
            return Err(Error::ChannelFull);
        }
        self.sent.push(packet);
        Ok(())
    }
}
