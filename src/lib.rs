#![deny(clippy::expect_used, clippy::unwrap_used)]

//! NACK-driven selective retransmission for media senders.
//! 面向媒体发送端的基于NACK的选择性重传。

pub mod config;
pub mod error;
pub mod history;
pub mod packet;
pub mod retransmission;
pub mod stream;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, Result};
pub use packet::TemporalLayer;
pub use retransmission::{
    RetransmissionGate, RetransmissionMode, RetransmissionPolicy, RetransmitDecision,
    RetransmitReason,
};
pub use stream::RtxStream;
