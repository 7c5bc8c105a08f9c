//! NACK-driven selective retransmission.
//!
//! A [`RetransmissionGate`] holds the history of sent packets and decides, for
//! every sequence number a receiver reports as lost, whether the original
//! packet is resent. The decision depends on the packet's temporal layer and
//! on how long ago it was last put on the wire.
//!
//! 基于NACK的选择性重传。
//!
//! [`RetransmissionGate`] 保存已发送包的历史，并针对接收端报告丢失的每个序列号
//! 决定是否重发原始包。决策取决于包的时间层以及它上次发出后经过的时间。

mod decision;
mod gate;
mod policy;
mod stats;

pub use decision::{LossReportResult, RetransmitDecision, RetransmitReason};
pub use gate::RetransmissionGate;
pub use policy::{RetransmissionMode, RetransmissionPolicy};
pub use stats::RetransmissionStats;
