//! The send path of one media stream.
//!
//! An [`RtxStream`] numbers outgoing packets, keeps them in the gate's
//! history, hands them to a [`PacketSender`], and answers loss reports.
//!
//! 单个媒体流的发送路径。
//!
//! [`RtxStream`] 为出站包编号，将其保存在门控的历史中，交给 [`PacketSender`]，
//! 并响应丢包报告。

use crate::{
    config::Config,
    error::Result,
    packet::{OutgoingPacket, SequenceNumberAllocator, TemporalLayer},
    retransmission::{LossReportResult, RetransmissionGate},
    transport::PacketSender,
};
use bytes::Bytes;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Sender side of a media stream with NACK-driven retransmission.
///
/// 带有基于NACK重传的媒体流发送端。
#[derive(Debug)]
pub struct RtxStream<S: PacketSender> {
    sequence: SequenceNumberAllocator,
    gate: RetransmissionGate,
    sender: S,
    packets_sent: u64,
}

impl<S: PacketSender> RtxStream<S> {
    /// Creates a stream. `rtt` is the round-trip time known at creation,
    /// usually zero until the first report arrives.
    ///
    /// 创建一个流。`rtt` 为创建时已知的往返时间，通常在首个报告到达前为零。
    pub fn new(config: &Config, sender: S, rtt: Duration) -> Result<Self> {
        let gate = RetransmissionGate::from_config(config, rtt)?;
        let sequence = match config.stream.initial_sequence_number {
            Some(seq) => SequenceNumberAllocator::new(seq),
            None => SequenceNumberAllocator::random(),
        };
        debug!(
            initial_seq = sequence.peek(),
            history_capacity = config.history.capacity,
            mode = ?config.retransmission.mode,
            "Created RTX stream"
        );
        Ok(Self {
            sequence,
            gate,
            sender,
            packets_sent: 0,
        })
    }

    /// Sends a new packet and returns its sequence number. The packet is
    /// recorded before it is handed to the sender, so it can be NACKed even if
    /// the send fails.
    ///
    /// 发送一个新包并返回其序列号。包在交给发送方之前被记录，
    /// 因此即使发送失败也可以被NACK。
    pub fn send(&mut self, payload: Bytes, temporal_layer: TemporalLayer) -> Result<u16> {
        let seq = self.sequence.allocate();
        self.gate.on_packet_sent(seq, temporal_layer, payload.clone(), Instant::now());
        trace!(seq, layer = %temporal_layer, "Sending packet");
        self.sender.send_packet(OutgoingPacket::original(seq, payload))?;
        self.packets_sent += 1;
        Ok(seq)
    }

    /// Answers a loss report received now.
    ///
    /// 响应当前收到的丢包报告。
    pub fn on_loss_report(&mut self, sequence_numbers: &[u16]) -> LossReportResult {
        self.gate.on_loss_report(sequence_numbers, Instant::now(), &mut self.sender)
    }

    /// Continues with a fresh gate whose policy carries the new round-trip
    /// time. The packet history and sequence numbering are kept.
    ///
    /// 使用一个策略携带新往返时间的新门控继续运行，包历史和序列号保留。
    pub fn with_rtt(self, rtt: Duration) -> Self {
        let policy = self.gate.policy().with_rtt(rtt);
        Self {
            gate: self.gate.with_policy(policy),
            ..self
        }
    }

    /// The sequence number the next [`send`](Self::send) uses.
    pub fn next_sequence_number(&self) -> u16 {
        self.sequence.peek()
    }

    /// Number of original packets handed to the sender.
    pub fn packets_sent(&self) -> u64 {
        self.packets_sent
    }

    pub fn gate(&self) -> &RetransmissionGate {
        &self.gate
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn sender_mut(&mut self) -> &mut S {
        &mut self.sender
    }
}
