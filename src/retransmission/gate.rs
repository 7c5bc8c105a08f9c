//! The retransmission gate.
//! 重传门控。

use super::{
    decision::{LossReportResult, RetransmitDecision, RetransmitReason},
    policy::RetransmissionPolicy,
    stats::RetransmissionStats,
};
use crate::{
    config::Config,
    error::Result,
    history::OutgoingPacketLog,
    packet::TemporalLayer,
    transport::PacketSender,
};
use bytes::Bytes;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// Decides, for each sequence number a receiver reports lost, whether the
/// original packet is resent.
///
/// The gate owns the history of sent packets. Mutations take `&mut self`;
/// [`evaluate`](Self::evaluate) only reads, so callers serialize evaluation
/// and history updates through ordinary borrowing.
///
/// 针对接收端报告丢失的每个序列号决定是否重发原始包。
/// 门控拥有已发送包的历史。
#[derive(Debug)]
pub struct RetransmissionGate {
    policy: RetransmissionPolicy,
    history: OutgoingPacketLog,
    stats: RetransmissionStats,
}

impl RetransmissionGate {
    /// Creates a gate with an empty history of the given capacity.
    /// 创建一个具有给定容量空历史的门控。
    pub fn new(policy: RetransmissionPolicy, history_capacity: usize) -> Result<Self> {
        Ok(Self {
            policy,
            history: OutgoingPacketLog::new(history_capacity)?,
            stats: RetransmissionStats::default(),
        })
    }

    /// Creates a gate from configuration and the current round-trip time.
    /// 由配置和当前往返时间创建门控。
    pub fn from_config(config: &Config, rtt: Duration) -> Result<Self> {
        config.validate()?;
        Self::new(
            RetransmissionPolicy::from_config(&config.retransmission, rtt),
            config.history.capacity,
        )
    }

    /// Consumes this gate and builds a fresh one running `policy`. The packet
    /// history and counters carry over.
    ///
    /// 消耗当前门控并构建一个使用 `policy` 的新门控，包历史和计数器保留。
    pub fn with_policy(self, policy: RetransmissionPolicy) -> Self {
        debug!(
            old_mode = ?self.policy.mode(),
            new_mode = ?policy.mode(),
            rtt_ms = policy.rtt().as_millis(),
            "Rebuilding retransmission gate with new policy"
        );
        Self {
            policy,
            history: self.history,
            stats: self.stats,
        }
    }

    pub fn policy(&self) -> &RetransmissionPolicy {
        &self.policy
    }

    pub fn history(&self) -> &OutgoingPacketLog {
        &self.history
    }

    pub fn stats(&self) -> &RetransmissionStats {
        &self.stats
    }

    /// Records a packet that was just sent.
    /// 记录一个刚发送的包。
    pub fn on_packet_sent(
        &mut self,
        sequence_number: u16,
        temporal_layer: TemporalLayer,
        payload: Bytes,
        now: Instant,
    ) {
        self.history.record(sequence_number, now, temporal_layer, payload);
    }

    /// Decides whether `sequence_number` would be resent at `now`. Reads only.
    ///
    /// 判断 `sequence_number` 在 `now` 时是否会被重传。只读。
    pub fn evaluate(&self, sequence_number: u16, now: Instant) -> RetransmitDecision {
        let reason = match self.check(sequence_number, now) {
            Ok(_) => RetransmitReason::Approved,
            Err(reason) => reason,
        };
        RetransmitDecision::new(sequence_number, reason)
    }

    /// Looks the packet up and applies the policy, yielding the stored
    /// payload when the packet may be resent.
    fn check(
        &self,
        sequence_number: u16,
        now: Instant,
    ) -> std::result::Result<&Bytes, RetransmitReason> {
        let Some(packet) = self.history.get(sequence_number) else {
            return Err(RetransmitReason::NotFound);
        };
        let record = &packet.record;

        if !self.policy.mode().allows(record.temporal_layer) {
            return Err(RetransmitReason::LayerFiltered);
        }

        let elapsed = now.saturating_duration_since(record.send_time);
        if elapsed < self.policy.required_elapsed() {
            return Err(RetransmitReason::TooSoon);
        }

        Ok(&packet.payload)
    }

    /// Handles one NACKed sequence number: evaluates it and, if approved,
    /// asks `sender` to resend the stored payload. A sender error is returned
    /// as-is and the packet's send time is left untouched.
    ///
    /// 处理一个被NACK的序列号：评估并在批准时请求 `sender` 重发保存的载荷。
    /// 发送方的错误原样返回，包的发送时间保持不变。
    pub fn on_nack<S>(
        &mut self,
        sequence_number: u16,
        now: Instant,
        sender: &mut S,
    ) -> Result<RetransmitDecision>
    where
        S: PacketSender + ?Sized,
    {
        let payload = match self.check(sequence_number, now).cloned() {
            Ok(payload) => payload,
            Err(reason) => {
                self.stats.on_decision(reason);
                if reason == RetransmitReason::NotFound {
                    trace!(
                        seq = sequence_number,
                        oldest = ?self.history.oldest(),
                        newest = ?self.history.newest(),
                        "NACK outside history window"
                    );
                } else {
                    trace!(seq = sequence_number, %reason, "NACK not honored");
                }
                return Ok(RetransmitDecision::new(sequence_number, reason));
            }
        };
        let decision = RetransmitDecision::new(sequence_number, RetransmitReason::Approved);
        self.stats.on_decision(decision.reason);

        if let Err(e) = sender.resend_packet(sequence_number, payload) {
            self.stats.on_resend(false);
            warn!(seq = sequence_number, error = %e, "Retransmission failed");
            return Err(e);
        }

        self.stats.on_resend(true);
        if let Some(count) = self.history.mark_retransmitted(sequence_number, now) {
            debug!(
                seq = sequence_number,
                retransmit_count = count,
                "Packet retransmitted on NACK"
            );
        }
        Ok(decision)
    }

    /// Handles a batch of reported sequence numbers. Entries are independent:
    /// a failed resend is recorded in the result and the rest of the batch is
    /// still processed.
    ///
    /// 处理一批被报告的序列号。条目相互独立：重传失败会记录在结果中，
    /// 批次中其余条目仍会继续处理。
    pub fn on_loss_report<S>(
        &mut self,
        sequence_numbers: &[u16],
        now: Instant,
        sender: &mut S,
    ) -> LossReportResult
    where
        S: PacketSender + ?Sized,
    {
        let mut result = LossReportResult {
            decisions: Vec::with_capacity(sequence_numbers.len()),
            ..Default::default()
        };

        for &seq in sequence_numbers {
            match self.on_nack(seq, now, sender) {
                Ok(decision) => {
                    if decision.should_resend {
                        result.resent.push(seq);
                    }
                    result.decisions.push(decision);
                }
                Err(e) => {
                    result
                        .decisions
                        .push(RetransmitDecision::new(seq, RetransmitReason::Approved));
                    result.failed.push((seq, e));
                }
            }
        }

        debug!(
            reported = sequence_numbers.len(),
            resent = result.resent.len(),
            failed = result.failed.len(),
            "Processed loss report"
        );
        result
    }
}
