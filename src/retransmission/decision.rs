use crate::error::Error;
use std::fmt;

/// Why a retransmission was or was not issued.
///
/// 发出或不发出重传的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetransmitReason {
    /// The packet is not in the history: never sent, or already evicted.
    /// 包不在历史中：从未发送过或已被淘汰。
    NotFound,
    /// The policy does not retransmit this packet's temporal layer.
    /// 策略不重传该包所在的时间层。
    LayerFiltered,
    /// The packet was (re)sent less than the required time ago.
    /// 包距上次（重）发送的时间不足。
    TooSoon,
    /// The packet is resent.
    /// 包将被重传。
    Approved,
}

impl fmt::Display for RetransmitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RetransmitReason::NotFound => "not_found",
            RetransmitReason::LayerFiltered => "layer_filtered",
            RetransmitReason::TooSoon => "too_soon",
            RetransmitReason::Approved => "approved",
        };
        f.write_str(s)
    }
}

/// The outcome of evaluating one reported sequence number.
///
/// 评估一个被报告序列号的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetransmitDecision {
    /// The reported sequence number.
    pub sequence_number: u16,
    /// `true` only for [`RetransmitReason::Approved`].
    pub should_resend: bool,
    /// Why.
    pub reason: RetransmitReason,
}

impl RetransmitDecision {
    pub fn new(sequence_number: u16, reason: RetransmitReason) -> Self {
        Self {
            sequence_number,
            should_resend: reason == RetransmitReason::Approved,
            reason,
        }
    }
}

/// Result of processing a loss report batch.
///
/// 处理一批丢包报告的结果。
#[derive(Debug, Default)]
pub struct LossReportResult {
    /// One decision per reported entry, in report order.
    /// 每个报告条目一个决策，按报告顺序排列。
    pub decisions: Vec<RetransmitDecision>,
    /// Sequence numbers that were handed to the sender successfully.
    /// 成功交给发送方的序列号。
    pub resent: Vec<u16>,
    /// Approved sequence numbers whose resend failed, with the sender's error.
    /// 已批准但重传失败的序列号及发送方的错误。
    pub failed: Vec<(u16, Error)>,
}

impl LossReportResult {
    /// Returns `true` if no resend failed.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}
