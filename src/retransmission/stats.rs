//! Counters describing how loss reports were handled.
//! 描述丢包报告处理情况的计数器。

use super::decision::RetransmitReason;

/// NACK and retransmission counters for one stream.
///
/// 单个流的NACK与重传计数器。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetransmissionStats {
    /// Loss report entries received.
    /// 收到的丢包报告条目数。
    pub nack_requests: u64,
    /// Packets handed to the sender for retransmission.
    /// 交给发送方重传的包数。
    pub retransmitted_packets: u64,
    pub not_found: u64,
    pub layer_filtered: u64,
    pub too_soon: u64,
    /// Approved resends the sender failed to perform.
    /// 发送方未能完成的已批准重传数。
    pub send_failures: u64,
}

impl RetransmissionStats {
    pub(crate) fn on_decision(&mut self, reason: RetransmitReason) {
        self.nack_requests += 1;
        match reason {
            RetransmitReason::NotFound => self.not_found += 1,
            RetransmitReason::LayerFiltered => self.layer_filtered += 1,
            RetransmitReason::TooSoon => self.too_soon += 1,
            RetransmitReason::Approved => {}
        }
    }

    pub(crate) fn on_resend(&mut self, ok: bool) {
        if ok {
            self.retransmitted_packets += 1;
        } else {
            self.send_failures += 1;
        }
    }
}
