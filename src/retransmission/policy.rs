//! Retransmission policy.
//! 重传策略。

use crate::{config::RetransmissionConfig, packet::TemporalLayer};
use std::time::Duration;

/// Which packets may be retransmitted.
///
/// 哪些包允许重传。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetransmissionMode {
    /// Never retransmit.
    /// 从不重传。
    Off,
    /// Retransmit packets of every temporal layer.
    /// 重传所有时间层的包。
    All,
    /// Retransmit base layer packets and packets without a layer index.
    /// 只重传基础层的包以及没有层索引的包。
    #[default]
    BaseLayerOnly,
}

impl RetransmissionMode {
    /// Returns `true` if a packet on `layer` may be resent under this mode.
    ///
    /// 判断在此模式下 `layer` 上的包是否可以重传。
    pub fn allows(&self, layer: TemporalLayer) -> bool {
        match self {
            RetransmissionMode::Off => false,
            RetransmissionMode::All => true,
            RetransmissionMode::BaseLayerOnly => !layer.is_enhancement(),
        }
    }
}

/// An immutable retransmission policy.
///
/// A gate keeps its policy for its whole lifetime. Use
/// [`RetransmissionGate::with_policy`](super::RetransmissionGate::with_policy)
/// to continue with a different one.
///
/// 不可变的重传策略。门控在其整个生命周期内保持同一策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetransmissionPolicy {
    mode: RetransmissionMode,
    min_retransmit_delay: Duration,
    rtt: Duration,
}

impl RetransmissionPolicy {
    /// Creates a policy from its parts.
    /// 从各组成部分创建策略。
    pub fn new(mode: RetransmissionMode, min_retransmit_delay: Duration, rtt: Duration) -> Self {
        Self {
            mode,
            min_retransmit_delay,
            rtt,
        }
    }

    /// Creates a policy from configuration and the current round-trip time.
    /// 由配置和当前往返时间创建策略。
    pub fn from_config(config: &RetransmissionConfig, rtt: Duration) -> Self {
        Self::new(config.mode, config.min_retransmit_delay, rtt)
    }

    /// The same policy with a different round-trip time.
    /// 相同策略，但使用不同的往返时间。
    pub fn with_rtt(self, rtt: Duration) -> Self {
        Self { rtt, ..self }
    }

    pub fn mode(&self) -> RetransmissionMode {
        self.mode
    }

    pub fn min_retransmit_delay(&self) -> Duration {
        self.min_retransmit_delay
    }

    pub fn rtt(&self) -> Duration {
        self.rtt
    }

    /// Time that must have passed since a packet was last sent before it is
    /// resent: the minimum retransmit delay plus the round-trip time.
    ///
    /// 包在重传前自上次发送起必须经过的时间：最小重传延迟加往返时间。
    pub fn required_elapsed(&self) -> Duration {
        self.min_retransmit_delay.saturating_add(self.rtt)
    }
}

impl Default for RetransmissionPolicy {
    fn default() -> Self {
        Self::from_config(&RetransmissionConfig::default(), Duration::ZERO)
    }
}
