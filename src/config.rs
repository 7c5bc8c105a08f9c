//! 定义了重传门控和发送流的可配置参数。
//! Defines configurable parameters for the retransmission gate and the send stream.

use crate::{
    error::{Error, Result},
    history::MAX_HISTORY_CAPACITY,
    retransmission::RetransmissionMode,
};
use std::time::Duration;

/// A structure containing all configurable parameters for a send stream.
///
/// 包含发送流所有可配置参数的结构体。
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Packet history parameters.
    /// 包历史相关参数。
    pub history: HistoryConfig,

    /// Retransmission policy parameters.
    /// 重传策略相关参数。
    pub retransmission: RetransmissionConfig,

    /// Send stream parameters.
    /// 发送流相关参数。
    pub stream: StreamConfig,
}

/// Packet history parameters.
///
/// 包历史相关参数。
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// The number of sent packets kept for retransmission. Once full, the
    /// oldest packet is evicted for every new one.
    ///
    /// 为重传保留的已发送包数量。满后每加入一个新包就淘汰最旧的包。
    pub capacity: usize,
}

/// Retransmission policy parameters. The round-trip time is not part of the
/// configuration; it is supplied by whoever estimates it.
///
/// 重传策略参数。往返时间不属于配置，由估算它的一方提供。
#[derive(Debug, Clone)]
pub struct RetransmissionConfig {
    /// Which packets may be retransmitted.
    /// 哪些包允许重传。
    pub mode: RetransmissionMode,
    /// The minimum time since a packet was (re)sent before it may be resent,
    /// on top of the round-trip time.
    ///
    /// 在往返时间之外，包自上次（重）发送起必须经过的最短时间。
    pub min_retransmit_delay: Duration,
}

/// Send stream parameters.
///
/// 发送流相关参数。
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// The sequence number of the first packet. `None` picks a random one.
    /// 第一个包的序列号。`None` 表示随机选择。
    pub initial_sequence_number: Option<u16>,
    /// Capacity of the channel between a stream and its transport task.
    /// 发送流与传输任务之间通道的容量。
    pub transport_channel_capacity: usize,
}

impl Config {
    /// Checks that every value is within its accepted range.
    ///
    /// 检查所有值是否在允许范围内。
    pub fn validate(&self) -> Result<()> {
        let capacity = self.history.capacity;
        if capacity == 0 || capacity > MAX_HISTORY_CAPACITY {
            return Err(Error::InvalidHistoryCapacity {
                capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        if self.stream.transport_channel_capacity == 0 {
            return Err(Error::InvalidConfig(
                "transport channel capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

impl Default for RetransmissionConfig {
    fn default() -> Self {
        Self {
            mode: RetransmissionMode::BaseLayerOnly,
            min_retransmit_delay: Duration::from_millis(5),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            initial_sequence_number: None,
            transport_channel_capacity: 128,
        }
    }
}
