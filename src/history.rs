//! 已发送包历史 - 纯数据管理
//! Outgoing Packet Log - Pure Data Management
//!
//! 职责：
//! - 保存已发送包的记录和载荷
//! - 按发送顺序淘汰最旧的包
//! - 无业务逻辑，只管理数据

use crate::{
    error::{Error, Result},
    packet::{
        SentPacketRecord, TemporalLayer,
        seq::{HALF_SEQUENCE_SPACE, is_newer},
    },
};
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// The largest history that never holds two packets whose sequence numbers
/// are half the 16-bit space apart.
///
/// 不会同时保存相距半个16位空间的两个包的最大历史容量。
pub const MAX_HISTORY_CAPACITY: usize = HALF_SEQUENCE_SPACE as usize - 1;

/// 日志中保存的一个已发送包
/// A sent packet held in the log
#[derive(Debug, Clone)]
pub struct StoredPacket {
    /// 包记录
    /// Packet record
    pub record: SentPacketRecord,

    /// 原始载荷，重传时原样发送
    /// Original payload, resent unchanged
    pub payload: Bytes,

    /// 重传次数
    /// Retransmission count
    pub retransmit_count: u32,
}

/// 已发送包日志，固定容量，最旧优先淘汰
/// Outgoing packet log with fixed capacity and oldest-first eviction
#[derive(Debug)]
pub struct OutgoingPacketLog {
    /// 最大保存数量
    /// Maximum number of packets kept
    capacity: usize,

    /// 主存储：序列号 -> 数据包
    /// Main storage: sequence number -> packet
    packets: HashMap<u16, StoredPacket>,

    /// 发送顺序，队首最旧
    /// Send order, oldest at the front
    order: VecDeque<u16>,
}

impl OutgoingPacketLog {
    /// 创建新的日志
    /// Create new log
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity > MAX_HISTORY_CAPACITY {
            return Err(Error::InvalidHistoryCapacity {
                capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(Self {
            capacity,
            packets: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        })
    }

    /// 记录一个已发送的包，返回被淘汰的包（如果有）
    /// Record a sent packet, returning the evicted packet if any
    pub fn record(
        &mut self,
        sequence_number: u16,
        send_time: Instant,
        temporal_layer: TemporalLayer,
        payload: Bytes,
    ) -> Option<StoredPacket> {
        if self.packets.remove(&sequence_number).is_some() {
            warn!(
                seq = sequence_number,
                "Sequence number already in history, replacing stale entry"
            );
            self.order.retain(|&seq| seq != sequence_number);
        } else if let Some(newest) = self.newest() {
            if !is_newer(sequence_number, newest) {
                debug!(
                    seq = sequence_number,
                    newest, "Recording packet older than the newest in history"
                );
            }
        }

        let mut evicted = None;
        while self.order.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if let Some(packet) = self.packets.remove(&oldest) {
                trace!(seq = oldest, "Evicted oldest packet from history");
                evicted = Some(packet);
            }
        }

        let packet = StoredPacket {
            record: SentPacketRecord {
                sequence_number,
                send_time,
                temporal_layer,
            },
            payload,
            retransmit_count: 0,
        };
        self.packets.insert(sequence_number, packet);
        self.order.push_back(sequence_number);
        trace!(seq = sequence_number, layer = %temporal_layer, "Recorded sent packet");

        evicted
    }

    /// 获取数据包
    /// Get packet
    pub fn get(&self, sequence_number: u16) -> Option<&StoredPacket> {
        self.packets.get(&sequence_number)
    }

    /// 检查是否包含序列号
    /// Check whether a sequence number is held
    pub fn contains(&self, sequence_number: u16) -> bool {
        self.packets.contains_key(&sequence_number)
    }

    /// 标记包已在 `now` 重传：更新发送时间并增加重传次数，返回新的重传次数
    /// Mark a packet resent at `now`: update its send time and bump the count.
    /// Returns the new count, or `None` if the packet is not held.
    pub fn mark_retransmitted(&mut self, sequence_number: u16, now: Instant) -> Option<u32> {
        let Some(packet) = self.packets.get_mut(&sequence_number) else {
            debug!(
                seq = sequence_number,
                "Cannot mark retransmission: packet not in history"
            );
            return None;
        };
        packet.record.send_time = now;
        packet.retransmit_count = packet.retransmit_count.saturating_add(1);
        Some(packet.retransmit_count)
    }

    /// 最旧的序列号
    /// Oldest sequence number
    pub fn oldest(&self) -> Option<u16> {
        self.order.front().copied()
    }

    /// 最新的序列号
    /// Newest sequence number
    pub fn newest(&self) -> Option<u16> {
        self.order.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}
