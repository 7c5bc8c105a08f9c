//! 已发送包的记录以及交给传输层的出站包。
//! Records of sent packets and the outgoing packets handed to the transport.

use bytes::Bytes;
use std::fmt;
use tokio::time::Instant;

/// The temporal layer a packet belongs to.
///
/// Packets produced by codecs without temporal scalability carry no layer
/// index and are [`TemporalLayer::Untagged`].
///
/// 包所属的时间层。没有时间可伸缩性的编码器产生的包不带层索引。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemporalLayer {
    /// No temporal layer index.
    /// 没有时间层索引。
    #[default]
    Untagged,
    /// Temporal layer id, `0` is the base layer.
    /// 时间层id，`0` 为基础层。
    Tagged(u8),
}

impl TemporalLayer {
    /// The base temporal layer.
    pub const BASE: TemporalLayer = TemporalLayer::Tagged(0);

    /// Returns `true` for a tagged layer other than the base layer.
    /// 对于非基础层的已标记层返回 `true`。
    pub fn is_enhancement(&self) -> bool {
        matches!(self, TemporalLayer::Tagged(id) if *id != 0)
    }
}

impl From<Option<u8>> for TemporalLayer {
    fn from(id: Option<u8>) -> Self {
        id.map_or(TemporalLayer::Untagged, TemporalLayer::Tagged)
    }
}

impl From<u8> for TemporalLayer {
    fn from(id: u8) -> Self {
        TemporalLayer::Tagged(id)
    }
}

impl fmt::Display for TemporalLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalLayer::Untagged => f.write_str("none"),
            TemporalLayer::Tagged(id) => write!(f, "{id}"),
        }
    }
}

/// What the send path remembers about one sent packet.
///
/// 发送路径为每个已发送包记住的信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentPacketRecord {
    /// The packet's sequence number.
    /// 包的序列号。
    pub sequence_number: u16,
    /// When the packet was last put on the wire, original send or resend.
    /// 包最后一次发出的时间（原始发送或重传）。
    pub send_time: Instant,
    /// The packet's temporal layer.
    /// 包的时间层。
    pub temporal_layer: TemporalLayer,
}

/// Whether an outgoing packet is a first transmission or a resend.
/// 出站包是首次发送还是重传。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Original,
    Retransmission,
}

/// A packet handed to the transport.
///
/// 交给传输层的包。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPacket {
    /// The packet's sequence number.
    pub sequence_number: u16,
    /// The serialized packet, sent as-is.
    /// 序列化后的包，原样发送。
    pub payload: Bytes,
    /// First transmission or resend.
    pub kind: PacketKind,
}

impl OutgoingPacket {
    /// A first transmission.
    pub fn original(sequence_number: u16, payload: Bytes) -> Self {
        Self {
            sequence_number,
            payload,
            kind: PacketKind::Original,
        }
    }

    /// A resend of a previously sent packet.
    pub fn retransmission(sequence_number: u16, payload: Bytes) -> Self {
        Self {
            sequence_number,
            payload,
            kind: PacketKind::Retransmission,
        }
    }
}
