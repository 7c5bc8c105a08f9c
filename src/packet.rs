//! The packet module, containing sequence number arithmetic and the records
//! kept for every sent packet.
//! packet 模块，包含序列号运算以及为每个已发送包保存的记录。

pub mod record;
pub mod seq;

pub use record::{OutgoingPacket, PacketKind, SentPacketRecord, TemporalLayer};
pub use seq::{SequenceNumberAllocator, is_newer};
