//! Commands for transport layer operations.
//!
//! 传输层操作的命令。

use super::MediaTransport;
use crate::packet::OutgoingPacket;
use std::sync::Arc;

/// Commands for the transport sender task.
///
/// 传输发送任务的命令。
#[derive(Debug)]
pub enum TransportCommand<T: MediaTransport> {
    /// Send a packet.
    /// 发送一个包。
    Send(OutgoingPacket),
    /// Swap the underlying transport.
    /// 交换底层传输。
    SwapTransport(Arc<T>),
}
