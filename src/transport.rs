//! Transport layer abstraction for outgoing media packets.
//!
//! The retransmission gate runs synchronously and talks to a [`PacketSender`].
//! [`ChannelSender`] is a `PacketSender` that forwards packets as commands to
//! [`transport_sender_task`], which owns an async [`MediaTransport`].
//!
//! 出站媒体包的传输层抽象。
//!
//! 重传门控同步运行并与 [`PacketSender`] 交互。[`ChannelSender`] 将包作为命令
//! 转发给持有异步 [`MediaTransport`] 的 [`transport_sender_task`]。

pub mod channel;
pub mod command;
pub mod sender;
pub mod udp;

use crate::{error::Result, packet::OutgoingPacket};
use async_trait::async_trait;
use bytes::Bytes;
use std::{fmt::Debug, net::SocketAddr};

pub use channel::ChannelSender;
pub use command::TransportCommand;
pub use sender::transport_sender_task;
pub use udp::UdpMediaTransport;

/// Synchronous handle through which packets leave the send path.
///
/// 包离开发送路径所经过的同步句柄。
pub trait PacketSender {
    /// Hands a packet to the transport.
    ///
    /// 将一个包交给传输层。
    fn send_packet(&mut self, packet: OutgoingPacket) -> Result<()>;

    /// Resends a previously sent packet with its original payload.
    ///
    /// 使用原始载荷重发先前发送的包。
    fn resend_packet(&mut self, sequence_number: u16, payload: Bytes) -> Result<()> {
        self.send_packet(OutgoingPacket::retransmission(sequence_number, payload))
    }
}

/// Transport layer interface for putting packets on the network.
///
/// 将包发送到网络的传输层接口。
#[async_trait]
pub trait MediaTransport: Send + Sync + Debug + 'static {
    /// Sends one packet as a single datagram.
    ///
    /// 将一个包作为单个数据报发送。
    async fn send_packet(&self, packet: OutgoingPacket) -> Result<()>;

    /// Returns the local address this transport is bound to.
    ///
    /// 返回此传输绑定的本地地址。
    fn local_addr(&self) -> Result<SocketAddr>;
}
