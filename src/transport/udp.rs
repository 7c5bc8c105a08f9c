//! UDP-based media transport.
//!
//! 基于UDP的媒体传输。

use super::MediaTransport;
use crate::{error::Result, packet::OutgoingPacket};
use async_trait::async_trait;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::UdpSocket;
use tracing::debug;

/// Sends each packet's payload as one datagram to a fixed peer.
///
/// 将每个包的载荷作为一个数据报发送到固定的对端。
#[derive(Debug)]
pub struct UdpMediaTransport {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
}

impl UdpMediaTransport {
    /// Binds a socket to `local` and sends to `peer`.
    ///
    /// 将套接字绑定到 `local`，并向 `peer` 发送。
    pub async fn bind(local: SocketAddr, peer: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(local).await?;
        Ok(Self::from_socket(Arc::new(socket), peer))
    }

    /// Wraps an existing socket.
    ///
    /// 包装一个已有的套接字。
    pub fn from_socket(socket: Arc<UdpSocket>, peer: SocketAddr) -> Self {
        Self { socket, peer }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }
}

#[async_trait]
impl MediaTransport for UdpMediaTransport {
    async fn send_packet(&self, packet: OutgoingPacket) -> Result<()> {
        debug!(
            addr = %self.peer,
            seq = packet.sequence_number,
            bytes = packet.payload.len(),
            "Sending UDP datagram"
        );
        self.socket.send_to(&packet.payload, self.peer).await?;
        Ok(())
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }
}
