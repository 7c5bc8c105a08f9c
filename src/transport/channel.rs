//! A [`PacketSender`] backed by the transport sender task's channel.
//!
//! 由传输发送任务通道支持的 [`PacketSender`]。

use super::{MediaTransport, PacketSender, TransportCommand};
use crate::{
    config::StreamConfig,
    error::{Error, Result},
    packet::OutgoingPacket,
};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::trace;

/// Forwards packets to [`transport_sender_task`](super::transport_sender_task)
/// without blocking. A full channel is reported as [`Error::ChannelFull`] and
/// the packet is dropped.
///
/// 非阻塞地将包转发给传输发送任务。通道满时返回 [`Error::ChannelFull`] 并丢弃该包。
#[derive(Debug)]
pub struct ChannelSender<T: MediaTransport> {
    tx: mpsc::Sender<TransportCommand<T>>,
}

impl<T: MediaTransport> Clone for ChannelSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: MediaTransport> ChannelSender<T> {
    /// Creates a bounded channel, returning the sender half and the receiver
    /// to pass to the transport task.
    ///
    /// 创建有界通道，返回发送端以及交给传输任务的接收端。
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<TransportCommand<T>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Creates the channel with `config.transport_channel_capacity` slots.
    ///
    /// 按 `config.transport_channel_capacity` 创建通道。
    pub fn from_config(
        config: &StreamConfig,
    ) -> Result<(Self, mpsc::Receiver<TransportCommand<T>>)> {
        if config.transport_channel_capacity == 0 {
            return Err(Error::InvalidConfig(
                "transport channel capacity must be greater than zero",
            ));
        }
        Ok(Self::channel(config.transport_channel_capacity))
    }

    /// Replaces the transport used by the task. Waits for channel capacity.
    ///
    /// 替换任务使用的传输。会等待通道容量。
    pub async fn swap_transport(&self, transport: Arc<T>) -> Result<()> {
        self.tx
            .send(TransportCommand::SwapTransport(transport))
            .await
            .map_err(|_| Error::ChannelClosed)
    }
}

impl<T: MediaTransport> PacketSender for ChannelSender<T> {
    fn send_packet(&mut self, packet: OutgoingPacket) -> Result<()> {
        let seq = packet.sequence_number;
        match self.tx.try_send(TransportCommand::Send(packet)) {
            Ok(()) => {
                trace!(seq, "Queued packet for transport");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(Error::ChannelFull),
            Err(TrySendError::Closed(_)) => Err(Error::ChannelClosed),
        }
    }
}
