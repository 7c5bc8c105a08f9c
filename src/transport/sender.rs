//! Transport sender task for batched packet transmission.
//!
//! 用于批量包传输的传输发送任务。

use super::{MediaTransport, command::TransportCommand};
use crate::packet::PacketKind;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// The dedicated task for sending packets through the transport.
/// Failed sends are logged and not retried.
///
/// 通过传输发送包的专用任务。发送失败只记录日志，不重试。
pub async fn transport_sender_task<T: MediaTransport>(
    mut transport: Arc<T>,
    mut rx: mpsc::Receiver<TransportCommand<T>>,
) {
    const MAX_BATCH_SIZE: usize = 64;
    let mut packets = Vec::with_capacity(MAX_BATCH_SIZE);

    loop {
        // Wait for the first command to arrive
        let first_cmd = match rx.recv().await {
            Some(cmd) => cmd,
            None => return, // Channel closed
        };

        match first_cmd {
            TransportCommand::Send(packet) => {
                packets.push(packet);

                // Try to drain the channel of any pending Send commands to process in a batch
                let mut pending_swap = None;
                while packets.len() < MAX_BATCH_SIZE {
                    match rx.try_recv() {
                        Ok(TransportCommand::Send(packet)) => packets.push(packet),
                        Ok(TransportCommand::SwapTransport(new_transport)) => {
                            pending_swap = Some(new_transport);
                            break;
                        }
                        Err(_) => break,
                    }
                }

                for packet in packets.drain(..) {
                    let seq = packet.sequence_number;
                    let retransmission = packet.kind == PacketKind::Retransmission;
                    debug!(
                        seq,
                        retransmission,
                        bytes = packet.payload.len(),
                        "transport_sender_task sending packet"
                    );

                    if let Err(e) = transport.send_packet(packet).await {
                        error!(seq, "Failed to send packet: {}", e);
                    }
                }

                if let Some(new_transport) = pending_swap {
                    debug!("Transport sender task is swapping to a new transport");
                    transport = new_transport;
                }
            }
            TransportCommand::SwapTransport(new_transport) => {
                debug!("Transport sender task is swapping to a new transport");
                transport = new_transport;
            }
        }
    }
}
