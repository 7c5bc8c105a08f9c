//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the retransmission library.
/// 重传库的主要错误类型。
#[derive(Debug, Error)]
pub enum Error {
    /// An underlying I/O error occurred.
    /// 发生了底层的I/O错误。
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The packet history capacity is zero or spans more than half of the
    /// 16-bit sequence number space.
    ///
    /// 包历史容量为零，或超过16位序列号空间的一半。
    #[error("invalid packet history capacity {capacity} (must be 1..={max})")]
    InvalidHistoryCapacity {
        /// The rejected capacity.
        capacity: usize,
        /// The largest accepted capacity.
        max: usize,
    },

    /// A configuration value is out of range.
    /// 配置值超出范围。
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The channel towards the transport task was closed unexpectedly.
    /// 通往传输任务的通道意外关闭。
    #[error("Internal channel is broken")]
    ChannelClosed,

    /// The channel towards the transport task has no free slots.
    /// 通往传输任务的通道已满。
    #[error("transport channel is full")]
    ChannelFull,
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        match err {
            Error::Io(e) => e,
            Error::InvalidHistoryCapacity { .. } => ErrorKind::InvalidInput.into(),
            Error::InvalidConfig(msg) => std::io::Error::new(ErrorKind::InvalidInput, msg),
            Error::ChannelClosed => ErrorKind::BrokenPipe.into(),
            Error::ChannelFull => ErrorKind::WouldBlock.into(),
        }
    }
}
