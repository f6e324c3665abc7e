// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error type shared by the network, queue, path finder and randomizer

use thiserror::Error;

/// Errors raised by routecity operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Malformed, duplicate or unknown name, self-loop, bad cost or index
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required value was not supplied
    #[error("missing argument: {0}")]
    NullArgument(String),

    /// The operation does not apply to the current state of the network
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// `peek` or `pop` on a queue with no elements
    #[error("the priority queue is empty")]
    EmptyQueue,
}

impl RouteError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, RouteError>;
