// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle statuses.
//!
//! This module defines the closed set of statuses a reservation passes
//! through. Which status changes an actor may request is decided by the
//! transition policy in [`crate::transitions`]; this module only defines
//! the enumeration itself.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle stage of a booking.
///
/// Status is owned by the booking record and mutated only after a
/// successful transition-policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Reservation created, not yet invoiced
    Pending,
    /// Invoice issued, waiting on the customer's payment
    AwaitingPayment,
    /// Payment received, stay confirmed
    Confirmed,
    /// Guest has arrived and checked in
    CheckedIn,
    /// Guest has left the room
    CheckedOut,
    /// Stay finished and settled
    Completed,
    /// Reservation cancelled before the stay
    Cancelled,
    /// Guest never arrived
    NoShow,
    /// Payment returned to the customer
    Refunded,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 9] = [
        Self::Pending,
        Self::AwaitingPayment,
        Self::Confirmed,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
        Self::Refunded,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::AwaitingPayment => "awaiting_payment",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
            Self::Refunded => "refunded",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a
    /// valid status. Callers holding raw strings (URL parameters, stored
    /// rows) must go through this before consulting the transition policy;
    /// an unrecognized string is rejected here rather than silently allowed.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "awaiting_payment" => Ok(Self::AwaitingPayment),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            "refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (staff cannot move a booking
    /// out of it; only privileged roles can roll it back).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Refunded)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
