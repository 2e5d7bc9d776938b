// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking record types.
//!
//! These are the shapes the back-office exchanges with the external record
//! store. They carry no lifecycle logic of their own; status changes are
//! gated by [`crate::transitions`] before an update is issued.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::role::UserRole;
use serde::{Deserialize, Serialize};

/// Identifier of a booking row in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(i64);

impl BookingId {
    /// Creates a new `BookingId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier of a room row in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(i64);

impl RoomId {
    /// Creates a new `RoomId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier of a customer row in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a new `CustomerId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// A reservation linking a customer to a room for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub room: RoomId,
    pub customer: CustomerId,
    pub check_in: time::Date,
    pub check_out: time::Date,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

impl Booking {
    /// Creates a new `Booking`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out` is not after
    /// `check_in`.
    pub fn new(
        id: BookingId,
        room: RoomId,
        customer: CustomerId,
        check_in: time::Date,
        check_out: time::Date,
        status: BookingStatus,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            id,
            room,
            customer,
            check_in,
            check_out,
            status,
            notes,
        })
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }
}

/// A status change an actor has requested, as submitted to the record
/// store after the transition policy approved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub booking: BookingId,
    pub from: BookingStatus,
    pub to: BookingStatus,
    /// Identifier of the acting user.
    pub changed_by: i64,
    /// Role the actor held when the change was requested.
    pub role: UserRole,
    /// ISO 8601 timestamp assigned by the caller.
    pub changed_at: String,
    pub notes: Option<String>,
}
