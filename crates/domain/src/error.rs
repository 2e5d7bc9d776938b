// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::role::UserRole;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Status string does not name one of the nine booking statuses.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Role string does not name one of the three user roles.
    InvalidUserRole(String),
    /// The proposed status change is not permitted for the acting role.
    StatusTransitionDenied {
        /// The booking's current status.
        from: BookingStatus,
        /// The proposed status.
        to: BookingStatus,
        /// The acting user's role.
        role: UserRole,
    },
    /// Check-out date is not after the check-in date.
    InvalidStayRange {
        /// The check-in date.
        check_in: time::Date,
        /// The check-out date.
        check_out: time::Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidUserRole(role) => write!(f, "Invalid user role: '{role}'"),
            Self::StatusTransitionDenied { from, to, role } => {
                write!(
                    f,
                    "Role '{role}' may not change booking status from '{from}' to '{to}'"
                )
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be after check-in date {check_in}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
