// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status transition policy.
//!
//! Decides which status changes a role may request from a given current
//! status. Admin and manager may move a booking to any status, including
//! rollbacks and re-saving the current one. Staff follow a fixed
//! forward-only table with no identity transitions.
//!
//! The policy only validates; executing a transition is the record
//! store's job, and the store performs its own authoritative enforcement.
//! This gate exists so the UI can reject a disallowed change locally
//! before issuing an update request.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::role::UserRole;

/// Returns the statuses `role` may move a booking to from `current`.
///
/// An empty slice is a valid answer: staff cannot move a booking out of
/// `Completed` or `Refunded`.
#[must_use]
pub const fn allowed_transitions(
    current: BookingStatus,
    role: UserRole,
) -> &'static [BookingStatus] {
    if role.is_privileged() {
        return &BookingStatus::ALL;
    }

    match current {
        BookingStatus::Pending => &[BookingStatus::AwaitingPayment, BookingStatus::Cancelled],
        BookingStatus::AwaitingPayment => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
        BookingStatus::Confirmed => &[
            BookingStatus::CheckedIn,
            BookingStatus::Cancelled,
            BookingStatus::NoShow,
            BookingStatus::Refunded,
        ],
        BookingStatus::CheckedIn => &[
            BookingStatus::CheckedOut,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Refunded,
        ],
        BookingStatus::CheckedOut => &[BookingStatus::Completed, BookingStatus::Refunded],
        BookingStatus::Cancelled => &[BookingStatus::Refunded],
        BookingStatus::NoShow => &[BookingStatus::Cancelled, BookingStatus::Refunded],
        BookingStatus::Completed | BookingStatus::Refunded => &[],
    }
}

/// Returns true if `role` may move a booking from `current` to `proposed`.
///
/// Identity transitions are not special-cased: for staff they test as
/// ordinary membership and fail, since no staff row lists its own status.
#[must_use]
pub fn is_transition_allowed(
    current: BookingStatus,
    proposed: BookingStatus,
    role: UserRole,
) -> bool {
    allowed_transitions(current, role).contains(&proposed)
}

/// Validates a proposed transition, reporting a diagnostic on denial.
///
/// Update paths that want an error to surface to the operator use this
/// instead of [`is_transition_allowed`].
///
/// # Errors
///
/// Returns `DomainError::StatusTransitionDenied` if the transition is not
/// permitted for `role`.
pub fn validate_transition(
    current: BookingStatus,
    proposed: BookingStatus,
    role: UserRole,
) -> Result<(), DomainError> {
    if is_transition_allowed(current, proposed, role) {
        Ok(())
    } else {
        Err(DomainError::StatusTransitionDenied {
            from: current,
            to: proposed,
            role,
        })
    }
}
