// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_status;
mod error;
mod role;
mod transitions;
mod types;

#[cfg(test)]
mod tests;

pub use booking_status::BookingStatus;
pub use error::DomainError;
pub use role::UserRole;
pub use transitions::{allowed_transitions, is_transition_allowed, validate_transition};
pub use types::{Booking, BookingId, CustomerId, RoomId, StatusChange};
