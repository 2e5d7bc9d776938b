// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingId, BookingStatus, CustomerId, DomainError, RoomId, StatusChange, UserRole,
};
use time::macros::date;

fn create_test_booking(
    check_in: time::Date,
    check_out: time::Date,
) -> Result<Booking, DomainError> {
    Booking::new(
        BookingId::new(1),
        RoomId::new(12),
        CustomerId::new(7),
        check_in,
        check_out,
        BookingStatus::Confirmed,
        None,
    )
}

#[test]
fn test_booking_creation() {
    let booking = create_test_booking(date!(2026 - 08 - 21), date!(2026 - 08 - 24)).unwrap();

    assert_eq!(booking.id.value(), 1);
    assert_eq!(booking.room.value(), 12);
    assert_eq!(booking.customer.value(), 7);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.nights(), 3);
}

#[test]
fn test_booking_rejects_zero_night_stay() {
    let result = create_test_booking(date!(2026 - 08 - 21), date!(2026 - 08 - 21));
    assert_eq!(
        result,
        Err(DomainError::InvalidStayRange {
            check_in: date!(2026 - 08 - 21),
            check_out: date!(2026 - 08 - 21),
        })
    );
}

#[test]
fn test_booking_rejects_reversed_stay() {
    let result = create_test_booking(date!(2026 - 08 - 24), date!(2026 - 08 - 21));
    assert!(result.is_err());
}

#[test]
fn test_id_newtypes_serialize_as_raw_values() {
    let json = serde_json::to_string(&BookingId::new(42)).unwrap();
    assert_eq!(json, "42");

    let parsed: RoomId = serde_json::from_str("12").unwrap();
    assert_eq!(parsed, RoomId::new(12));
}

#[test]
fn test_status_change_round_trip() {
    let change = StatusChange {
        booking: BookingId::new(1),
        from: BookingStatus::Confirmed,
        to: BookingStatus::CheckedIn,
        changed_by: 3,
        role: UserRole::Staff,
        changed_at: String::from("2026-08-21T14:00:00Z"),
        notes: Some(String::from("early arrival")),
    };

    let json = serde_json::to_string(&change).unwrap();
    assert!(json.contains("\"from\":\"confirmed\""));
    assert!(json.contains("\"to\":\"checked_in\""));
    assert!(json.contains("\"role\":\"staff\""));

    let parsed: StatusChange = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, change);
}
