//! # Condition Flag Tests

use std::cmp::Ordering;

use ls8_core::core::arch::Flags;
use ls8_core::core::arch::flags::{FL_EQUAL, FL_GREATER, FL_LESS};

#[test]
fn test_default_flags_are_clear() {
    let flags = Flags::default();
    assert_eq!(flags.bits(), 0);
    assert_eq!(flags.to_string(), "---");
}

#[test]
fn test_from_ordering_sets_exactly_one_flag() {
    let less = Flags::from_ordering(Ordering::Less);
    let greater = Flags::from_ordering(Ordering::Greater);
    let equal = Flags::from_ordering(Ordering::Equal);

    assert_eq!(less.bits(), FL_LESS);
    assert_eq!(greater.bits(), FL_GREATER);
    assert_eq!(equal.bits(), FL_EQUAL);
}

#[test]
fn test_packed_layout_is_lge() {
    assert_eq!(FL_LESS, 0b100);
    assert_eq!(FL_GREATER, 0b010);
    assert_eq!(FL_EQUAL, 0b001);
}

#[test]
fn test_display() {
    assert_eq!(Flags::from_ordering(Ordering::Less).to_string(), "L--");
    assert_eq!(Flags::from_ordering(Ordering::Greater).to_string(), "-G-");
    assert_eq!(Flags::from_ordering(Ordering::Equal).to_string(), "--E");
}
