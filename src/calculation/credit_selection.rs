//! Credit point selection.
//!
//! This module chooses which of a record's two credit-point allocations
//! accompanies its adjusted mark into the WAM denominator.

use rust_decimal::Decimal;

/// Returns the pass mark that switches a record from its enrolled to its
/// achievable credit-point allocation.
pub fn pass_mark() -> Decimal {
    Decimal::from(50)
}

/// Selects the credit points that count for an attempt.
///
/// A failed attempt counts at the load the student was enrolled in; a
/// passed attempt counts at the credit achievable for it. An excluded
/// mark excludes the credit as well.
///
/// # Arguments
///
/// * `adjusted_mark` - The mark after adjustment, or `None` when excluded
/// * `enrolled_credit_points` - Credit points the student was enrolled in
/// * `achievable_credit_points` - Credit points achievable on passing
///
/// # Examples
///
/// ```
/// use honours_engine::calculation::select_credit_points;
/// use rust_decimal::Decimal;
///
/// assert_eq!(select_credit_points(Some(Decimal::from(42)), 6, 12), Some(6));
/// assert_eq!(select_credit_points(Some(Decimal::from(50)), 6, 12), Some(12));
/// assert_eq!(select_credit_points(None, 6, 12), None);
/// ```
pub fn select_credit_points(
    adjusted_mark: Option<Decimal>,
    enrolled_credit_points: u32,
    achievable_credit_points: u32,
) -> Option<u32> {
    let mark = adjusted_mark?;
    if mark < pass_mark() {
        Some(enrolled_credit_points)
    } else {
        Some(achievable_credit_points)
    }
}
