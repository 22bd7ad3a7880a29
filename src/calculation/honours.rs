//! Honours classification.
//!
//! This module maps a WAM and capstone mark onto an honours band.

use rust_decimal::Decimal;

use crate::models::HonoursClass;

/// Returns the WAM and capstone threshold for first class honours.
pub fn first_class_threshold() -> Decimal {
    Decimal::from(80)
}

/// Returns the WAM and capstone threshold for second class honours,
/// division A.
pub fn upper_second_threshold() -> Decimal {
    Decimal::from(70)
}

/// Returns the WAM threshold for second class honours, division B.
pub fn lower_second_threshold() -> Decimal {
    Decimal::from(60)
}

/// Classifies a student's honours band from their WAM and capstone mark.
///
/// All thresholds are inclusive. H1 and H2A each require the capstone mark
/// to meet the same threshold as the WAM, so a student without a capstone
/// attempt can reach H2B at best, regardless of WAM. H2B and H3 depend on
/// the WAM alone.
///
/// # Examples
///
/// ```
/// use honours_engine::calculation::classify_honours;
/// use honours_engine::models::HonoursClass;
/// use rust_decimal::Decimal;
///
/// let wam = Decimal::new(80000, 3); // 80.000
/// assert_eq!(classify_honours(wam, Some(Decimal::from(80))), HonoursClass::H1);
/// assert_eq!(classify_honours(wam, None), HonoursClass::H2B);
/// ```
pub fn classify_honours(wam: Decimal, capstone_mark: Option<Decimal>) -> HonoursClass {
    let capstone_at_least =
        |threshold: Decimal| capstone_mark.is_some_and(|mark| mark >= threshold);

    if wam >= first_class_threshold() && capstone_at_least(first_class_threshold()) {
        HonoursClass::H1
    } else if wam >= upper_second_threshold() && capstone_at_least(upper_second_threshold()) {
        HonoursClass::H2A
    } else if wam >= lower_second_threshold() {
        HonoursClass::H2B
    } else {
        HonoursClass::H3
    }
}
