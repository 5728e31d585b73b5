//! Status classification and tax-inclusive pricing.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::model::{Figurine, Status};

/// Announcements older than this many full years without a release are considered shelved.
pub const PROTOTYPE_MAX_YEARS: u32 = 5;

/// Derive the status from the Japanese distribution only.
pub fn status(figurine: &Figurine, today: NaiveDate) -> Status {
    let jpy = figurine.distribution_jpy.as_ref();
    if let Some(release) = jpy.and_then(|d| d.release_date) {
        return if release < today {
            Status::Released
        } else {
            Status::FutureRelease
        };
    }
    match jpy.and_then(|d| d.first_announcement_date) {
        Some(announced) => {
            // `None` for an announcement dated after today.
            let age = today.years_since(announced).unwrap_or(0);
            if age > PROTOTYPE_MAX_YEARS {
                Status::Unreleased
            } else {
                Status::Prototype
            }
        }
        None => Status::ReleaseTbd,
    }
}

/// Consumption tax rate applicable on the release date.
///
/// Both band bounds are exclusive, so a release exactly on a change date
/// falls through to the current rate.
pub fn tax_rate(release_date: Option<NaiveDate>) -> BigDecimal {
    let april_1997 = NaiveDate::from_ymd_opt(1997, 4, 1);
    let april_2014 = NaiveDate::from_ymd_opt(2014, 4, 1);
    let october_2019 = NaiveDate::from_ymd_opt(2019, 10, 1);

    match release_date {
        Some(d) if Some(d) > april_1997 && Some(d) < april_2014 => BigDecimal::new(5.into(), 2),
        Some(d) if Some(d) > april_2014 && Some(d) < october_2019 => BigDecimal::new(8.into(), 2),
        _ => BigDecimal::new(1.into(), 1),
    }
}

/// `base + base * rate`, or `None` when there is no base price.
pub fn final_price(
    base_price: Option<&BigDecimal>,
    release_date: Option<NaiveDate>,
) -> Option<BigDecimal> {
    let base = base_price?;
    let rate = tax_rate(release_date);
    Some(base + &(base * &rate))
}
