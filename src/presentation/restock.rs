//! Restock folding and catalog ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::model::{Distribution, Figurine, Restock, Status};

/// Fold re-releases into the first occurrence of each figurine.
///
/// Input order decides which entry stays canonical. Every later entry with the
/// same identity becomes a [`Restock`] on it, appended in encounter order.
pub fn group_restocks(figurines: Vec<Figurine>) -> Vec<Figurine> {
    let mut canonical: IndexMap<_, Figurine> = IndexMap::with_capacity(figurines.len());
    for figurine in figurines {
        match canonical.entry(figurine.identity_key()) {
            Entry::Occupied(mut first) => first
                .get_mut()
                .restocks
                .get_or_insert_with(Vec::new)
                .push(Restock::from(figurine)),
            Entry::Vacant(slot) => {
                slot.insert(figurine);
            }
        }
    }
    canonical.into_values().collect()
}

/// Sort figurines with derived status into catalog order.
///
/// Buckets come in lifecycle order. Release-dated buckets list the newest
/// release first, the announced-only buckets list the newest announcement
/// first, and undated entries keep their incoming order.
pub fn order_for_display(figurines: &mut [Figurine]) {
    figurines.sort_by(compare_for_display);
}

fn bucket(status: Option<Status>) -> u8 {
    match status {
        Some(Status::ReleaseTbd) | None => 0,
        Some(Status::FutureRelease) => 1,
        Some(Status::Released) => 2,
        Some(Status::Prototype) => 3,
        Some(Status::Unreleased) => 4,
    }
}

fn compare_for_display(a: &Figurine, b: &Figurine) -> Ordering {
    bucket(a.status).cmp(&bucket(b.status)).then_with(|| match a.status {
        Some(Status::FutureRelease) | Some(Status::Released) => {
            jpy_date(b, |d| d.release_date).cmp(&jpy_date(a, |d| d.release_date))
        }
        Some(Status::Prototype) | Some(Status::Unreleased) => {
            jpy_date(b, |d| d.first_announcement_date)
                .cmp(&jpy_date(a, |d| d.first_announcement_date))
        }
        _ => Ordering::Equal,
    })
}

fn jpy_date(
    figurine: &Figurine,
    pick: impl Fn(&Distribution) -> Option<NaiveDate>,
) -> Option<NaiveDate> {
    figurine.distribution_jpy.as_ref().and_then(pick)
}
