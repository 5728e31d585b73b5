//! Derived fields and catalog presentation.
//!
//! Nothing here touches storage: the service layer loads stored figurines,
//! hands them over, and returns whatever comes back.

pub mod display_name;
pub mod images;
pub mod lifecycle;
pub mod restock;

use chrono::{Local, NaiveDate};

use crate::model::Figurine;

pub use display_name::display_name;
pub use images::complete_image_urls;
pub use lifecycle::{final_price, status, tax_rate};
pub use restock::{group_restocks, order_for_display};

/// Today's date in the server's local time zone, the reference point for
/// status classification.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Compute every derived field of one figurine.
///
/// Recomputes from stored attributes only, so running it on an already
/// populated figurine gives the same result.
pub fn populate_derived(mut figurine: Figurine, today: NaiveDate) -> Figurine {
    figurine.displayable_name = Some(display_name(&figurine));
    if let Some(jpy) = figurine.distribution_jpy.as_mut() {
        jpy.final_price = final_price(jpy.base_price.as_ref(), jpy.release_date);
    }
    figurine.status = Some(status(&figurine, today));
    figurine.official_images = complete_image_urls(figurine.official_images.take());
    figurine.other_images = complete_image_urls(figurine.other_images.take());
    figurine
}

/// Build the catalog listing from figurines in store order
/// (JPY release date ascending).
///
/// With `exclude_restocks` set, re-releases are folded into their first
/// occurrence before derived fields are computed.
pub fn list_catalog(
    figurines: Vec<Figurine>,
    exclude_restocks: bool,
    today: NaiveDate,
) -> Vec<Figurine> {
    let figurines = if exclude_restocks {
        group_restocks(figurines)
    } else {
        figurines
    };
    let mut listing: Vec<Figurine> = figurines
        .into_iter()
        .map(|f| populate_derived(f, today))
        .collect();
    order_for_display(&mut listing);
    listing
}
