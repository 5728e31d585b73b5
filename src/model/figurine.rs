use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{Anniversary, Category, LineUp, Series};
use crate::presentation::images::{image_id, strip_image_urls};
use super::reference::{DistributionChannel, Distributor};

/// Lifecycle classification derived from the Japanese distribution dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    ReleaseTbd,
    FutureRelease,
    Released,
    Prototype,
    Unreleased,
}

/// Commercial terms of a figurine in one market region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor: Option<Distributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<BigDecimal>,
    /// Tax inclusive price, recomputed on every read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_announcement_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_order_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// `false` while the release date is only known to the month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date_confirmed: Option<bool>,
}

impl Distribution {
    /// True when no field carries a value; such distributions are dropped instead of stored.
    pub fn is_empty(&self) -> bool {
        self.distributor.is_none()
            && self.base_price.is_none()
            && self.final_price.is_none()
            && self.first_announcement_date.is_none()
            && self.pre_order_date.is_none()
            && self.release_date.is_none()
            && self.release_date_confirmed.is_none()
    }

    /// `Some(self)` unless every field is empty.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// A re-release of an otherwise identical figurine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restock {
    #[serde(
        rename = "distributionJPY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distribution_jpy: Option<Distribution>,
    #[serde(
        rename = "distributionMXN",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distribution_mxn: Option<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamashii_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_channel: Option<DistributionChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<Figurine> for Restock {
    fn from(figurine: Figurine) -> Self {
        Self {
            distribution_jpy: figurine.distribution_jpy,
            distribution_mxn: figurine.distribution_mxn,
            tamashii_url: figurine.tamashii_url,
            distribution_channel: figurine.distribution_channel,
            remarks: figurine.remarks,
        }
    }
}

/// Canonical catalog entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figurine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub base_name: String,
    #[serde(
        rename = "distributionJPY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distribution_jpy: Option<Distribution>,
    #[serde(
        rename = "distributionMXN",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distribution_mxn: Option<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamashii_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_channel: Option<DistributionChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_up: Option<LineUp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub metal: bool,
    #[serde(default)]
    pub oce: bool,
    #[serde(default)]
    pub revival: bool,
    #[serde(default)]
    pub plain: bool,
    #[serde(default)]
    pub broken: bool,
    #[serde(default)]
    pub golden: bool,
    #[serde(default)]
    pub gold: bool,
    #[serde(default)]
    pub hk: bool,
    #[serde(default)]
    pub comic: bool,
    #[serde(default)]
    pub set: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<Anniversary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_images: Option<Vec<String>>,

    // Derived on every read, never trusted from input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restocks: Option<Vec<Restock>>,
}

/// The fields that decide whether two entries are the same figurine.
///
/// Distributions, channel, purchase link and remarks vary between restocks and
/// are left out, as are the identifier and every derived field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    base_name: String,
    line_up: Option<LineUp>,
    series: Option<Series>,
    category: Option<Category>,
    flags: [bool; 10],
    anniversary: Option<Anniversary>,
    official_images: Option<Vec<String>>,
    other_images: Option<Vec<String>>,
}

impl Figurine {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            base_name: self.base_name.clone(),
            line_up: self.line_up,
            series: self.series,
            category: self.category,
            flags: [
                self.metal,
                self.oce,
                self.revival,
                self.plain,
                self.broken,
                self.golden,
                self.gold,
                self.hk,
                self.comic,
                self.set,
            ],
            anniversary: self.anniversary,
            official_images: image_ids(self.official_images.as_deref()),
            other_images: image_ids(self.other_images.as_deref()),
        }
    }

    /// Restock candidates: equal on every identity field.
    pub fn same_figurine(&self, other: &Figurine) -> bool {
        self.identity_key() == other.identity_key()
    }

    /// Copy with every derived field cleared and image URLs reduced to their ids,
    /// which is the shape that gets stored.
    pub fn without_derived(mut self) -> Self {
        self.displayable_name = None;
        self.status = None;
        self.restocks = None;
        self.official_images = strip_image_urls(self.official_images.take());
        self.other_images = strip_image_urls(self.other_images.take());
        for dist in [&mut self.distribution_jpy, &mut self.distribution_mxn]
            .into_iter()
            .flatten()
        {
            dist.final_price = None;
        }
        self
    }

    /// Replace every user editable field with the ones from `changes`, keeping the id.
    pub fn apply_changes(&mut self, changes: Figurine) {
        let id = self.id.take();
        *self = Figurine { id, ..changes }.without_derived();
    }

    /// Field level input checks; returns one message per violation.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let name_len = self.base_name.chars().count();
        if self.base_name.trim().is_empty() {
            errors.push("baseName: must not be blank".to_string());
        } else if !(3..=20).contains(&name_len) {
            errors.push("baseName: size must be between 3 and 20".to_string());
        }
        if let Some(url) = &self.tamashii_url {
            if url.chars().count() > 35 {
                errors.push("tamashiiUrl: size must be between 0 and 35".to_string());
            }
        }
        if let Some(dist) = &self.distribution_mxn {
            if let Some(distributor) = &dist.distributor {
                errors.extend(
                    distributor
                        .validate()
                        .into_iter()
                        .map(|e| format!("distributionMXN.distributor.{e}")),
                );
            }
        }
        if let Some(channel) = &self.distribution_channel {
            errors.extend(
                channel
                    .validate()
                    .into_iter()
                    .map(|e| format!("distributionChannel.{e}")),
            );
        }
        errors
    }
}

fn image_ids(images: Option<&[String]>) -> Option<Vec<String>> {
    images.map(|urls| urls.iter().map(|url| image_id(url).to_string()).collect())
}

/// Lightweight listing projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicFigurine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_up: Option<LineUp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl From<Figurine> for BasicFigurine {
    fn from(figurine: Figurine) -> Self {
        Self {
            id: figurine.id,
            displayable_name: figurine.displayable_name,
            line_up: figurine.line_up,
            category: figurine.category,
            status: figurine.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn priced(price: &str, release: NaiveDate) -> Distribution {
        Distribution {
            base_price: Some(BigDecimal::from_str(price).unwrap()),
            release_date: Some(release),
            ..Distribution::default()
        }
    }

    #[test]
    fn identity_ignores_commercial_terms() {
        let mut a = Figurine::new("Pegasus Seiya");
        a.category = Some(Category::V1);
        a.id = Some("1".into());
        a.distribution_jpy = Some(priced("12000", NaiveDate::from_ymd_opt(2003, 1, 1).unwrap()));
        a.tamashii_url = Some("https://tamashiiweb.com/item/1".into());
        a.remarks = Some("first run".into());

        let mut b = a.clone();
        b.id = Some("2".into());
        b.distribution_jpy = Some(priced("15000", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        b.distribution_channel = Some(DistributionChannel::new("5", "Tamashii Store"));
        b.tamashii_url = None;
        b.remarks = Some("lottery".into());
        b.displayable_name = Some("stale".into());

        assert!(a.same_figurine(&b));

        b.revival = true;
        assert!(!a.same_figurine(&b));
    }

    #[test]
    fn identity_compares_image_ids_not_urls() {
        let mut bare = Figurine::new("Pegasus Seiya");
        bare.official_images = Some(vec!["923/Qs7QRL".into()]);
        let mut completed = bare.clone();
        completed.official_images = Some(vec![
            "https://imagizer.imageshack.com/v2/640x480q70/923/Qs7QRL.jpg".into(),
        ]);
        assert!(bare.same_figurine(&completed));
    }

    #[test]
    fn stored_shape_keeps_bare_image_ids() {
        let mut f = Figurine::new("Pegasus Seiya");
        f.official_images = Some(vec![
            "https://imagizer.imageshack.com/v2/640x480q70/923/Qs7QRL.jpg".into(),
        ]);
        f.other_images = Some(vec![
            "https://imagizer.imageshack.com/v2/640x480q70/924/AbCdEf.png".into(),
        ]);
        let stored = f.without_derived();
        assert_eq!(stored.official_images, Some(vec!["923/Qs7QRL".to_string()]));
        assert_eq!(stored.other_images, Some(vec!["924/AbCdEf.png".to_string()]));
    }

    #[test]
    fn empty_distribution_is_dropped() {
        assert!(Distribution::default().non_empty().is_none());
        let confirmed_only = Distribution {
            release_date_confirmed: Some(false),
            ..Distribution::default()
        };
        assert!(confirmed_only.non_empty().is_some());
    }

    #[test]
    fn derived_fields_are_not_kept_for_storage() {
        let mut f = Figurine::new("Hades");
        f.displayable_name = Some("Hades".into());
        f.status = Some(Status::Released);
        f.restocks = Some(vec![Restock::default()]);
        let mut dist = priced("4000", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        dist.final_price = Some(BigDecimal::from(4400));
        f.distribution_jpy = Some(dist);

        let stored = f.without_derived();
        assert!(stored.displayable_name.is_none());
        assert!(stored.status.is_none());
        assert!(stored.restocks.is_none());
        assert!(stored.distribution_jpy.unwrap().final_price.is_none());
    }

    #[test]
    fn apply_changes_keeps_id() {
        let mut existing = Figurine::new("Hades");
        existing.id = Some("abc".into());
        let mut changes = Figurine::new("Hypnos");
        changes.id = Some("other".into());
        changes.oce = true;
        existing.apply_changes(changes);
        assert_eq!(existing.id.as_deref(), Some("abc"));
        assert_eq!(existing.base_name, "Hypnos");
        assert!(existing.oce);
    }

    #[test]
    fn validate_reports_each_violation() {
        let mut f = Figurine::new("Ab");
        f.tamashii_url = Some("https://tamashiiweb.com/item/000000000001".into());
        let errors = f.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("baseName"));
        assert!(errors[1].starts_with("tamashiiUrl"));

        assert_eq!(
            Figurine::new("").validate(),
            vec!["baseName: must not be blank".to_string()]
        );
        assert!(Figurine::new("Gemini Saga").validate().is_empty());
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let mut f = Figurine::new("Hades");
        f.distribution_jpy = Some(priced("4000", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        f.line_up = Some(LineUp::MythClothEx);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["baseName"], "Hades");
        assert_eq!(json["lineUp"], "MYTH_CLOTH_EX");
        assert_eq!(json["distributionJPY"]["releaseDate"], "2020-01-01");
        assert!(json.get("distributionMXN").is_none());
        assert!(json.get("remarks").is_none());
    }
}
