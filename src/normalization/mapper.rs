use crate::error::MappingError;
use crate::model::{Distribution, DistributionChannel, Distributor, Figurine, SourceFigurine};

use super::coerce::{
    non_empty, parse_amount, parse_date, parse_flag, parse_list, release_confirmed,
};
use super::vocabulary;

/// Converts bulk-import rows into canonical [`Figurine`]s.
///
/// The distributor and channel catalogs are captured once at construction and
/// only read afterwards, so a mapper can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct FigurineMapper {
    distributors: Vec<Distributor>,
    channels: Vec<DistributionChannel>,
}

impl FigurineMapper {
    pub fn new(distributors: Vec<Distributor>, channels: Vec<DistributionChannel>) -> Self {
        Self {
            distributors,
            channels,
        }
    }

    /// Map one row. Fails on the first unparseable date or amount.
    pub fn map_record(&self, source: &SourceFigurine) -> Result<Figurine, MappingError> {
        let distribution_jpy = Distribution {
            base_price: parse_amount("Price (JPY)", &source.price_jpy)?,
            first_announcement_date: parse_date("Announcement (JPY)", &source.announcement_jpy)?,
            pre_order_date: parse_date("Preorder (JPY)", &source.preorder_jpy)?,
            release_date: parse_date("Release (JPY)", &source.release_jpy)?,
            release_date_confirmed: release_confirmed(&source.release_jpy),
            ..Distribution::default()
        };
        let distribution_mxn = Distribution {
            distributor: self.find_distributor(&source.distributor_mxn),
            base_price: parse_amount("Price (MXN)", &source.price_mxn)?,
            pre_order_date: parse_date("Preorder (MXN)", &source.preorder_mxn)?,
            release_date: parse_date("Release (MXN)", &source.release_mxn)?,
            release_date_confirmed: release_confirmed(&source.release_mxn),
            ..Distribution::default()
        };

        Ok(Figurine {
            base_name: source.base_name.clone(),
            distribution_jpy: distribution_jpy.non_empty(),
            distribution_mxn: distribution_mxn.non_empty(),
            tamashii_url: non_empty(&source.link),
            distribution_channel: self.find_channel(&source.distribution),
            line_up: vocabulary::line_up(&source.line_up),
            series: vocabulary::series(&source.series),
            category: vocabulary::category(&source.group),
            metal: parse_flag(&source.metal),
            oce: parse_flag(&source.oce),
            revival: parse_flag(&source.revival),
            plain: parse_flag(&source.plain_cloth),
            broken: parse_flag(&source.broken),
            golden: parse_flag(&source.golden),
            gold: parse_flag(&source.gold),
            hk: parse_flag(&source.hk),
            comic: parse_flag(&source.manga),
            set: parse_flag(&source.set),
            anniversary: vocabulary::anniversary(&source.anniversary),
            remarks: non_empty(&source.remarks),
            official_images: parse_list(&source.official_images),
            other_images: parse_list(&source.other_images),
            ..Figurine::default()
        })
    }

    fn find_distributor(&self, name: &str) -> Option<Distributor> {
        self.distributors.iter().find(|d| d.name == name).cloned()
    }

    fn find_channel(&self, label: &str) -> Option<DistributionChannel> {
        self.channels
            .iter()
            .find(|c| c.distribution == label)
            .cloned()
    }
}
