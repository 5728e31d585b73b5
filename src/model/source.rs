use serde::{Deserialize, Serialize};

/// One row of the bulk import sheet, exactly as typed by the curator.
///
/// Every column except `Base Name` is optional; missing columns read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFigurine {
    #[serde(rename = "Base Name")]
    pub base_name: String,
    #[serde(rename = "Price (JPY)", default)]
    pub price_jpy: String,
    #[serde(rename = "Announcement (JPY)", default)]
    pub announcement_jpy: String,
    #[serde(rename = "Preorder (JPY)", default)]
    pub preorder_jpy: String,
    #[serde(rename = "Release (JPY)", default)]
    pub release_jpy: String,
    #[serde(rename = "Distributor (MXN)", default)]
    pub distributor_mxn: String,
    #[serde(rename = "Price (MXN)", default)]
    pub price_mxn: String,
    #[serde(rename = "Preorder (MXN)", default)]
    pub preorder_mxn: String,
    #[serde(rename = "Release (MXN)", default)]
    pub release_mxn: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Distribution", default)]
    pub distribution: String,
    #[serde(rename = "LineUp", default)]
    pub line_up: String,
    #[serde(rename = "Series", default)]
    pub series: String,
    #[serde(rename = "Group", default)]
    pub group: String,
    #[serde(rename = "Metal", default)]
    pub metal: String,
    #[serde(rename = "OCE", default)]
    pub oce: String,
    #[serde(rename = "Revival", default)]
    pub revival: String,
    #[serde(rename = "PlainCloth", default)]
    pub plain_cloth: String,
    #[serde(rename = "Broken", default)]
    pub broken: String,
    #[serde(rename = "Golden", default)]
    pub golden: String,
    #[serde(rename = "Gold", default)]
    pub gold: String,
    #[serde(rename = "HK", default)]
    pub hk: String,
    #[serde(rename = "Manga", default)]
    pub manga: String,
    #[serde(rename = "Set", default)]
    pub set: String,
    #[serde(rename = "Anniversary", default)]
    pub anniversary: String,
    #[serde(rename = "Remarks", default)]
    pub remarks: String,
    #[serde(rename = "Official Images", default)]
    pub official_images: String,
    #[serde(rename = "Other Images", default)]
    pub other_images: String,
}
