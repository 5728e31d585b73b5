// Closed classification vocabularies for the product line.

use serde::{Deserialize, Serialize};

/// A catalog value that carries a human readable description.
pub trait Describable: Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Stable key used on the wire (e.g. `MYTH_CLOTH_EX`).
    fn key(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.key() == key)
    }
}

/// Key/description pair returned by the catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogKeyDescription {
    pub key: String,
    pub description: String,
}

impl CatalogKeyDescription {
    pub fn of<E: Describable>(value: E) -> Self {
        Self {
            key: value.key().to_string(),
            description: value.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineUp {
    MythClothEx,
    MythCloth,
    Appendix,
    ScLegend,
    Figuarts,
    FiguartsZero,
    ScCrown,
    Ddp,
}

impl Describable for LineUp {
    const ALL: &'static [Self] = &[
        LineUp::MythClothEx,
        LineUp::MythCloth,
        LineUp::Appendix,
        LineUp::ScLegend,
        LineUp::Figuarts,
        LineUp::FiguartsZero,
        LineUp::ScCrown,
        LineUp::Ddp,
    ];

    fn key(&self) -> &'static str {
        match self {
            LineUp::MythClothEx => "MYTH_CLOTH_EX",
            LineUp::MythCloth => "MYTH_CLOTH",
            LineUp::Appendix => "APPENDIX",
            LineUp::ScLegend => "SC_LEGEND",
            LineUp::Figuarts => "FIGUARTS",
            LineUp::FiguartsZero => "FIGUARTS_ZERO",
            LineUp::ScCrown => "SC_CROWN",
            LineUp::Ddp => "DDP",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            LineUp::MythClothEx => "Myth Cloth EX",
            LineUp::MythCloth => "Myth Cloth",
            LineUp::Appendix => "Appendix",
            LineUp::ScLegend => "Saint Cloth Legend",
            LineUp::Figuarts => "Figuarts",
            LineUp::FiguartsZero => "Figuarts Zero Touche Metallique",
            LineUp::ScCrown => "Saint Cloth Crown",
            LineUp::Ddp => "DD Panoramation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Series {
    SaintSeiya,
    SaintiaSho,
    Sog,
    SsLegendOfSanctuary,
    SsOmega,
    LostCanvas,
    SsTheBeginning,
}

impl Describable for Series {
    const ALL: &'static [Self] = &[
        Series::SaintSeiya,
        Series::SaintiaSho,
        Series::Sog,
        Series::SsLegendOfSanctuary,
        Series::SsOmega,
        Series::LostCanvas,
        Series::SsTheBeginning,
    ];

    fn key(&self) -> &'static str {
        match self {
            Series::SaintSeiya => "SAINT_SEIYA",
            Series::SaintiaSho => "SAINTIA_SHO",
            Series::Sog => "SOG",
            Series::SsLegendOfSanctuary => "SS_LEGEND_OF_SANCTUARY",
            Series::SsOmega => "SS_OMEGA",
            Series::LostCanvas => "LOST_CANVAS",
            Series::SsTheBeginning => "SS_THE_BEGINNING",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Series::SaintSeiya => "Saint Seiya",
            Series::SaintiaSho => "Saintia Sho",
            Series::Sog => "Soul of Gold",
            Series::SsLegendOfSanctuary => "Saint Seiya Legend Of Sanctuary",
            Series::SsOmega => "Saint Seiya Omega",
            Series::LostCanvas => "The Lost Canvas",
            Series::SsTheBeginning => "Saint Seiya The Beginning",
        }
    }
}

/// Variant tier of a figurine (which cloth / armor generation it depicts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    V1,
    V2,
    V3,
    V4,
    V5,
    Secondary,
    Black,
    Steel,
    Silver,
    Gold,
    Robe,
    Scale,
    Surplice,
    Specter,
    Judge,
    God,
    Inheritor,
}

impl Describable for Category {
    const ALL: &'static [Self] = &[
        Category::V1,
        Category::V2,
        Category::V3,
        Category::V4,
        Category::V5,
        Category::Secondary,
        Category::Black,
        Category::Steel,
        Category::Silver,
        Category::Gold,
        Category::Robe,
        Category::Scale,
        Category::Surplice,
        Category::Specter,
        Category::Judge,
        Category::God,
        Category::Inheritor,
    ];

    fn key(&self) -> &'static str {
        match self {
            Category::V1 => "V1",
            Category::V2 => "V2",
            Category::V3 => "V3",
            Category::V4 => "V4",
            Category::V5 => "V5",
            Category::Secondary => "SECONDARY",
            Category::Black => "BLACK",
            Category::Steel => "STEEL",
            Category::Silver => "SILVER",
            Category::Gold => "GOLD",
            Category::Robe => "ROBE",
            Category::Scale => "SCALE",
            Category::Surplice => "SURPLICE",
            Category::Specter => "SPECTER",
            Category::Judge => "JUDGE",
            Category::God => "GOD",
            Category::Inheritor => "INHERITOR",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Category::V1 => "Bronze Saint V1",
            Category::V2 => "Bronze Saint V2",
            Category::V3 => "Bronze Saint V3",
            Category::V4 => "Bronze Saint V4",
            Category::V5 => "Bronze Saint V5",
            Category::Secondary => "Bronze Secondary",
            Category::Black => "Black Saint",
            Category::Steel => "Steel Saint",
            Category::Silver => "Silver Saint",
            Category::Gold => "Gold Saint",
            Category::Robe => "God Robe",
            Category::Scale => "Poseidon Scale",
            Category::Surplice => "Surplice Saint",
            Category::Specter => "Specter",
            Category::Judge => "Judge",
            Category::God => "God",
            Category::Inheritor => "Inheritor",
        }
    }
}

/// Commemorative anniversary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anniversary {
    #[serde(rename = "A_10")]
    A10,
    #[serde(rename = "A_15")]
    A15,
    #[serde(rename = "A_20")]
    A20,
    #[serde(rename = "A_30")]
    A30,
    #[serde(rename = "A_40")]
    A40,
    #[serde(rename = "A_50")]
    A50,
}

impl Describable for Anniversary {
    const ALL: &'static [Self] = &[
        Anniversary::A10,
        Anniversary::A15,
        Anniversary::A20,
        Anniversary::A30,
        Anniversary::A40,
        Anniversary::A50,
    ];

    fn key(&self) -> &'static str {
        match self {
            Anniversary::A10 => "A_10",
            Anniversary::A15 => "A_15",
            Anniversary::A20 => "A_20",
            Anniversary::A30 => "A_30",
            Anniversary::A40 => "A_40",
            Anniversary::A50 => "A_50",
        }
    }

    /// The anniversary number, e.g. `"20"`.
    fn description(&self) -> &'static str {
        match self {
            Anniversary::A10 => "10",
            Anniversary::A15 => "15",
            Anniversary::A20 => "20",
            Anniversary::A30 => "30",
            Anniversary::A40 => "40",
            Anniversary::A50 => "50",
        }
    }
}
