//! Free-text labels used by the import sheet, mapped onto the closed vocabularies.
//!
//! Labels are matched exactly. Anything else resolves to `None` so unknown
//! vocabulary never aborts an import.

use crate::model::{Anniversary, Category, LineUp, Series};

const CATEGORY_LABELS: &[(&str, Category)] = &[
    ("Bronze Saint V1", Category::V1),
    ("Bronze Saint V2", Category::V2),
    ("Bronze Saint V3", Category::V3),
    ("Bronze Saint V4", Category::V4),
    ("Bronze Saint V5", Category::V5),
    ("Bronze Secondary", Category::Secondary),
    ("Black Saint", Category::Black),
    ("Steel", Category::Steel),
    ("Silver Saint", Category::Silver),
    ("Gold Saint", Category::Gold),
    ("God Robe", Category::Robe),
    ("Poseidon Scale", Category::Scale),
    ("Surplice Saint", Category::Surplice),
    ("Specter", Category::Specter),
    ("Judge", Category::Judge),
    ("God", Category::God),
    ("Inheritor", Category::Inheritor),
];

const LINEUP_LABELS: &[(&str, LineUp)] = &[
    ("Myth Cloth EX", LineUp::MythClothEx),
    ("Myth Cloth", LineUp::MythCloth),
    ("Appendix", LineUp::Appendix),
    ("Saint Cloth Legend", LineUp::ScLegend),
    ("Figuarts", LineUp::Figuarts),
    ("Saint Cloth Crown", LineUp::ScCrown),
    ("DD Panoramation", LineUp::Ddp),
    ("Figuarts Zero Metallic Touch", LineUp::FiguartsZero),
];

const SERIES_LABELS: &[(&str, Series)] = &[
    ("Saint Seiya", Series::SaintSeiya),
    ("Saintia Sho", Series::SaintiaSho),
    ("Soul of Gold", Series::Sog),
    ("Saint Seiya Legend Of Sanctuary", Series::SsLegendOfSanctuary),
    ("Saint Seiya Omega", Series::SsOmega),
    ("The Lost Canvas", Series::LostCanvas),
    ("Saint Seiya The Beginning", Series::SsTheBeginning),
];

const ANNIVERSARY_LABELS: &[(&str, Anniversary)] = &[
    ("10", Anniversary::A10),
    ("15", Anniversary::A15),
    ("20", Anniversary::A20),
    ("30", Anniversary::A30),
    ("40", Anniversary::A40),
    ("50", Anniversary::A50),
];

fn lookup<T: Copy>(table: &[(&str, T)], label: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, value)| *value)
}

/// Category from the sheet's `Group` column.
pub fn category(label: &str) -> Option<Category> {
    lookup(CATEGORY_LABELS, label)
}

pub fn line_up(label: &str) -> Option<LineUp> {
    lookup(LINEUP_LABELS, label)
}

pub fn series(label: &str) -> Option<Series> {
    lookup(SERIES_LABELS, label)
}

pub fn anniversary(label: &str) -> Option<Anniversary> {
    lookup(ANNIVERSARY_LABELS, label)
}
