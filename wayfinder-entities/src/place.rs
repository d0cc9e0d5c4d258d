use strum::{Display, EnumIter, EnumString};

use crate::{geo::MapPoint, id::Id};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub category    : Category,
    pub region      : Region,
    pub image       : Option<String>,
    pub position    : Option<MapPoint>,
}

impl Place {
    pub const fn max_name_len() -> usize {
        150
    }
}

/// Closed set of place categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Mountains,
    Waterfalls,
    Historic,
    Forests,
    Views,
    Hiking,
    Lakes,
    Sunrise,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Waterfalls => "Waterfalls & canyons",
            Self::Historic => "Historic sites",
            Self::Forests => "Forests",
            Self::Views => "Scenic views",
            Self::Hiking => "Hiking trails",
            Self::Lakes => "Lakes",
            Self::Sunrise => "Sunrise spots",
        }
    }
}

/// Closed set of regions a place can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
pub enum Region {
    Tbilisi,
    Adjara,
    Abkhazia,
    Samegrelo,
    Guria,
    Imereti,
    Kakheti,
    #[strum(serialize = "Racha-Lechkhumi")]
    RachaLechkhumi,
    #[strum(serialize = "Mtskheta-Mtianeti")]
    MtskhetaMtianeti,
    #[strum(serialize = "Samtskhe-Javakheti")]
    SamtskheJavakheti,
    Svaneti,
    #[strum(serialize = "Shida Kartli")]
    ShidaKartli,
    #[strum(serialize = "Kvemo Kartli")]
    KvemoKartli,
}
