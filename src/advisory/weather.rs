use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{closest, slugify};
use crate::errors::FarmError;

/// Shown with every forecast: the figures are a fixed regional sample.
pub const SIMULATION_NOTICE: &str =
    "Not: Gerçek zamanlı veri için API anahtarı gereklidir. Şu an genel tahmin gösteriliyor.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    IcAnadolu,
    Ege,
    Akdeniz,
    Karadeniz,
    Marmara,
    DoguAnadolu,
    Guneydogu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherRecord {
    pub region: Region,
    pub condition: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub advisory: &'static str,
}

static IC_ANADOLU: WeatherRecord = WeatherRecord {
    region: Region::IcAnadolu,
    condition: "Parçalı Bulutlu",
    temperature: "18°C",
    humidity: "%40",
    wind: "15 km/s",
    advisory: "Gece don riski olabilir.",
};

static EGE: WeatherRecord = WeatherRecord {
    region: Region::Ege,
    condition: "Güneşli",
    temperature: "24°C",
    humidity: "%50",
    wind: "20 km/s",
    advisory: "Sulama için uygun gün.",
};

static AKDENIZ: WeatherRecord = WeatherRecord {
    region: Region::Akdeniz,
    condition: "Açık",
    temperature: "28°C",
    humidity: "%60",
    wind: "10 km/s",
    advisory: "Sıcak çarpmasına dikkat.",
};

static KARADENIZ: WeatherRecord = WeatherRecord {
    region: Region::Karadeniz,
    condition: "Yağmurlu",
    temperature: "16°C",
    humidity: "%85",
    wind: "5 km/s",
    advisory: "İlaçlama yapmayınız.",
};

static MARMARA: WeatherRecord = WeatherRecord {
    region: Region::Marmara,
    condition: "Rüzgarlı",
    temperature: "20°C",
    humidity: "%55",
    wind: "30 km/s",
    advisory: "Sera havalandırmalarını kontrol edin.",
};

static DOGU_ANADOLU: WeatherRecord = WeatherRecord {
    region: Region::DoguAnadolu,
    condition: "Soğuk",
    temperature: "10°C",
    humidity: "%30",
    wind: "25 km/s",
    advisory: "Hayvanları korunaklı alana alın.",
};

static GUNEYDOGU: WeatherRecord = WeatherRecord {
    region: Region::Guneydogu,
    condition: "Sıcak",
    temperature: "30°C",
    humidity: "%20",
    wind: "12 km/s",
    advisory: "Kuraklık riski, sulama planlayın.",
};

static REGION_INDEX: Lazy<HashMap<&'static str, Region>> = Lazy::new(|| {
    Region::ALL
        .iter()
        .map(|region| (region.slug(), *region))
        .collect()
});

impl Region {
    /// Selection order.
    pub const ALL: [Region; 7] = [
        Region::IcAnadolu,
        Region::Ege,
        Region::Akdeniz,
        Region::Karadeniz,
        Region::Marmara,
        Region::DoguAnadolu,
        Region::Guneydogu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::IcAnadolu => "İç Anadolu",
            Region::Ege => "Ege",
            Region::Akdeniz => "Akdeniz",
            Region::Karadeniz => "Karadeniz",
            Region::Marmara => "Marmara",
            Region::DoguAnadolu => "Doğu Anadolu",
            Region::Guneydogu => "Güneydoğu",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Region::IcAnadolu => "ic-anadolu",
            Region::Ege => "ege",
            Region::Akdeniz => "akdeniz",
            Region::Karadeniz => "karadeniz",
            Region::Marmara => "marmara",
            Region::DoguAnadolu => "dogu-anadolu",
            Region::Guneydogu => "guneydogu",
        }
    }
}

/// Fixed forecast for `region`.
pub fn lookup(region: Region) -> &'static WeatherRecord {
    let record = match region {
        Region::IcAnadolu => &IC_ANADOLU,
        Region::Ege => &EGE,
        Region::Akdeniz => &AKDENIZ,
        Region::Karadeniz => &KARADENIZ,
        Region::Marmara => &MARMARA,
        Region::DoguAnadolu => &DOGU_ANADOLU,
        Region::Guneydogu => &GUNEYDOGU,
    };
    tracing::trace!(region = region.slug(), "weather lookup");
    record
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = FarmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let slug = slugify(raw);
        REGION_INDEX
            .get(slug.as_str())
            .copied()
            .ok_or_else(|| FarmError::UnknownRegion {
                input: raw.to_string(),
                suggestion: closest(&slug, Region::ALL.iter().map(|region| region.slug())),
            })
    }
}
