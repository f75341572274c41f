use std::{fmt, str::FromStr};

use serde::Serialize;

use super::{closest, slugify};
use crate::errors::FarmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Crop {
    Bugday,
    Misir,
    Domates,
    Aycicegi,
    Pamuk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropTip {
    pub topic: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropAdvice {
    pub crop: Crop,
    pub tips: &'static [CropTip],
}

impl CropAdvice {
    /// Bullet-list rendering, one `* **Topic:** text` line per tip.
    pub fn text(&self) -> String {
        self.tips
            .iter()
            .map(|tip| format!("* **{}:** {}", tip.topic, tip.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const fn tip(topic: &'static str, text: &'static str) -> CropTip {
    CropTip { topic, text }
}

static BUGDAY: CropAdvice = CropAdvice {
    crop: Crop::Bugday,
    tips: &[
        tip("Ekim", "Ekim derinliği 4-5 cm olmalıdır."),
        tip(
            "Gübreleme",
            "Kardeşlenme döneminde azotlu gübreleme verimi artırır.",
        ),
        tip(
            "Hastalık",
            "Pas hastalığına karşı yapraklar sık sık kontrol edilmelidir.",
        ),
    ],
};

static MISIR: CropAdvice = CropAdvice {
    crop: Crop::Misir,
    tips: &[
        tip(
            "Sulama",
            "Tepe püskülü çıkarma döneminde su stresi yaşatılmamalıdır.",
        ),
        tip(
            "Hasat",
            "Dane nemi %25-28 seviyesine düştüğünde hasat uygundur.",
        ),
        tip(
            "Zararlı",
            "Mısır kurdu mücadelesi için feromon tuzakları kullanabilirsiniz.",
        ),
    ],
};

static DOMATES: CropAdvice = CropAdvice {
    crop: Crop::Domates,
    tips: &[
        tip(
            "Destek",
            "Sırık domateslerde ipe alma işlemi zamanında yapılmalıdır.",
        ),
        tip(
            "Besleme",
            "Kalsiyum eksikliği dip çürüklüğüne yol açar, dikkat edin.",
        ),
        tip(
            "Hastalık",
            "Mildiyö için nemli havalarda koruyucu ilaçlama yapın.",
        ),
    ],
};

static AYCICEGI: CropAdvice = CropAdvice {
    crop: Crop::Aycicegi,
    tips: &[
        tip(
            "Ekim",
            "Toprak sıcaklığı 8-10°C olduğunda ekim yapılabilir.",
        ),
        tip(
            "Sulama",
            "Tabla oluşumu ve çiçeklenme başlangıcı suya en çok ihtiyaç duyulan dönemdir.",
        ),
    ],
};

static PAMUK: CropAdvice = CropAdvice {
    crop: Crop::Pamuk,
    tips: &[
        tip(
            "Hasat",
            "Koza açımı %60-70'e ulaştığında yaprak döktürücü kullanılabilir.",
        ),
        tip("Zararlı", "Beyaz sinek popülasyonu sürekli izlenmelidir."),
    ],
};

impl Crop {
    pub const ALL: [Crop; 5] = [
        Crop::Bugday,
        Crop::Misir,
        Crop::Domates,
        Crop::Aycicegi,
        Crop::Pamuk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Crop::Bugday => "Buğday",
            Crop::Misir => "Mısır",
            Crop::Domates => "Domates",
            Crop::Aycicegi => "Ayçiçeği",
            Crop::Pamuk => "Pamuk",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Crop::Bugday => "bugday",
            Crop::Misir => "misir",
            Crop::Domates => "domates",
            Crop::Aycicegi => "aycicegi",
            Crop::Pamuk => "pamuk",
        }
    }
}

pub fn lookup(crop: Crop) -> &'static CropAdvice {
    tracing::trace!(crop = crop.slug(), "crop advice lookup");
    match crop {
        Crop::Bugday => &BUGDAY,
        Crop::Misir => &MISIR,
        Crop::Domates => &DOMATES,
        Crop::Aycicegi => &AYCICEGI,
        Crop::Pamuk => &PAMUK,
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Crop {
    type Err = FarmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let slug = slugify(raw);
        Crop::ALL
            .into_iter()
            .find(|crop| crop.slug() == slug)
            .ok_or_else(|| FarmError::UnknownCrop {
                input: raw.to_string(),
                suggestion: closest(&slug, Crop::ALL.iter().map(|crop| crop.slug())),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_crop_has_advice() {
        for crop in Crop::ALL {
            let advice = lookup(crop);
            assert_eq!(advice.crop, crop);
            assert!(!advice.tips.is_empty(), "{crop} has no tips");
            assert!(advice
                .tips
                .iter()
                .all(|tip| !tip.topic.is_empty() && !tip.text.is_empty()));
        }
    }

    #[test]
    fn text_renders_bullets() {
        let text = lookup(Crop::Pamuk).text();
        assert_eq!(
            text,
            "* **Hasat:** Koza açımı %60-70'e ulaştığında yaprak döktürücü kullanılabilir.\n\
             * **Zararlı:** Beyaz sinek popülasyonu sürekli izlenmelidir."
        );
    }

    #[test]
    fn parses_turkish_labels() {
        assert_eq!("Mısır".parse::<Crop>().unwrap(), Crop::Misir);
        assert_eq!("ayçiçeği".parse::<Crop>().unwrap(), Crop::Aycicegi);
        assert_eq!("BUĞDAY".parse::<Crop>().unwrap(), Crop::Bugday);
    }

    #[test]
    fn unknown_crop_suggests_nearest() {
        let err = "domatse".parse::<Crop>().expect_err("typo");
        assert!(err.to_string().contains("Did you mean `domates`?"));
    }
}
