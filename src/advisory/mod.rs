//! Static weather and crop-advice tables keyed by closed enumerations.

pub mod crops;
pub mod weather;

pub use crops::{Crop, CropAdvice, CropTip};
pub use weather::{Region, WeatherRecord, SIMULATION_NOTICE};

use strsim::levenshtein;

const SUGGESTION_DISTANCE: usize = 3;

/// Folds Turkish letters to ASCII, lowercases, and joins words with `-`.
pub(crate) fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        let folded = match ch {
            'İ' | 'I' | 'ı' | 'i' => 'i',
            'Ç' | 'ç' => 'c',
            'Ğ' | 'ğ' => 'g',
            'Ö' | 'ö' => 'o',
            'Ş' | 'ş' => 's',
            'Ü' | 'ü' => 'u',
            ' ' | '_' | '-' => '-',
            other => other.to_ascii_lowercase(),
        };
        if folded == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(folded);
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Closest slug within a small edit distance, used for "did you mean" hints.
pub(crate) fn closest<'a>(slug: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    candidates
        .map(|candidate| (levenshtein(candidate, slug), candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_folds_turkish_letters() {
        assert_eq!(slugify("İç Anadolu"), "ic-anadolu");
        assert_eq!(slugify("  Doğu   Anadolu "), "dogu-anadolu");
        assert_eq!(slugify("AYÇİÇEĞİ"), "aycicegi");
        assert_eq!(slugify("Güneydoğu"), "guneydogu");
    }

    #[test]
    fn closest_respects_distance_limit() {
        let names = ["marmara", "ege"];
        assert_eq!(closest("marmra", names.iter().copied()), Some("marmara"));
        assert_eq!(closest("siberia", names.iter().copied()), None);
    }
}
