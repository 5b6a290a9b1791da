use alloc::vec::Vec;

use crate::{CoreError, CoreResult, LanguageTag};

#[derive(Clone, Debug, PartialEq)]
pub struct WeightedTag {
    pub tag: LanguageTag,
    pub weight: f32,
}

/// Parsed `Accept-Language` header, ordered by descending weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptLanguage {
    entries: Vec<WeightedTag>,
}

impl AcceptLanguage {
    /// Best-effort parse: ranges that cannot be understood are skipped, so
    /// malformed input yields an empty list rather than an error.
    pub fn parse(raw: &str) -> Self {
        let mut entries: Vec<WeightedTag> = raw
            .split(',')
            .filter_map(|range| parse_range(range).ok().flatten())
            .filter(|entry| entry.weight > 0.0)
            .collect();
        // sort_by is stable, equal weights keep header order
        entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Self { entries }
    }

    pub fn entries(&self) -> &[WeightedTag] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_tags(self) -> Vec<LanguageTag> {
        self.entries.into_iter().map(|entry| entry.tag).collect()
    }
}

pub fn parse_accept_language(raw: &str) -> Vec<LanguageTag> {
    AcceptLanguage::parse(raw).into_tags()
}

fn parse_range(range: &str) -> CoreResult<Option<WeightedTag>> {
    let mut parts = range.split(';');
    let tag = parts.next().unwrap_or_default().trim();
    if tag.is_empty() || tag == "*" {
        return Ok(None);
    }
    let tag = LanguageTag::parse(tag)?;

    let mut weight = 1.0;
    for param in parts {
        let param = param.trim();
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("q") {
            weight = parse_weight(value)?;
        }
    }

    Ok(Some(WeightedTag { tag, weight }))
}

fn parse_weight(value: &str) -> CoreResult<f32> {
    let weight: f32 = value
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidWeight("not a decimal"))?;
    if !(0.0..=1.0).contains(&weight) {
        return Err(CoreError::InvalidWeight("out of range"));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{AcceptLanguage, parse_accept_language, parse_weight};
    use crate::CoreError;

    fn tags(raw: &str) -> Vec<String> {
        parse_accept_language(raw)
            .into_iter()
            .map(|tag| String::from(tag.as_str()))
            .collect()
    }

    #[test]
    fn orders_by_weight_and_normalizes_separator() {
        assert_eq!(
            tags("en-US,en;q=0.8,fr-FR;q=0.5,fr;q=0.3"),
            ["en_US", "en", "fr_FR", "fr"]
        );
    }

    #[test]
    fn single_tag_without_weight() {
        assert_eq!(tags("en"), ["en"]);
    }

    #[test]
    fn empty_header_yields_nothing() {
        assert!(tags("").is_empty());
        assert!(tags("  ").is_empty());
        assert!(tags(",,").is_empty());
    }

    #[test]
    fn reorders_out_of_order_weights() {
        assert_eq!(tags("fr;q=0.3,de;q=0.9,en"), ["en", "de", "fr"]);
    }

    #[test]
    fn equal_weights_keep_header_order() {
        assert_eq!(tags("da;q=0.5,en-GB;q=0.5,en;q=0.5"), ["da", "en_GB", "en"]);
    }

    #[test]
    fn skips_malformed_ranges() {
        assert_eq!(tags("en;q=abc,fr-FR;q=0.7,../x,de;q=2"), ["fr_FR"]);
        assert!(tags(";;;=,").is_empty());
    }

    #[test]
    fn drops_wildcard_and_zero_weight() {
        assert_eq!(tags("*;q=0.5,en,fr;q=0"), ["en"]);
    }

    #[test]
    fn ignores_whitespace_and_other_params() {
        assert_eq!(tags(" en-US ; q=0.4 ; level=1 , de "), ["de", "en_US"]);
    }

    #[test]
    fn exposes_weights() {
        let parsed = AcceptLanguage::parse("en,fr;q=0.25");
        assert_eq!(parsed.entries().len(), 2);
        assert_eq!(parsed.entries()[1].weight, 0.25);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn rejects_weight_outside_unit_interval() {
        assert_eq!(
            parse_weight("1.5"),
            Err(CoreError::InvalidWeight("out of range"))
        );
        assert_eq!(
            parse_weight("NaN"),
            Err(CoreError::InvalidWeight("out of range"))
        );
    }
}
