//! Per-market generation procedures. The three markets share the same shape
//! (campaign + ad group + product ad, then keyword or targeting rows, then
//! negatives) and differ in default CPC and in where negatives come from.

mod b_us;
mod c_us;
mod k_eu;

use anyhow::Result;

use crate::survey::Survey;
use crate::template::TemplateRow;

/// Named negative-keyword columns (C US and B US surveys)
pub const NEG_EXACT_COLUMN: &str = "否定精准";
pub const NEG_PHRASE_COLUMN: &str = "否定词组";
pub const HOST_EXTRA_NEG_EXACT_COLUMN: &str = "宿主额外否精准";
pub const HOST_EXTRA_NEG_PHRASE_COLUMN: &str = "宿主额外否词组";
pub const NEG_ASIN_COLUMN: &str = "否定ASIN";

/// Positional negative-keyword columns (K EU surveys): S/T hold negatives
/// for broad campaigns, U/V extra negatives for host exact campaigns
pub const KEU_BROAD_NEG_EXACT: usize = 18;
pub const KEU_BROAD_NEG_PHRASE: usize = 19;
pub const KEU_HOST_NEG_EXACT: usize = 20;
pub const KEU_HOST_NEG_PHRASE: usize = 21;

/// Supported markets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    CUs,
    BUs,
    KEu,
}

impl Market {
    /// Parse a market code. Accepts `c-us`, `C US`, `cus` and friends.
    pub fn from_code(code: &str) -> Option<Market> {
        let squashed: String = code
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match squashed.as_str() {
            "cus" => Some(Market::CUs),
            "bus" => Some(Market::BUs),
            "keu" => Some(Market::KEu),
            _ => None,
        }
    }

    /// Canonical code used in output filenames
    pub fn code(self) -> &'static str {
        match self {
            Market::CUs => "c-us",
            Market::BUs => "b-us",
            Market::KEu => "k-eu",
        }
    }

    /// Human-readable selector label
    pub fn label(self) -> &'static str {
        match self {
            Market::CUs => "C US",
            Market::BUs => "B US",
            Market::KEu => "K EU",
        }
    }

    /// Default keyword CPC when the survey carries none
    pub fn default_cpc(self) -> f64 {
        match self {
            Market::CUs => 0.5,
            Market::BUs | Market::KEu => 0.6,
        }
    }

    pub fn all() -> [Market; 3] {
        [Market::CUs, Market::BUs, Market::KEu]
    }
}

/// Result of a generation run: the flat entity rows plus non-fatal warnings
#[derive(Debug)]
pub struct GeneratedTemplate {
    pub rows: Vec<TemplateRow>,
    pub warnings: Vec<String>,
}

impl GeneratedTemplate {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Generate the bulk template for one market. The duplicate gate runs first
/// over the keyword columns and the market's negative columns; any duplicate
/// aborts the whole run with no rows produced.
pub fn generate(market: Market, survey: &Survey) -> Result<GeneratedTemplate> {
    let mut checked = survey.keyword_columns();
    checked.extend(negative_columns(market, survey));
    survey.ensure_no_duplicates(&checked)?;

    match market {
        Market::CUs => c_us::generate(survey),
        Market::BUs => b_us::generate(survey),
        Market::KEu => k_eu::generate(survey),
    }
}

/// The negative-keyword columns the duplicate gate covers for a market
fn negative_columns(market: Market, survey: &Survey) -> Vec<usize> {
    match market {
        Market::CUs | Market::BUs => [
            NEG_EXACT_COLUMN,
            NEG_PHRASE_COLUMN,
            HOST_EXTRA_NEG_EXACT_COLUMN,
            HOST_EXTRA_NEG_PHRASE_COLUMN,
            NEG_ASIN_COLUMN,
        ]
        .iter()
        .filter_map(|name| survey.column_index(name))
        .collect(),
        Market::KEu => [
            KEU_BROAD_NEG_EXACT,
            KEU_BROAD_NEG_PHRASE,
            KEU_HOST_NEG_EXACT,
            KEU_HOST_NEG_PHRASE,
        ]
        .iter()
        .copied()
        .filter(|&idx| idx < survey.headers().len())
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_codes_round_trip() {
        for market in Market::all() {
            assert_eq!(Market::from_code(market.code()), Some(market));
            assert_eq!(Market::from_code(market.label()), Some(market));
        }
        assert_eq!(Market::from_code("C US"), Some(Market::CUs));
        assert_eq!(Market::from_code("b_us"), Some(Market::BUs));
        assert_eq!(Market::from_code("jp"), None);
    }

    #[test]
    fn test_default_cpc_split() {
        assert_eq!(Market::CUs.default_cpc(), 0.5);
        assert_eq!(Market::BUs.default_cpc(), 0.6);
        assert_eq!(Market::KEu.default_cpc(), 0.6);
    }
}
