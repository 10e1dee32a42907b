//! B US procedure: plain negative lists apply to broad campaigns only, host
//! campaigns still receive the host extras. Default CPC 0.6.

use anyhow::Result;

use crate::categories::{is_host_campaign, match_column, MatchKind};
use crate::survey::{CampaignValues, Survey};
use crate::template::{match_type, TemplateRow};
use crate::utils::today_start_date;

use super::{
    GeneratedTemplate, Market, HOST_EXTRA_NEG_EXACT_COLUMN, HOST_EXTRA_NEG_PHRASE_COLUMN,
    NEG_ASIN_COLUMN, NEG_EXACT_COLUMN, NEG_PHRASE_COLUMN,
};

pub(super) fn generate(survey: &Survey) -> Result<GeneratedTemplate> {
    let default_cpc = Market::BUs.default_cpc();
    let (values, mut warnings) = survey.campaign_values(default_cpc);
    let start_date = today_start_date();
    let keyword_columns = survey.keyword_columns();
    let mut rows: Vec<TemplateRow> = Vec::new();

    for campaign in survey.campaigns() {
        let vals = values
            .get(&campaign)
            .cloned()
            .unwrap_or_else(|| CampaignValues::with_default_cpc(default_cpc));

        let kind = match MatchKind::of_campaign(&campaign) {
            Some(kind) => kind,
            None => {
                warnings.push(format!(
                    "campaign '{}' follows no known naming convention, skipped",
                    campaign
                ));
                continue;
            }
        };

        rows.push(TemplateRow::campaign(&campaign, vals.budget, &start_date));
        rows.push(TemplateRow::ad_group(&campaign, vals.group_bid));
        rows.push(TemplateRow::product_ad(&campaign, &vals.sku));

        match kind {
            MatchKind::Exact | MatchKind::Broad => {
                let mt = if kind == MatchKind::Exact {
                    match_type::EXACT
                } else {
                    match_type::BROAD
                };
                match match_column(&campaign, kind, survey.headers(), &keyword_columns) {
                    Some((column, _)) => {
                        for keyword in survey.column_values(column) {
                            rows.push(TemplateRow::keyword(&campaign, &keyword, mt, vals.cpc));
                        }
                    }
                    None => warnings.push(format!(
                        "campaign '{}' matched no keyword column",
                        campaign
                    )),
                }

                // Broad campaigns shield themselves with the plain negatives;
                // exact campaigns already target narrowly
                if kind == MatchKind::Broad {
                    for text in survey.named_column_values(NEG_EXACT_COLUMN) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_EXACT,
                        ));
                    }
                    for text in survey.named_column_values(NEG_PHRASE_COLUMN) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_PHRASE,
                        ));
                    }
                }
                if is_host_campaign(&campaign) {
                    for text in survey.named_column_values(HOST_EXTRA_NEG_EXACT_COLUMN) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_EXACT,
                        ));
                    }
                    for text in survey.named_column_values(HOST_EXTRA_NEG_PHRASE_COLUMN) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_PHRASE,
                        ));
                    }
                }
            }
            MatchKind::ProductTargeting => {
                match match_column(&campaign, kind, survey.headers(), &keyword_columns) {
                    Some((column, _)) => {
                        for asin in survey.column_values(column) {
                            rows.push(TemplateRow::product_targeting(&campaign, &asin, vals.cpc));
                        }
                    }
                    None => warnings.push(format!(
                        "campaign '{}' matched no ASIN column",
                        campaign
                    )),
                }
                for asin in survey.named_column_values(NEG_ASIN_COLUMN) {
                    rows.push(TemplateRow::negative_product_targeting(&campaign, &asin));
                }
            }
        }
    }

    Ok(GeneratedTemplate { rows, warnings })
}
