//! K EU procedure: negatives come from fixed positional columns. S/T guard
//! broad campaigns, U/V add extras for exact campaigns whose matched column
//! fragment is a host category. Default CPC 0.6.

use anyhow::Result;

use crate::categories::{match_column, MatchKind, HOST_CATEGORIES};
use crate::survey::{CampaignValues, Survey};
use crate::template::{match_type, TemplateRow};
use crate::utils::today_start_date;

use super::{
    GeneratedTemplate, Market, KEU_BROAD_NEG_EXACT, KEU_BROAD_NEG_PHRASE, KEU_HOST_NEG_EXACT,
    KEU_HOST_NEG_PHRASE,
};

pub(super) fn generate(survey: &Survey) -> Result<GeneratedTemplate> {
    let default_cpc = Market::KEu.default_cpc();
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
                let mut matched_category: Option<String> = None;
                match match_column(&campaign, kind, survey.headers(), &keyword_columns) {
                    Some((column, category)) => {
                        matched_category = category;
                        for keyword in survey.column_values(column) {
                            rows.push(TemplateRow::keyword(&campaign, &keyword, mt, vals.cpc));
                        }
                    }
                    None => warnings.push(format!(
                        "campaign '{}' matched no keyword column",
                        campaign
                    )),
                }

                if kind == MatchKind::Broad {
                    for text in survey.column_values(KEU_BROAD_NEG_EXACT) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_EXACT,
                        ));
                    }
                    for text in survey.column_values(KEU_BROAD_NEG_PHRASE) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_PHRASE,
                        ));
                    }
                } else if matched_category
                    .as_deref()
                    .is_some_and(|category| HOST_CATEGORIES.contains(&category))
                {
                    for text in survey.column_values(KEU_HOST_NEG_EXACT) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_EXACT,
                        ));
                    }
                    for text in survey.column_values(KEU_HOST_NEG_PHRASE) {
                        rows.push(TemplateRow::negative_keyword(
                            &campaign,
                            &text,
                            match_type::NEGATIVE_PHRASE,
                        ));
                    }
                }
            }
            // K EU surveys carry no negative ASIN list
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
            }
        }
    }

    Ok(GeneratedTemplate { rows, warnings })
}
