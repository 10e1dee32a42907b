//! The fixed 25-column bulk-upload schema and the entity rows that fill it.

/// Output column headers, in sheet order
pub const TEMPLATE_COLUMNS: [&str; 25] = [
    "产品",
    "实体层级",
    "操作",
    "广告活动编号",
    "广告组编号",
    "广告组合编号",
    "广告编号",
    "关键词编号",
    "商品投放 ID",
    "广告活动名称",
    "广告组名称",
    "开始日期",
    "结束日期",
    "投放类型",
    "状态",
    "每日预算",
    "SKU",
    "广告组默认竞价",
    "竞价",
    "关键词文本",
    "匹配类型",
    "竞价方案",
    "广告位",
    "百分比",
    "拓展商品投放编号",
];

/// Documented default values for generated rows
pub mod defaults {
    pub const PRODUCT: &str = "商品推广";
    pub const OPERATION: &str = "Create";
    pub const STATUS: &str = "已启用";
    pub const TARGETING_TYPE: &str = "手动";
    pub const BIDDING_STRATEGY: &str = "动态竞价 - 仅降低";
    pub const DAILY_BUDGET: f64 = 12.0;
    pub const GROUP_BID: f64 = 0.6;
    pub const SKU: &str = "SKU-1";
}

/// Entity-level values (one per generated row kind)
pub mod entity {
    pub const CAMPAIGN: &str = "广告活动";
    pub const AD_GROUP: &str = "广告组";
    pub const PRODUCT_AD: &str = "商品广告";
    pub const KEYWORD: &str = "关键词";
    pub const NEGATIVE_KEYWORD: &str = "否定关键词";
    pub const PRODUCT_TARGETING: &str = "商品投放";
    pub const NEGATIVE_PRODUCT_TARGETING: &str = "否定商品投放";
}

/// Keyword match-type values
pub mod match_type {
    pub const EXACT: &str = "精准";
    pub const BROAD: &str = "广泛";
    pub const NEGATIVE_EXACT: &str = "否定精准";
    pub const NEGATIVE_PHRASE: &str = "否定词组";
}

/// One typed output cell; `Empty` cells stay blank in every output format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

/// One row of the generated bulk template. Campaign and ad-group IDs reuse
/// the campaign name: the bulk format only requires them to be consistent
/// within the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateRow {
    pub product: String,
    pub entity_level: String,
    pub operation: String,
    pub campaign_id: String,
    pub ad_group_id: String,
    pub portfolio_id: String,
    pub ad_id: String,
    pub keyword_id: String,
    pub product_targeting_id: String,
    pub campaign_name: String,
    pub ad_group_name: String,
    pub start_date: String,
    pub end_date: String,
    pub targeting_type: String,
    pub status: String,
    pub daily_budget: Option<f64>,
    pub sku: String,
    pub ad_group_default_bid: Option<f64>,
    pub bid: Option<f64>,
    pub keyword_text: String,
    pub match_type: String,
    pub bidding_strategy: String,
    pub placement: String,
    pub percentage: Option<f64>,
    pub product_targeting_expression: String,
}

impl TemplateRow {
    fn base(entity_level: &str, campaign: &str) -> Self {
        TemplateRow {
            product: defaults::PRODUCT.to_string(),
            entity_level: entity_level.to_string(),
            operation: defaults::OPERATION.to_string(),
            campaign_id: campaign.to_string(),
            status: defaults::STATUS.to_string(),
            ..TemplateRow::default()
        }
    }

    fn in_group(entity_level: &str, campaign: &str) -> Self {
        TemplateRow {
            ad_group_id: campaign.to_string(),
            ..Self::base(entity_level, campaign)
        }
    }

    pub fn campaign(campaign: &str, budget: f64, start_date: &str) -> Self {
        TemplateRow {
            campaign_name: campaign.to_string(),
            start_date: start_date.to_string(),
            targeting_type: defaults::TARGETING_TYPE.to_string(),
            daily_budget: Some(budget),
            bidding_strategy: defaults::BIDDING_STRATEGY.to_string(),
            ..Self::base(entity::CAMPAIGN, campaign)
        }
    }

    pub fn ad_group(campaign: &str, default_bid: f64) -> Self {
        TemplateRow {
            ad_group_name: campaign.to_string(),
            ad_group_default_bid: Some(default_bid),
            ..Self::in_group(entity::AD_GROUP, campaign)
        }
    }

    pub fn product_ad(campaign: &str, sku: &str) -> Self {
        TemplateRow {
            sku: sku.to_string(),
            ..Self::in_group(entity::PRODUCT_AD, campaign)
        }
    }

    pub fn keyword(campaign: &str, text: &str, match_type: &str, bid: f64) -> Self {
        TemplateRow {
            keyword_text: text.to_string(),
            match_type: match_type.to_string(),
            bid: Some(bid),
            ..Self::in_group(entity::KEYWORD, campaign)
        }
    }

    pub fn negative_keyword(campaign: &str, text: &str, match_type: &str) -> Self {
        TemplateRow {
            keyword_text: text.to_string(),
            match_type: match_type.to_string(),
            ..Self::in_group(entity::NEGATIVE_KEYWORD, campaign)
        }
    }

    pub fn product_targeting(campaign: &str, asin: &str, bid: f64) -> Self {
        TemplateRow {
            bid: Some(bid),
            product_targeting_expression: targeting_expression(asin),
            ..Self::in_group(entity::PRODUCT_TARGETING, campaign)
        }
    }

    pub fn negative_product_targeting(campaign: &str, asin: &str) -> Self {
        TemplateRow {
            product_targeting_expression: targeting_expression(asin),
            ..Self::in_group(entity::NEGATIVE_PRODUCT_TARGETING, campaign)
        }
    }

    /// Cells in `TEMPLATE_COLUMNS` order
    pub fn cells(&self) -> [Cell<'_>; 25] {
        fn text(s: &str) -> Cell<'_> {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s)
            }
        }
        fn number(n: Option<f64>) -> Cell<'static> {
            match n {
                Some(v) => Cell::Number(v),
                None => Cell::Empty,
            }
        }

        [
            text(&self.product),
            text(&self.entity_level),
            text(&self.operation),
            text(&self.campaign_id),
            text(&self.ad_group_id),
            text(&self.portfolio_id),
            text(&self.ad_id),
            text(&self.keyword_id),
            text(&self.product_targeting_id),
            text(&self.campaign_name),
            text(&self.ad_group_name),
            text(&self.start_date),
            text(&self.end_date),
            text(&self.targeting_type),
            text(&self.status),
            number(self.daily_budget),
            text(&self.sku),
            number(self.ad_group_default_bid),
            number(self.bid),
            text(&self.keyword_text),
            text(&self.match_type),
            text(&self.bidding_strategy),
            text(&self.placement),
            number(self.percentage),
            text(&self.product_targeting_expression),
        ]
    }
}

/// Expanded product-targeting expression for an ASIN
pub fn targeting_expression(asin: &str) -> String {
    format!("asin=\"{}\"", asin.trim())
}
