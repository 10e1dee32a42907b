use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::collections::HashMap;
use thiserror::Error;

use crate::template::defaults;
use crate::utils::{column_letter, normalize_string};
use crate::write_error_to_log;

/// Required column holding the campaign name
pub const CAMPAIGN_NAME_COLUMN: &str = "广告活动名称";
/// Optional per-campaign value columns
pub const CPC_COLUMN: &str = "CPC";
pub const SKU_COLUMN: &str = "SKU";
pub const GROUP_BID_COLUMN: &str = "广告组默认竞价";
pub const BUDGET_COLUMN: &str = "预算";

/// Keyword columns occupy a fixed positional range: spreadsheet columns H through Q
pub const KEYWORD_COLUMN_START: usize = 7;
pub const KEYWORD_COLUMN_END: usize = 17; // exclusive

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("required column '{0}' was not found in the survey sheet")]
    MissingColumn(String),

    #[error("the survey sheet contains no data rows")]
    EmptySheet,

    #[error(
        "duplicate keywords detected, generation aborted:\n{}\nPlease remove the duplicates and retry.",
        format_duplicate_entries(.0)
    )]
    DuplicateKeywords(Vec<DuplicateEntry>),
}

/// One duplicated value inside a keyword or negative-keyword column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// Spreadsheet letter of the offending column (H, Q, AA, ...)
    pub column_letter: String,
    /// Header of the offending column
    pub header: String,
    /// The duplicated value
    pub value: String,
    /// How many times the value appears in the column
    pub count: usize,
}

fn format_duplicate_entries(entries: &[DuplicateEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "  • column {} ({}): '{}' appears {} times",
                entry.column_letter, entry.header, entry.value, entry.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-campaign bid/budget values taken from the survey (or defaults)
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignValues {
    pub cpc: f64,
    pub sku: String,
    pub group_bid: f64,
    pub budget: f64,
}

impl CampaignValues {
    /// All-default values with the market's CPC
    pub fn with_default_cpc(cpc: f64) -> Self {
        CampaignValues {
            cpc,
            sku: defaults::SKU.to_string(),
            group_bid: defaults::GROUP_BID,
            budget: defaults::DAILY_BUDGET,
        }
    }
}

/// A survey sheet loaded into memory: normalized headers plus data rows as
/// trimmed strings. Fully empty rows are dropped at load time.
#[derive(Debug, Clone)]
pub struct Survey {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Survey {
    /// Read a survey from an `.xlsx` file. Uses the first sheet unless a
    /// sheet name is given.
    pub fn from_path(path: &str, sheet_name: Option<&str>) -> Result<Self> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).with_context(|| format!("cannot read survey file '{}'", path))?;

        let range = match sheet_name {
            Some(name) => workbook
                .worksheet_range(name)
                .with_context(|| format!("error reading sheet '{}'", name))?,
            None => {
                let names = workbook.sheet_names();
                let first = names
                    .first()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("the workbook contains no sheets"))?;
                workbook
                    .worksheet_range(&first)
                    .with_context(|| format!("error reading sheet '{}'", first))?
            }
        };

        let mut headers: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (row_index, row) in range.rows().enumerate() {
            if row_index == 0 {
                // First row contains headers
                headers = row
                    .iter()
                    .map(|cell| normalize_string(&cell.to_string()))
                    .collect();
                continue;
            }

            // Skip empty rows
            let is_empty_row = row.iter().all(|cell| match cell {
                Data::Empty => true,
                Data::String(s) => s.trim().is_empty(),
                Data::Error(_) => true,
                _ => false,
            });
            if is_empty_row {
                continue;
            }

            rows.push(row.iter().map(cell_to_string).collect());
        }

        if headers.is_empty() || rows.is_empty() {
            return Err(SurveyError::EmptySheet.into());
        }

        Self::from_rows(headers, rows)
    }

    /// Build a survey from already-materialized rows. Headers are normalized
    /// the same way as when reading from a file.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let headers: Vec<String> = headers.iter().map(|h| normalize_string(h)).collect();

        let survey = Survey { headers, rows };
        if survey.column_index(CAMPAIGN_NAME_COLUMN).is_none() {
            return Err(SurveyError::MissingColumn(CAMPAIGN_NAME_COLUMN.to_string()).into());
        }
        Ok(survey)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// (data rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Case-insensitive header lookup
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_string(name).to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase() == wanted)
    }

    fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// All non-empty values of a positional column, top to bottom
    pub fn column_values(&self, column: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect()
    }

    /// All non-empty values of a named column; an absent column yields nothing
    pub fn named_column_values(&self, name: &str) -> Vec<String> {
        match self.column_index(name) {
            Some(idx) => self.column_values(idx),
            None => Vec::new(),
        }
    }

    /// The positional keyword columns present in this sheet (H through Q)
    pub fn keyword_columns(&self) -> Vec<usize> {
        (KEYWORD_COLUMN_START..KEYWORD_COLUMN_END)
            .filter(|&idx| idx < self.headers.len())
            .collect()
    }

    /// Unique non-empty campaign names in first-appearance order
    pub fn campaigns(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        if let Some(idx) = self.column_index(CAMPAIGN_NAME_COLUMN) {
            for row in 0..self.rows.len() {
                let name = self.cell(row, idx).trim();
                if !name.is_empty() && !seen.iter().any(|s| s == name) {
                    seen.push(name.to_string());
                }
            }
        }
        seen
    }

    /// Map every campaign to its CPC/SKU/bid/budget values, taken from the
    /// first survey row carrying the campaign name. Missing columns or blank
    /// cells fall back to the defaults and record a warning.
    pub fn campaign_values(
        &self,
        default_cpc: f64,
    ) -> (HashMap<String, CampaignValues>, Vec<String>) {
        let mut warnings: Vec<String> = Vec::new();
        let mut values: HashMap<String, CampaignValues> = HashMap::new();

        let required = [CPC_COLUMN, SKU_COLUMN, GROUP_BID_COLUMN, BUDGET_COLUMN];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| self.column_index(name).is_none())
            .collect();

        if !missing.is_empty() {
            warnings.push(format!(
                "missing columns {:?}, defaults will be used for every campaign",
                missing
            ));
            for campaign in self.campaigns() {
                values.insert(campaign, CampaignValues::with_default_cpc(default_cpc));
            }
            return (values, warnings);
        }

        let campaign_idx = match self.column_index(CAMPAIGN_NAME_COLUMN) {
            Some(idx) => idx,
            None => return (values, warnings),
        };
        let cpc_idx = self.column_index(CPC_COLUMN).unwrap_or_default();
        let sku_idx = self.column_index(SKU_COLUMN).unwrap_or_default();
        let bid_idx = self.column_index(GROUP_BID_COLUMN).unwrap_or_default();
        let budget_idx = self.column_index(BUDGET_COLUMN).unwrap_or_default();

        for row in 0..self.rows.len() {
            let campaign = self.cell(row, campaign_idx).trim().to_string();
            if campaign.is_empty() || values.contains_key(&campaign) {
                // Only the first row of each campaign supplies values
                continue;
            }

            let mut campaign_values = CampaignValues::with_default_cpc(default_cpc);

            match self.cell(row, cpc_idx).parse::<f64>() {
                Ok(cpc) => campaign_values.cpc = cpc,
                Err(_) => warnings.push(format!(
                    "campaign '{}' has no usable CPC, using default {}",
                    campaign, default_cpc
                )),
            }
            let sku = self.cell(row, sku_idx).trim();
            if sku.is_empty() {
                warnings.push(format!(
                    "campaign '{}' has no SKU, using default {}",
                    campaign,
                    defaults::SKU
                ));
            } else {
                campaign_values.sku = sku.to_string();
            }
            match self.cell(row, bid_idx).parse::<f64>() {
                Ok(bid) => campaign_values.group_bid = bid,
                Err(_) => warnings.push(format!(
                    "campaign '{}' has no usable ad-group default bid, using default {}",
                    campaign,
                    defaults::GROUP_BID
                )),
            }
            match self.cell(row, budget_idx).parse::<f64>() {
                Ok(budget) => campaign_values.budget = budget,
                Err(_) => warnings.push(format!(
                    "campaign '{}' has no usable budget, using default {}",
                    campaign,
                    defaults::DAILY_BUDGET
                )),
            }

            values.insert(campaign, campaign_values);
        }

        (values, warnings)
    }

    /// Scan one column for duplicated non-empty values. Every duplicated
    /// value yields one entry carrying its total occurrence count.
    pub fn find_column_duplicates(&self, column: usize) -> Vec<DuplicateEntry> {
        let values = self.column_values(column);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in &values {
            *counts.entry(value.as_str()).or_default() += 1;
        }

        let header = self
            .headers
            .get(column)
            .cloned()
            .unwrap_or_default();

        // Report in first-appearance order, one entry per duplicated value
        let mut reported: Vec<DuplicateEntry> = Vec::new();
        for value in &values {
            let count = counts[value.as_str()];
            if count > 1 && !reported.iter().any(|e| &e.value == value) {
                reported.push(DuplicateEntry {
                    column_letter: column_letter(column),
                    header: header.clone(),
                    value: value.clone(),
                    count,
                });
            }
        }
        reported
    }

    /// Scan the given columns and collect every duplicate found
    pub fn find_duplicates(&self, columns: &[usize]) -> Vec<DuplicateEntry> {
        columns
            .iter()
            .flat_map(|&column| self.find_column_duplicates(column))
            .collect()
    }

    /// Fail-closed duplicate gate: any duplicate in the given columns aborts
    /// generation. The full report is appended to the error log.
    pub fn ensure_no_duplicates(&self, columns: &[usize]) -> Result<(), SurveyError> {
        let duplicates = self.find_duplicates(columns);
        if duplicates.is_empty() {
            Ok(())
        } else {
            write_error_to_log(
                "Keyword Duplicate Check Error",
                &format_duplicate_entries(&duplicates),
            );
            Err(SurveyError::DuplicateKeywords(duplicates))
        }
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        // Excel stores every number as a float; render whole values without ".0"
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
