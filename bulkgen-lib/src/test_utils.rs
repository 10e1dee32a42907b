// Test utilities available to both unit and integration tests
// Only compiled when testing

use crate::survey::Survey;

/// Build a survey from string literals. Rows may be shorter than the header
/// row; missing cells read as empty.
#[allow(dead_code)]
pub fn survey_from_rows(headers: &[&str], rows: &[&[&str]]) -> Survey {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Survey::from_rows(headers, rows).expect("test survey must carry a campaign column")
}

/// Header layout used across tests: value columns up front, the positional
/// keyword block at H-Q (indices 7-16), negatives behind it.
#[allow(dead_code)]
pub fn standard_headers() -> Vec<&'static str> {
    vec![
        "广告活动名称",   // 0 (A)
        "CPC",            // 1
        "SKU",            // 2
        "广告组默认竞价", // 3
        "预算",           // 4
        "否定精准",       // 5
        "否定词组",       // 6
        "host精准词",     // 7 (H) - keyword block start
        "tape精准词",     // 8
        "case精准词",     // 9
        "host广泛词",     // 10
        "tape广泛词",     // 11
        "case广泛词",     // 12
        "suzhu精准词",    // 13
        "host ASIN",      // 14
        "tape ASIN",      // 15
        "备用列",         // 16 (Q) - keyword block end
        "否定ASIN",       // 17
        "宿主额外否精准", // 18 (S)
        "宿主额外否词组", // 19 (T)
        "额外列U",        // 20 (U)
        "额外列V",        // 21 (V)
    ]
}
