use bulkgen_lib::Survey;

// Re-export shared test utilities from src/test_utils.rs
pub use bulkgen_lib::test_utils::{standard_headers, survey_from_rows};

/// A representative C US / B US survey: three campaigns (exact host, broad
/// tape, ASIN host), named negative columns filled.
///
/// Column layout (see `standard_headers`): keyword block at 7-16, plain
/// negatives at 5/6, negative ASINs at 17, host extras at 18/19.
#[allow(dead_code)]
pub fn sample_survey() -> Survey {
    let headers = standard_headers();
    survey_from_rows(
        &headers,
        &[
            &[
                "host-精准-0829", "0.8", "SKU-HOST", "0.7", "15", "free", "diy",
                "host stand", "", "", "", "packing tape", "", "", "B0AAA11111", "", "",
                "B0NEG11111", "case", "bag", "", "",
            ],
            &[
                "tape广泛", "0.6", "SKU-TAPE", "0.6", "12", "cheap", "",
                "phone holder", "", "", "", "strong tape", "", "", "B0BBB22222", "", "",
                "", "", "", "", "",
            ],
            &[
                "host-asin-防御", "0.9", "SKU-CASE", "0.6", "10", "", "",
                "", "", "", "", "clear tape", "", "", "", "", "",
                "", "", "", "", "",
            ],
        ],
    )
}

/// A K EU survey: same keyword block, negatives in the positional columns
/// S/T (broad campaigns) and U/V (host exact campaigns).
#[allow(dead_code)]
pub fn k_eu_survey() -> Survey {
    let headers = vec![
        "广告活动名称",   // 0
        "CPC",            // 1
        "SKU",            // 2
        "广告组默认竞价", // 3
        "预算",           // 4
        "备用1",          // 5
        "备用2",          // 6
        "host精准词",     // 7
        "tape精准词",     // 8
        "case精准词",     // 9
        "host广泛词",     // 10
        "tape广泛词",     // 11
        "case广泛词",     // 12
        "suzhu精准词",    // 13
        "host ASIN",      // 14
        "tape ASIN",      // 15
        "备用3",          // 16
        "备用4",          // 17
        "广泛否定精准",   // 18 (S)
        "广泛否定词组",   // 19 (T)
        "宿主否定精准",   // 20 (U)
        "宿主否定词组",   // 21 (V)
    ];
    survey_from_rows(
        &headers,
        &[
            &[
                "host-精准-0829", "0.8", "SKU-HOST", "0.7", "15", "", "",
                "host stand", "", "", "", "packing tape", "", "", "B0AAA11111", "", "",
                "", "eu cheap", "eu diy", "eu case", "eu bag",
            ],
            &[
                "tape广泛", "0.6", "SKU-TAPE", "0.6", "12", "", "",
                "phone holder", "", "", "", "strong tape", "", "", "B0BBB22222", "", "",
                "", "eu free", "", "", "",
            ],
            &[
                "host-asin-防御", "0.9", "SKU-CASE", "0.6", "10", "", "",
                "", "", "", "", "clear tape", "", "", "", "", "",
                "", "", "", "", "",
            ],
        ],
    )
}
