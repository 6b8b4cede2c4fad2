// ---------------------------------------------------------------------------
// Display-name dictionaries
// ---------------------------------------------------------------------------

/// Human-readable name for a COICOP category code. Unmapped codes fall back
/// to the raw code so new upstream categories still render.
pub fn category_label(code: &str) -> &str {
    match code {
        "CP01" => "Food & Non-Alcoholic Beverages",
        "CP041" => "Actual Rentals for Housing",
        _ => code,
    }
}

/// Country name for an ISO3 code, falling back to the code itself.
pub fn country_name(code: &str) -> &str {
    match code {
        "AUT" => "Austria",
        "BEL" => "Belgium",
        "BGR" => "Bulgaria",
        "CAN" => "Canada",
        "CHE" => "Switzerland",
        "CHL" => "Chile",
        "COL" => "Colombia",
        "CRI" => "Costa Rica",
        "CZE" => "Czech Republic",
        "DEU" => "Germany",
        "DNK" => "Denmark",
        "EA20" => "Euro Area (20 countries)",
        "ESP" => "Spain",
        "EST" => "Estonia",
        "EU27_2020" => "European Union (27 countries)",
        "FIN" => "Finland",
        "FRA" => "France",
        "GBR" => "United Kingdom",
        "GRC" => "Greece",
        "HRV" => "Croatia",
        "HUN" => "Hungary",
        "IRL" => "Ireland",
        "ISL" => "Iceland",
        "ITA" => "Italy",
        "JPN" => "Japan",
        "LTU" => "Lithuania",
        "LUX" => "Luxembourg",
        "LVA" => "Latvia",
        "MEX" => "Mexico",
        "NLD" => "Netherlands",
        "NOR" => "Norway",
        "POL" => "Poland",
        "PRT" => "Portugal",
        "SVK" => "Slovak Republic",
        "SVN" => "Slovenia",
        "SWE" => "Sweden",
        "TUR" => "Türkiye",
        "USA" => "United States",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_codes_fall_back_to_the_code() {
        assert_eq!(category_label("CP01"), "Food & Non-Alcoholic Beverages");
        assert_eq!(category_label("CP99"), "CP99");
        assert_eq!(country_name("CAN"), "Canada");
        assert_eq!(country_name("XXX"), "XXX");
    }
}
