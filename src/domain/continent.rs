//! Static ISO-3166 country to continent mapping.
//!
//! The reference tables are embedded in the implementation; no lookup ever
//! leaves the process. An unrecognized country code resolves to `None` so an
//! odd provider reply degrades a single response field instead of failing the
//! whole request.

/// Resolves a two-letter country code to a human-readable continent name.
///
/// Absent or empty input returns `None` without attempting a lookup. Codes
/// are matched case-insensitively.
pub fn continent_for(country_iso2: Option<&str>) -> Option<&'static str> {
    let code = country_iso2?.trim();
    if code.is_empty() {
        return None;
    }

    continent_name(continent_code(&code.to_ascii_uppercase())?)
}

/// Maps an ISO-3166 alpha-2 country code to a two-letter continent code.
fn continent_code(iso2: &str) -> Option<&'static str> {
    let code = match iso2 {
        "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CM" | "CV" | "CF" | "TD" | "KM" | "CG"
        | "CD" | "CI" | "DJ" | "EG" | "GQ" | "ER" | "ET" | "GA" | "GM" | "GH" | "GN" | "GW"
        | "KE" | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT" | "MA" | "MZ"
        | "NA" | "NE" | "NG" | "RE" | "RW" | "SH" | "ST" | "SN" | "SC" | "SL" | "SO" | "ZA"
        | "SS" | "SD" | "SZ" | "TZ" | "TG" | "TN" | "UG" | "EH" | "ZM" | "ZW" => "AF",

        "AQ" | "BV" | "GS" | "HM" | "TF" => "AN",

        "AF" | "AM" | "AZ" | "BH" | "BD" | "BT" | "IO" | "BN" | "KH" | "CN" | "CX" | "CC"
        | "CY" | "GE" | "HK" | "IN" | "ID" | "IR" | "IQ" | "IL" | "JP" | "JO" | "KZ" | "KP"
        | "KR" | "KW" | "KG" | "LA" | "LB" | "MO" | "MY" | "MV" | "MN" | "MM" | "NP" | "OM"
        | "PK" | "PS" | "PH" | "QA" | "SA" | "SG" | "LK" | "SY" | "TW" | "TJ" | "TH" | "TL"
        | "TR" | "TM" | "AE" | "UZ" | "VN" | "YE" => "AS",

        "AX" | "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CZ" | "DK" | "EE"
        | "FO" | "FI" | "FR" | "DE" | "GI" | "GR" | "GG" | "VA" | "HU" | "IS" | "IE" | "IM"
        | "IT" | "JE" | "LV" | "LI" | "LT" | "LU" | "MT" | "MD" | "MC" | "ME" | "NL" | "MK"
        | "NO" | "PL" | "PT" | "RO" | "RU" | "SM" | "RS" | "SK" | "SI" | "ES" | "SJ" | "SE"
        | "CH" | "UA" | "GB" => "EU",

        "AI" | "AG" | "AW" | "BS" | "BB" | "BZ" | "BM" | "BQ" | "CA" | "KY" | "CR" | "CU"
        | "CW" | "DM" | "DO" | "SV" | "GL" | "GD" | "GP" | "GT" | "HT" | "HN" | "JM" | "MQ"
        | "MX" | "MS" | "NI" | "PA" | "PR" | "BL" | "KN" | "LC" | "MF" | "PM" | "VC" | "SX"
        | "TT" | "TC" | "US" | "UM" | "VG" | "VI" => "NA",

        "AS" | "AU" | "CK" | "FJ" | "PF" | "GU" | "KI" | "MH" | "FM" | "NR" | "NC" | "NZ"
        | "NU" | "NF" | "MP" | "PW" | "PG" | "PN" | "WS" | "SB" | "TK" | "TO" | "TV" | "VU"
        | "WF" => "OC",

        "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "FK" | "GF" | "GY" | "PY" | "PE" | "SR"
        | "UY" | "VE" => "SA",

        _ => return None,
    };

    Some(code)
}

/// Maps a two-letter continent code to its human-readable name.
fn continent_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "AF" => "Africa",
        "AN" => "Antarctica",
        "AS" => "Asia",
        "EU" => "Europe",
        "NA" => "North America",
        "OC" => "Oceania",
        "SA" => "South America",
        _ => return None,
    };

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve() {
        assert_eq!(continent_for(Some("CA")), Some("North America"));
        assert_eq!(continent_for(Some("FR")), Some("Europe"));
        assert_eq!(continent_for(Some("JP")), Some("Asia"));
        assert_eq!(continent_for(Some("BR")), Some("South America"));
        assert_eq!(continent_for(Some("NG")), Some("Africa"));
        assert_eq!(continent_for(Some("NZ")), Some("Oceania"));
        assert_eq!(continent_for(Some("AQ")), Some("Antarctica"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(continent_for(Some("ca")), Some("North America"));
        assert_eq!(continent_for(Some(" us ")), Some("North America"));
    }

    #[test]
    fn test_country_and_continent_codes_do_not_collide() {
        // "AS" is American Samoa, not the Asia continent code.
        assert_eq!(continent_for(Some("AS")), Some("Oceania"));
        // "NA" is Namibia, not the North America continent code.
        assert_eq!(continent_for(Some("NA")), Some("Africa"));
    }

    #[test]
    fn test_unrecognized_code_degrades_to_none() {
        assert_eq!(continent_for(Some("XX")), None);
        assert_eq!(continent_for(Some("ZZZ")), None);
    }

    #[test]
    fn test_absent_or_empty_input_skips_lookup() {
        assert_eq!(continent_for(None), None);
        assert_eq!(continent_for(Some("")), None);
        assert_eq!(continent_for(Some("   ")), None);
    }
}
