//! Query operations over a single identifier string
//!
//! All queries are pure and independent; the resolver holds nothing but
//! the immutable region table, so one instance can be shared across
//! threads by reference.

use chrono::NaiveDate;

use crate::error::IdCardError;
use crate::models::{Gender, IdProfile};
use crate::region_names::RegionTable;

/// Region code occupies the first four characters
const REGION_LEN: usize = 4;
/// Birth date field, `YYYYMMDD`
const BIRTH_START: usize = 6;
const BIRTH_END: usize = 14;
const BIRTH_FORMAT: &str = "%Y%m%d";
/// Zero-based offset of the gender sequence digit
const GENDER_INDEX: usize = 16;

/// Decodes region, birth date and gender from identity numbers.
///
/// Identifiers are ASCII digit strings such as `110101199003076499`.
#[derive(Debug, Clone)]
pub struct IdCardResolver {
    regions: RegionTable,
}

impl IdCardResolver {
    pub fn new(regions: RegionTable) -> Self {
        IdCardResolver { regions }
    }

    /// Resolver backed by the table bundled into the crate
    pub fn bundled() -> Self {
        Self::new(RegionTable::bundled())
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Region display name for the identifier's 4-digit prefix.
    ///
    /// A code missing from the table returns `Ok("")` rather than an
    /// error; the table is best-effort and may be incomplete.
    pub fn region(&self, id: &str) -> Result<&str, IdCardError> {
        let code = id.get(..REGION_LEN).ok_or(IdCardError::TooShort {
            field: "region code",
            needed: REGION_LEN,
            got: id.len(),
        })?;
        Ok(self.regions.get(code.trim()).unwrap_or(""))
    }

    /// Birth date from characters 7-14, interpreted as `YYYYMMDD`.
    pub fn birth_date(&self, id: &str) -> Result<NaiveDate, IdCardError> {
        let field = id.get(BIRTH_START..BIRTH_END).ok_or(IdCardError::TooShort {
            field: "birth date",
            needed: BIRTH_END,
            got: id.len(),
        })?;
        NaiveDate::parse_from_str(field, BIRTH_FORMAT).map_err(|source| IdCardError::BirthDate {
            field: field.to_string(),
            source,
        })
    }

    /// Gender from the parity of the 17th character.
    pub fn gender(&self, id: &str) -> Result<Gender, IdCardError> {
        let ch = id.chars().nth(GENDER_INDEX).ok_or_else(|| IdCardError::TooShort {
            field: "gender digit",
            needed: GENDER_INDEX + 1,
            got: id.chars().count(),
        })?;
        let digit = ch.to_digit(10).ok_or(IdCardError::GenderDigit { found: ch })?;
        Ok(Gender::from_sequence_digit(digit))
    }

    /// All three attributes in one call.
    pub fn resolve(&self, id: &str) -> Result<IdProfile, IdCardError> {
        Ok(IdProfile {
            region: self.region(id)?.to_string(),
            birth_date: self.birth_date(id)?,
            gender: self.gender(id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ID: &str = "110101199003076499";

    fn resolver() -> IdCardResolver {
        IdCardResolver::new(RegionTable::from_tsv(
            "1101\t北京市市辖区\n4403\t广东省深圳市\n",
        ))
    }

    #[test]
    fn test_region_known_code() {
        assert_eq!(resolver().region(SAMPLE_ID).unwrap(), "北京市市辖区");
    }

    #[test]
    fn test_region_unknown_code_is_empty() {
        assert_eq!(resolver().region("999988199001011234").unwrap(), "");
    }

    #[test]
    fn test_region_too_short() {
        let err = resolver().region("110").unwrap_err();
        assert!(matches!(
            err,
            IdCardError::TooShort { needed: 4, got: 3, .. }
        ));
    }

    #[test]
    fn test_birth_date() {
        assert_eq!(
            resolver().birth_date(SAMPLE_ID).unwrap(),
            NaiveDate::from_ymd_opt(1990, 3, 7).unwrap()
        );
    }

    #[test]
    fn test_birth_date_invalid_month() {
        let err = resolver().birth_date("110101199013076499").unwrap_err();
        assert!(matches!(err, IdCardError::BirthDate { .. }));
    }

    #[test]
    fn test_birth_date_non_numeric() {
        let err = resolver().birth_date("110101abcd0307x499").unwrap_err();
        assert!(matches!(err, IdCardError::BirthDate { .. }));
    }

    #[test]
    fn test_birth_date_too_short() {
        let err = resolver().birth_date("1101011990").unwrap_err();
        assert!(matches!(err, IdCardError::TooShort { needed: 14, .. }));
    }

    #[test]
    fn test_gender_parity() {
        // 17th character varies, everything else fixed
        for (digit, expected) in [
            ('0', Gender::Female),
            ('2', Gender::Female),
            ('4', Gender::Female),
            ('6', Gender::Female),
            ('8', Gender::Female),
            ('1', Gender::Male),
            ('3', Gender::Male),
            ('5', Gender::Male),
            ('7', Gender::Male),
            ('9', Gender::Male),
        ] {
            let id = format!("1101011990030764{}9", digit);
            assert_eq!(resolver().gender(&id).unwrap(), expected);
        }
    }

    #[test]
    fn test_gender_sample_id() {
        assert_eq!(resolver().gender(SAMPLE_ID).unwrap(), Gender::Male);
    }

    #[test]
    fn test_gender_non_digit() {
        let err = resolver().gender("1101011990030764X9").unwrap_err();
        assert!(matches!(err, IdCardError::GenderDigit { found: 'X' }));
    }

    #[test]
    fn test_gender_too_short() {
        let err = resolver().gender("1101011990030764").unwrap_err();
        assert!(matches!(err, IdCardError::TooShort { needed: 17, got: 16, .. }));
    }

    #[test]
    fn test_resolve_full_profile() {
        let profile = resolver().resolve(SAMPLE_ID).unwrap();
        assert_eq!(profile.region, "北京市市辖区");
        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1990, 3, 7).unwrap()
        );
        assert_eq!(profile.gender, Gender::Male);
    }

    #[test]
    fn test_queries_never_fail_on_valid_ids() {
        let r = resolver();
        for id in ["110101199003076499", "440301198512240021", "999999200102030456"] {
            r.region(id).unwrap();
            r.birth_date(id).unwrap();
            r.gender(id).unwrap();
        }
    }

    #[test]
    fn test_bundled_resolver() {
        let r = IdCardResolver::bundled();
        assert_eq!(r.region(SAMPLE_ID).unwrap(), "北京市市辖区");
        assert_eq!(r.region("440301198512240021").unwrap(), "广东省深圳市");
    }
}
