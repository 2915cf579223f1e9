//! Sidebar profile panel
//!
//! Demographic and financial readout for the selected client. Ages and
//! tenures are stored in the dataset as negative day counts relative to
//! the application date, hence the sign flip.

use serde::{Deserialize, Serialize};

use super::dataset::ClientRecord;

const DAYS_BIRTH: &str = "DAYS_BIRTH";
const DAYS_EMPLOYED: &str = "DAYS_EMPLOYED";
const CNT_CHILDREN: &str = "CNT_CHILDREN";
const AMT_INCOME_TOTAL: &str = "AMT_INCOME_TOTAL";
const AMT_CREDIT: &str = "AMT_CREDIT";
const AMT_ANNUITY: &str = "AMT_ANNUITY";
const AMT_GOODS_PRICE: &str = "AMT_GOODS_PRICE";

/// Profile panel payload, every figure truncated to a whole number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_id: i64,
    pub age_years: i64,
    pub children: i64,
    pub total_income: i64,
    pub employment_years: i64,
    pub credit_amount: i64,
    pub annuity: i64,
    pub goods_price: i64,
}

/// Convert a negative day count into whole years, truncated toward zero
pub fn years_from_days(days: f64) -> i64 {
    (-days / 365.0).trunc() as i64
}

/// Build the profile panel for one client.
///
/// Returns `None` when the client table lacks one of the profile columns;
/// the table is a deployment artifact, so that is a configuration problem,
/// not user input.
pub fn build(record: &ClientRecord<'_>) -> Option<ClientProfile> {
    Some(ClientProfile {
        client_id: record.id,
        age_years: years_from_days(record.get(DAYS_BIRTH)?),
        children: record.get(CNT_CHILDREN)?.trunc() as i64,
        total_income: record.get(AMT_INCOME_TOTAL)?.trunc() as i64,
        employment_years: years_from_days(record.get(DAYS_EMPLOYED)?),
        credit_amount: record.get(AMT_CREDIT)?.trunc() as i64,
        annuity: record.get(AMT_ANNUITY)?.trunc() as i64,
        goods_price: record.get(AMT_GOODS_PRICE)?.trunc() as i64,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::super::dataset::ClientTable;
    use super::*;

    #[test]
    fn years_truncate_toward_zero() {
        // 15000 / 365 = 41.09...
        assert_eq!(years_from_days(-15000.0), 41);
        // Exactly 25 years
        assert_eq!(years_from_days(-9125.0), 25);
        // Less than a year of tenure
        assert_eq!(years_from_days(-200.0), 0);
    }

    #[test]
    fn profile_reads_all_sidebar_fields() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"SK_ID_CURR,DAYS_BIRTH,DAYS_EMPLOYED,CNT_CHILDREN,AMT_INCOME_TOTAL,\
              AMT_CREDIT,AMT_ANNUITY,AMT_GOODS_PRICE,threshold\n\
              100001,-15000,-2000,2,202500.5,450000,25000.5,400000,0.3\n",
        )
        .unwrap();
        file.flush().unwrap();

        let table = ClientTable::load(file.path()).unwrap();
        let record = table.lookup(100001).unwrap();
        let profile = build(&record).unwrap();

        assert_eq!(profile.client_id, 100001);
        assert_eq!(profile.age_years, 41);
        assert_eq!(profile.employment_years, 5);
        assert_eq!(profile.children, 2);
        assert_eq!(profile.total_income, 202500);
        assert_eq!(profile.credit_amount, 450000);
        assert_eq!(profile.annuity, 25000);
        assert_eq!(profile.goods_price, 400000);
    }

    #[test]
    fn missing_profile_column_yields_none() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"SK_ID_CURR,DAYS_BIRTH,threshold\n100001,-15000,0.3\n")
            .unwrap();
        file.flush().unwrap();

        let table = ClientTable::load(file.path()).unwrap();
        let record = table.lookup(100001).unwrap();
        assert!(build(&record).is_none());
    }
}
