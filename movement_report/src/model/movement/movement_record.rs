use crate::common::*;

use crate::model::movement::raw_count::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    One aggregated row of the movement query: (DataMovimento, MeioMovimento, NroMovimento).

    `date` and `category` are required, but they are decoded as optional so
    that a malformed row reaches the series builder and is reported there as
    a validation error.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct MovementRecord {
    date: Option<NaiveDate>,
    category: Option<String>,
    count: RawCount,
}

impl MovementRecord {
    pub fn of(date: NaiveDate, category: &str, count: u64) -> Self {
        MovementRecord::new(Some(date), Some(category.to_string()), RawCount::from(count))
    }
}

impl FromSqlRow for MovementRecord {
    fn from_sql_row(row: Row) -> anyhow::Result<Self> {
        /* 1) DataMovimento */
        let date: Option<NaiveDate> = row
            .try_get::<NaiveDate, usize>(0)
            .context("[MovementRecord->from_sql_row] invalid 'DataMovimento'")?;

        /* 2) MeioMovimento */
        let category: Option<String> = row
            .try_get::<&str, usize>(1)
            .context("[MovementRecord->from_sql_row] invalid 'MeioMovimento'")?
            .map(str::to_string);

        /* 3) NroMovimento - coerced later, any column type accepted */
        let count: RawCount = row
            .into_iter()
            .nth(2)
            .map(RawCount::from_column_data)
            .unwrap_or(RawCount::Missing);

        Ok(MovementRecord::new(date, category, count))
    }
}
