use crate::common::*;

use crate::enums::{movement_category::*, report_error::*};

use crate::model::movement::movement_record::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct DailyRow {
    date: NaiveDate,
    counts: BTreeMap<MovementCategory, u64>,
}

impl DailyRow {
    pub fn count(&self, category: &MovementCategory) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }
}

#[doc = r#"
    Dense, gap-filled daily matrix of movement counts (date x category).

    Every calendar day of `[start_date, end_date]` appears exactly once in
    ascending order, and every row carries the same category columns: the two
    known media plus whatever extra labels the input contained.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct DailySeries {
    start_date: NaiveDate,
    end_date: NaiveDate,
    categories: Vec<MovementCategory>,
    rows: Vec<DailyRow>,
}

impl DailySeries {
    #[doc = r#"
        Builds the dense series from unordered movement records.

        1. Validates each record (date and category are required)
        2. Sums counts per (date, category) after coercing them to non-negative integers
        3. Always includes the known categories as columns, zero-filled
        4. Emits one row per day from `start_date` (clamped to `today`) through `today`,
           filling absent dates and categories with 0

        Records dated outside the range are dropped, but an unknown category they
        carry still becomes a column.

        # Arguments
        * `records`    - Raw rows from the data source
        * `start_date` - First day of the window
        * `today`      - Last day of the window, inclusive

        # Returns
        * `Result<DailySeries, ReportError>` - `ReportError::Validation` on a malformed record
    "#]
    pub fn build(
        records: &[MovementRecord],
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, ReportError> {
        let start_date: NaiveDate = start_date.min(today);

        let mut categories: BTreeSet<MovementCategory> =
            MovementCategory::KNOWN.into_iter().collect();
        let mut grouped: BTreeMap<NaiveDate, BTreeMap<MovementCategory, u64>> = BTreeMap::new();

        for (row, record) in records.iter().enumerate() {
            let date: NaiveDate = record.date().ok_or_else(|| ReportError::Validation {
                row,
                reason: "missing date".to_string(),
            })?;

            let label: &str = record
                .category()
                .as_deref()
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .ok_or_else(|| ReportError::Validation {
                    row,
                    reason: "missing category".to_string(),
                })?;

            let category: MovementCategory = MovementCategory::from_label(label);
            categories.insert(category.clone());

            if date < start_date || date > today {
                continue;
            }

            let total: &mut u64 = grouped.entry(date).or_default().entry(category).or_insert(0);
            *total = total.saturating_add(record.count().coerce());
        }

        let rows: Vec<DailyRow> = start_date
            .iter_days()
            .take_while(|date| *date <= today)
            .map(|date| {
                let day_counts: Option<&BTreeMap<MovementCategory, u64>> = grouped.get(&date);
                let counts: BTreeMap<MovementCategory, u64> = categories
                    .iter()
                    .map(|category| {
                        let count: u64 = day_counts
                            .and_then(|m| m.get(category))
                            .copied()
                            .unwrap_or(0);
                        (category.clone(), count)
                    })
                    .collect();

                DailyRow { date, counts }
            })
            .collect();

        Ok(DailySeries {
            start_date,
            end_date: today,
            categories: categories.into_iter().collect(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|row| row.date).collect()
    }

    #[doc = "Column of a single category, one value per date"]
    pub fn values_for(&self, category: &MovementCategory) -> Vec<u64> {
        self.rows.iter().map(|row| row.count(category)).collect()
    }

    pub fn latest(&self) -> Option<&DailyRow> {
        self.rows.last()
    }

    pub fn count(&self, date: NaiveDate, category: &MovementCategory) -> u64 {
        self.rows
            .iter()
            .find(|row| row.date == date)
            .map_or(0, |row| row.count(category))
    }

    pub fn window_total(&self) -> u64 {
        self.rows
            .iter()
            .map(DailyRow::total)
            .fold(0u64, |acc, total| acc.saturating_add(total))
    }

    pub fn max_value(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|row| row.counts.values().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::movement::raw_count::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn duplicate_rows_are_summed_and_gaps_filled() {
        let records = vec![
            MovementRecord::of(d(2024, 1, 1), "Computador", 3),
            MovementRecord::of(d(2024, 1, 1), "Computador", 2),
            MovementRecord::of(d(2024, 1, 2), "Coletor", 5),
        ];

        let series = DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 2)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.count(d(2024, 1, 1), &MovementCategory::Computer), 5);
        assert_eq!(series.count(d(2024, 1, 1), &MovementCategory::Collector), 0);
        assert_eq!(series.count(d(2024, 1, 2), &MovementCategory::Computer), 0);
        assert_eq!(series.count(d(2024, 1, 2), &MovementCategory::Collector), 5);
    }

    #[test]
    fn empty_input_with_start_equal_today_yields_one_zero_row() {
        let today = d(2024, 3, 10);
        let series = DailySeries::build(&[], today, today).unwrap();

        assert_eq!(series.len(), 1);
        let row = series.latest().unwrap();
        assert_eq!(*row.date(), today);
        assert_eq!(row.count(&MovementCategory::Computer), 0);
        assert_eq!(row.count(&MovementCategory::Collector), 0);
        assert_eq!(row.counts().len(), 2);
    }

    #[test]
    fn empty_input_covers_whole_window_with_fixed_columns() {
        let series = DailySeries::build(&[], d(2024, 2, 20), d(2024, 3, 5)).unwrap();

        /* leap year: 20..29 Feb + 1..5 Mar */
        assert_eq!(series.len(), 15);
        assert_eq!(series.categories(), &MovementCategory::KNOWN.to_vec());
        assert!(series.rows().iter().all(|row| row.total() == 0));
    }

    #[test]
    fn dates_are_contiguous_ascending_and_unique() {
        let records = vec![
            MovementRecord::of(d(2024, 1, 9), "Coletor", 1),
            MovementRecord::of(d(2024, 1, 2), "Computador", 1),
            MovementRecord::of(d(2024, 1, 5), "Coletor", 1),
        ];
        let series = DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 10)).unwrap();

        let dates = series.dates();
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], d(2024, 1, 1));
        assert_eq!(*dates.last().unwrap(), d(2024, 1, 10));
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    #[test]
    fn per_date_total_matches_input_sum() {
        let day = d(2024, 5, 3);
        let records = vec![
            MovementRecord::of(day, "Computador", 10),
            MovementRecord::of(day, "Coletor", 7),
            MovementRecord::of(day, "Computador", 1),
            MovementRecord::of(day, "Manual", 4),
            MovementRecord::of(d(2024, 5, 4), "Coletor", 100),
        ];
        let series = DailySeries::build(&records, d(2024, 5, 1), d(2024, 5, 4)).unwrap();

        let row = series.rows().iter().find(|r| *r.date() == day).unwrap();
        assert_eq!(row.total(), 22);
        assert_eq!(series.window_total(), 122);
    }

    #[test]
    fn unknown_category_becomes_extra_column() {
        let records = vec![MovementRecord::of(d(2024, 1, 2), "Integracao", 4)];
        let series = DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 2)).unwrap();

        let other = MovementCategory::Other("Integracao".to_string());
        assert_eq!(series.categories().len(), 3);
        assert_eq!(series.categories()[2], other);
        assert_eq!(series.values_for(&other), vec![0, 4]);
        assert!(series.rows().iter().all(|row| row.counts().len() == 3));
    }

    #[test]
    fn negative_and_non_numeric_counts_become_zero() {
        let day = d(2024, 1, 1);
        let records = vec![
            MovementRecord::new(Some(day), Some("Computador".to_string()), RawCount::Int(-5)),
            MovementRecord::new(Some(day), Some("Computador".to_string()), RawCount::Text("x".to_string())),
            MovementRecord::new(Some(day), Some("Coletor".to_string()), RawCount::Float(f64::NAN)),
            MovementRecord::new(Some(day), Some("Coletor".to_string()), RawCount::Missing),
            MovementRecord::new(Some(day), Some("Coletor".to_string()), RawCount::Text("8".to_string())),
        ];
        let series = DailySeries::build(&records, day, day).unwrap();

        assert_eq!(series.count(day, &MovementCategory::Computer), 0);
        assert_eq!(series.count(day, &MovementCategory::Collector), 8);
    }

    #[test]
    fn future_start_collapses_to_today() {
        let today = d(2024, 6, 1);
        let records = vec![MovementRecord::of(today, "Coletor", 2)];
        let series = DailySeries::build(&records, d(2024, 7, 1), today).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(*series.start_date(), today);
        assert_eq!(series.count(today, &MovementCategory::Collector), 2);
    }

    #[test]
    fn out_of_range_records_are_dropped() {
        let records = vec![
            MovementRecord::of(d(2023, 12, 31), "Computador", 9),
            MovementRecord::of(d(2024, 1, 3), "Computador", 9),
            MovementRecord::of(d(2024, 1, 1), "Computador", 1),
        ];
        let series = DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 2)).unwrap();

        assert_eq!(series.window_total(), 1);
    }

    #[test]
    fn missing_date_is_a_validation_error() {
        let records = vec![
            MovementRecord::of(d(2024, 1, 1), "Computador", 1),
            MovementRecord::new(None, Some("Coletor".to_string()), RawCount::Int(1)),
        ];

        match DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 1)) {
            Err(ReportError::Validation { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn blank_category_is_a_validation_error() {
        let records = vec![MovementRecord::new(
            Some(d(2024, 1, 1)),
            Some("   ".to_string()),
            RawCount::Int(1),
        )];

        assert!(matches!(
            DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 1)),
            Err(ReportError::Validation { row: 0, .. })
        ));
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let day = d(2024, 1, 1);
        let records = vec![
            MovementRecord::new(Some(day), Some("Computador".to_string()), RawCount::Float(1.0e19)),
            MovementRecord::new(Some(day), Some("Coletor".to_string()), RawCount::Float(1.0e19)),
            MovementRecord::new(Some(d(2024, 1, 2)), Some("Coletor".to_string()), RawCount::Int(i64::MAX)),
        ];
        let series = DailySeries::build(&records, day, d(2024, 1, 2)).unwrap();

        assert_eq!(series.latest().unwrap().total(), i64::MAX as u64);
        assert_eq!(series.rows()[0].total(), u64::MAX);
        assert_eq!(series.window_total(), u64::MAX);
    }

    #[test]
    fn max_value_scans_every_column() {
        let records = vec![
            MovementRecord::of(d(2024, 1, 1), "Computador", 3),
            MovementRecord::of(d(2024, 1, 2), "Coletor", 11),
        ];
        let series = DailySeries::build(&records, d(2024, 1, 1), d(2024, 1, 2)).unwrap();
        assert_eq!(series.max_value(), 11);
    }
}
