use crate::common::*;

use crate::enums::movement_category::*;

use crate::model::report::daily_series::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    E-mail summary derived from a daily series: the most recent day with its
    per-category totals, plus the window total.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct ReportSummary {
    start_date: NaiveDate,
    end_date: NaiveDate,
    latest_date: NaiveDate,
    latest_counts: Vec<(MovementCategory, u64)>,
    window_total: u64,
}

impl ReportSummary {
    pub fn from_series(series: &DailySeries) -> Self {
        let latest_date: NaiveDate = series
            .latest()
            .map_or(*series.end_date(), |row| *row.date());

        let latest_counts: Vec<(MovementCategory, u64)> = series
            .categories()
            .iter()
            .map(|category| (category.clone(), series.count(latest_date, category)))
            .collect();

        ReportSummary {
            start_date: *series.start_date(),
            end_date: *series.end_date(),
            latest_date,
            latest_counts,
            window_total: series.window_total(),
        }
    }

    #[doc = "Summary `<li>` rows, one per category of the most recent day"]
    pub fn summary_rows_html(&self) -> String {
        self.latest_counts
            .iter()
            .map(|(category, count)| {
                format!(
                    "<li><b>{}:</b> {}</li>",
                    category,
                    count.to_formatted_string(&Locale::pt)
                )
            })
            .collect::<Vec<String>>()
            .join("\n      ")
    }

    #[doc = r#"
        Fills the HTML template placeholders.

        # Placeholders
        - `{{LATEST_DATE}}`, `{{SUMMARY_ROWS}}`, `{{WINDOW_TOTAL}}`
        - `{{CONTENT_ID}}`: inline image reference (`cid:` target)
        - `{{PERIOD_START}}`, `{{PERIOD_END}}`, `{{GENERATED_AT}}`
    "#]
    pub fn render_html(
        &self,
        template: &str,
        content_id: &str,
        generated_at: DateTime<Local>,
    ) -> String {
        template
            .replace("{{LATEST_DATE}}", &format_br_date(self.latest_date))
            .replace("{{SUMMARY_ROWS}}", &self.summary_rows_html())
            .replace(
                "{{WINDOW_TOTAL}}",
                &self.window_total.to_formatted_string(&Locale::pt),
            )
            .replace("{{CONTENT_ID}}", content_id)
            .replace("{{PERIOD_START}}", &format_br_date(self.start_date))
            .replace("{{PERIOD_END}}", &format_br_date(self.end_date))
            .replace("{{GENERATED_AT}}", &format_br_datetime(generated_at))
    }
}
