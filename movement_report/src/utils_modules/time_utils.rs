use crate::common::*;

#[doc = "조회 시작일: 오늘로부터 `days_back` 일 전"]
pub fn window_start(today: NaiveDate, days_back: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days_back)).unwrap_or(NaiveDate::MIN)
}

#[doc = "dd/mm/YYYY"]
pub fn format_br_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[doc = "dd/mm/YYYY HH:MM"]
pub fn format_br_datetime<Tz>(time: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%d/%m/%Y %H:%M").to_string()
}

#[doc = "차트 x축 라벨 (dd/mm)"]
pub fn format_tick_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

#[doc = "이미지 파일명에 붙는 타임스탬프"]
pub fn file_stamp<Tz>(time: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y%m%d_%H%M%S").to_string()
}

#[doc = "크론 스케줄 기준으로 `now` 이후의 다음 실행 시각"]
pub fn next_run_after<Tz: TimeZone>(
    schedule: &cron::Schedule,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    schedule.after(now).next()
}
