use crate::common::*;

/* tiberius Row → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromSqlRow
where
    Self: Sized,
{
    fn from_sql_row(row: Row) -> Result<Self, anyhow::Error>;
}
