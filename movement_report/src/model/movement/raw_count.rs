use crate::common::*;

#[doc = r#"
    The movement count exactly as the database column produced it.

    The aggregation query casts to integer, yet any cell type is accepted here:
    whatever arrives is turned into a non-negative integer and never fails the
    pipeline.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum RawCount {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl RawCount {
    #[doc = r#"
        Coerces the raw value to a non-negative count.

        1. Integers: negative values clamp to 0
        2. Floats: truncated toward zero, NaN / infinite / negative become 0
        3. Text: trimmed, parsed as integer then as float, otherwise 0
        4. Missing: 0
    "#]
    pub fn coerce(&self) -> u64 {
        match self {
            RawCount::Int(v) => (*v).max(0) as u64,
            RawCount::Float(v) => Self::coerce_float(*v),
            RawCount::Text(s) => {
                let trimmed: &str = s.trim();
                if let Ok(v) = trimmed.parse::<i64>() {
                    v.max(0) as u64
                } else if let Ok(v) = trimmed.parse::<f64>() {
                    Self::coerce_float(v)
                } else {
                    0
                }
            }
            RawCount::Missing => 0,
        }
    }

    fn coerce_float(v: f64) -> u64 {
        if v.is_finite() && v > 0.0 {
            v.trunc() as u64
        } else {
            0
        }
    }

    #[doc = "Maps a tiberius cell onto a raw count. Non-numeric column types are treated as text or missing."]
    pub fn from_column_data(data: ColumnData<'static>) -> Self {
        match data {
            ColumnData::U8(v) => v.map_or(RawCount::Missing, |v| RawCount::Int(i64::from(v))),
            ColumnData::I16(v) => v.map_or(RawCount::Missing, |v| RawCount::Int(i64::from(v))),
            ColumnData::I32(v) => v.map_or(RawCount::Missing, |v| RawCount::Int(i64::from(v))),
            ColumnData::I64(v) => v.map_or(RawCount::Missing, RawCount::Int),
            ColumnData::F32(v) => v.map_or(RawCount::Missing, |v| RawCount::Float(f64::from(v))),
            ColumnData::F64(v) => v.map_or(RawCount::Missing, RawCount::Float),
            ColumnData::Numeric(v) => v.map_or(RawCount::Missing, |v| RawCount::Float(f64::from(v))),
            ColumnData::String(v) => v.map_or(RawCount::Missing, |v| RawCount::Text(v.into_owned())),
            _ => RawCount::Missing,
        }
    }
}

impl From<u64> for RawCount {
    fn from(v: u64) -> Self {
        RawCount::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}
