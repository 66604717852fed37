use std::fmt;

pub const COMPUTER_LABEL: &str = "Computador";
pub const COLLECTOR_LABEL: &str = "Coletor";

#[doc = r#"
    How a movement was captured (MeioMovimento).

    The two known media are always present as series columns. Any other label
    produced by the database is carried as `Other` and only shows up when the
    data contains it. Variant order is the column order.
"#]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovementCategory {
    Computer,
    Collector,
    Other(String),
}

impl MovementCategory {
    pub const KNOWN: [MovementCategory; 2] = [MovementCategory::Computer, MovementCategory::Collector];

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            COMPUTER_LABEL => MovementCategory::Computer,
            COLLECTOR_LABEL => MovementCategory::Collector,
            other => MovementCategory::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MovementCategory::Computer => COMPUTER_LABEL,
            MovementCategory::Collector => COLLECTOR_LABEL,
            MovementCategory::Other(label) => label.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MovementCategory::Other(_))
    }
}

impl fmt::Display for MovementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
