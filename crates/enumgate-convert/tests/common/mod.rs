//! Enumerations shared by the integration tests.

use enumgate_convert::{ClosedEnum, InvalidMember};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl ClosedEnum for Status {
    const NAME: &'static str = "Status";

    fn permitted_values() -> Vec<Value> {
        Self::ALL.iter().map(|status| Value::from(status.as_str())).collect()
    }

    fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember> {
        Self::ALL
            .into_iter()
            .find(|status| raw.as_str() == Some(status.as_str()))
            .ok_or_else(|| InvalidMember::new(Self::NAME, raw))
    }
}

/// Integer-valued enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low = 1,
    Normal = 2,
    Urgent = 3,
}

impl ClosedEnum for Priority {
    const NAME: &'static str = "Priority";

    fn permitted_values() -> Vec<Value> {
        vec![Value::from(1), Value::from(2), Value::from(3)]
    }

    fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember> {
        match raw.as_u64() {
            Some(1) => Ok(Self::Low),
            Some(2) => Ok(Self::Normal),
            Some(3) => Ok(Self::Urgent),
            _ => Err(InvalidMember::new(Self::NAME, raw)),
        }
    }
}

/// Descriptor whose permitted set and constructor disagree on `"ghost"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistent {
    Solid,
}

impl ClosedEnum for Inconsistent {
    const NAME: &'static str = "Inconsistent";

    fn permitted_values() -> Vec<Value> {
        vec![Value::from("solid"), Value::from("ghost")]
    }

    fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember> {
        match raw.as_str() {
            Some("solid") => Ok(Self::Solid),
            _ => Err(InvalidMember::new(Self::NAME, raw)),
        }
    }
}

