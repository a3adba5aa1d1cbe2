//! Report envelope returned to the invocation harness

use serde::{Deserialize, Serialize};

use super::{Field, HostFacts};

/// Every fact rendered as display text, in report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSheet {
    pub distro: String,
    pub board: String,
    pub kernel: String,
    pub cpu: String,
    pub mem_total: String,
    pub mem_free: String,
    pub mem_available: String,
    pub disk_total: String,
    pub disk_used: String,
    pub disk_free: String,
}

impl From<&HostFacts> for FactSheet {
    fn from(facts: &HostFacts) -> Self {
        let value = |field| facts.value_of(field).unwrap_or_default();
        Self {
            distro: value(Field::Distro),
            board: value(Field::Board),
            kernel: value(Field::Kernel),
            cpu: value(Field::Cpu),
            mem_total: value(Field::MemTotal),
            mem_free: value(Field::MemFree),
            mem_available: value(Field::MemAvailable),
            disk_total: value(Field::DiskTotal),
            disk_used: value(Field::DiskUsed),
            disk_free: value(Field::DiskFree),
        }
    }
}

/// Either a single `"<field>: <value>"` line or the full sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SystemInformation {
    Single(String),
    All(FactSheet),
}

/// `{"system_information": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub system_information: SystemInformation,
}

impl Report {
    pub fn single(field: Field, value: &str) -> Self {
        Self {
            system_information: SystemInformation::Single(format!("{}: {}", field, value)),
        }
    }

    pub fn all(facts: &HostFacts) -> Self {
        Self {
            system_information: SystemInformation::All(FactSheet::from(facts)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiskUsage;

    #[test]
    fn test_single_report_shape() {
        let report = Report::single(Field::MemTotal, "8192 MB");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "system_information": "mem_total: 8192 MB" })
        );
    }

    #[test]
    fn test_full_report_keeps_field_order() {
        let facts = HostFacts {
            distro: String::new(),
            board: "None None, None".to_string(),
            kernel: "6.8.0".to_string(),
            cpu_count: 2,
            mem_total_mb: 2,
            mem_free_mb: 1,
            mem_available_mb: 1,
            disk: DiskUsage::unavailable(),
        };

        let json = serde_json::to_string(&Report::all(&facts)).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"system_information":{"distro":"","board":"None None, None","#,
                r#""kernel":"6.8.0","cpu":"2","mem_total":"2 MB","mem_free":"1 MB","#,
                r#""mem_available":"1 MB","disk_total":"None GB","disk_used":"None GB","#,
                r#""disk_free":"None GB"}}"#
            )
        );
    }
}
