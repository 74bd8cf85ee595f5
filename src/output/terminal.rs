//! Terminal output utilities.

use crate::models::AddressRecord;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Record counts for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCount {
    pub region: String,
    pub total: usize,
    pub ready: usize,
}

/// Count records per region, sorted by region name. Records without a region
/// are counted under `"None"`.
pub fn region_counts(records: &[AddressRecord]) -> Vec<RegionCount> {
    records
        .iter()
        .into_group_map_by(|r| r.region.clone().unwrap_or_else(|| "None".to_string()))
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .map(|(region, recs)| RegionCount {
            region,
            total: recs.len(),
            ready: recs.iter().filter(|r| r.ready).count(),
        })
        .collect()
}

/// Print the per region table to stdout.
pub fn print_region_summary(records: &[AddressRecord]) {
    println!(
        "{},{},{},{}",
        format_field("region", 24),
        format_field("total", 8),
        format_field("ready", 8),
        format_field("not_ready", 12)
    );
    for count in region_counts(records) {
        let not_ready = count.total - count.ready;
        let not_ready = if not_ready > 0 {
            format_field(not_ready, 12).red().to_string()
        } else {
            format_field(not_ready, 12)
        };
        println!(
            "{},{},{},{}",
            format_field(&count.region, 24),
            format_field(count.total, 8),
            format_field(count.ready, 8).green(),
            not_ready
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_region_counts() {
        let mut europe = AddressRecord::ready("10.0.0.1");
        europe.region = Some("Europe".to_string());
        let mut europe_late = AddressRecord::not_ready("10.0.0.2");
        europe_late.region = Some("Europe".to_string());
        let mut asia = AddressRecord::ready("10.0.0.3");
        asia.region = Some("Asia".to_string());
        let nowhere = AddressRecord::ready("10.0.0.4");

        let counts = region_counts(&[europe, asia, europe_late, nowhere]);
        assert_eq!(
            counts,
            vec![
                RegionCount { region: "Asia".to_string(), total: 1, ready: 1 },
                RegionCount { region: "Europe".to_string(), total: 2, ready: 1 },
                RegionCount { region: "None".to_string(), total: 1, ready: 1 },
            ]
        );
    }
}
