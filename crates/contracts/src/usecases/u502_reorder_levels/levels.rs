use crate::domain::a018_stock_location::LocStock;
use crate::shared::money;

/// Rows of `edited` whose level differs from the loaded original (or that are new).
pub fn changed_levels(original: &[LocStock], edited: &[LocStock]) -> Vec<LocStock> {
    edited
        .iter()
        .filter(|row| {
            original
                .iter()
                .find(|o| o.loc_code == row.loc_code && o.stock_id == row.stock_id)
                .map_or(true, |o| !money::eq_cents(o.reorder_level, row.reorder_level))
        })
        .cloned()
        .collect()
}

/// Outcome of a fan-out of independent updates; nothing is rolled back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanOutReport {
    pub updated: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl FanOutReport {
    pub fn from_results<E: ToString>(results: Vec<(String, Result<(), E>)>) -> Self {
        let mut report = FanOutReport::default();
        for (key, result) in results {
            match result {
                Ok(()) => report.updated.push(key),
                Err(e) => report.failed.push((key, e.to_string())),
            }
        }
        report
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            format!("{} updated", self.updated.len())
        } else {
            let failed: Vec<String> = self
                .failed
                .iter()
                .map(|(key, reason)| format!("{}: {}", key, reason))
                .collect();
            format!(
                "{} updated, {} failed ({})",
                self.updated.len(),
                self.failed.len(),
                failed.join("; ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(loc: &str, value: f64) -> LocStock {
        LocStock {
            loc_code: loc.to_string(),
            stock_id: "101".to_string(),
            reorder_level: value,
        }
    }

    #[test]
    fn test_only_changed_rows() {
        let original = vec![level("DEF", 5.0), level("WH2", 0.0)];
        let edited = vec![level("DEF", 5.0), level("WH2", 12.0), level("WH3", 1.0)];
        let changed = changed_levels(&original, &edited);
        let locs: Vec<&str> = changed.iter().map(|r| r.loc_code.as_str()).collect();
        assert_eq!(locs, vec!["WH2", "WH3"]);
        assert!(changed_levels(&original, &original).is_empty());
    }

    #[test]
    fn test_report_summary() {
        let report = FanOutReport::from_results(vec![
            ("DEF".to_string(), Ok(())),
            ("WH2".to_string(), Err("HTTP 500")),
        ]);
        assert!(!report.is_success());
        assert_eq!(report.summary(), "1 updated, 1 failed (WH2: HTTP 500)");

        let ok = FanOutReport::from_results::<String>(vec![("DEF".to_string(), Ok(()))]);
        assert_eq!(ok.summary(), "1 updated");
    }
}
