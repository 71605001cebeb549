use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalYear {
    #[serde(default)]
    pub id: i32,
    pub begin: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub closed: bool,
}

impl FiscalYear {
    pub fn new(id: i32, begin: NaiveDate, end: NaiveDate, closed: bool) -> Self {
        Self {
            id,
            begin,
            end,
            closed,
        }
    }

    /// "2025" for calendar years, "2024/2025" otherwise.
    pub fn label(&self) -> String {
        if self.begin.year() == self.end.year() {
            self.begin.year().to_string()
        } else {
            format!("{}/{}", self.begin.year(), self.end.year())
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.begin <= date && date <= self.end
    }

    pub fn overlaps(&self, other: &FiscalYear) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    /// Validation plus the overlap rule against the already existing years.
    pub fn validate_against(&self, existing: &[FiscalYear]) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors,
        };
        let overlapping = existing
            .iter()
            .filter(|other| other.id != self.id)
            .any(|other| self.overlaps(other));
        errors.check(!overlapping, "begin", "Fiscal year overlaps an existing one");
        errors.into_result()
    }

    /// Default for a new year: starts the day after the latest end and lasts twelve months.
    pub fn suggest_next(existing: &[FiscalYear], today: NaiveDate) -> FiscalYear {
        let begin = existing
            .iter()
            .map(|y| y.end)
            .max()
            .and_then(|end| end.checked_add_days(Days::new(1)))
            .unwrap_or_else(|| {
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
            });
        let end = begin
            .checked_add_months(Months::new(12))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .unwrap_or(begin);
        FiscalYear::new(0, begin, end, false)
    }
}

impl Validate for FiscalYear {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            self.end > self.begin,
            "end",
            "End date must be after begin date",
        );
        errors.into_result()
    }
}

impl AggregateRoot for FiscalYear {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.label()
    }

    /// Closed years are hidden like inactive records.
    fn is_inactive(&self) -> bool {
        self.closed
    }

    fn aggregate_index() -> &'static str {
        "a015"
    }

    fn collection_name() -> &'static str {
        "fiscal_years"
    }

    fn element_name() -> &'static str {
        "Fiscal Year"
    }

    fn list_name() -> &'static str {
        "Fiscal Years"
    }

    fn api_path() -> &'static str {
        "/api/fiscal-years"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_after_begin() {
        let year = FiscalYear::new(0, date(2025, 1, 1), date(2025, 1, 1), false);
        assert_eq!(
            year.validate().unwrap_err().get("end"),
            Some("End date must be after begin date")
        );
    }

    #[test]
    fn test_overlap_detection() {
        let existing = vec![FiscalYear::new(1, date(2024, 1, 1), date(2024, 12, 31), true)];
        let overlapping = FiscalYear::new(0, date(2024, 7, 1), date(2025, 6, 30), false);
        assert_eq!(
            overlapping.validate_against(&existing).unwrap_err().get("begin"),
            Some("Fiscal year overlaps an existing one")
        );

        let next = FiscalYear::new(0, date(2025, 1, 1), date(2025, 12, 31), false);
        assert!(next.validate_against(&existing).is_ok());

        // editing a year never collides with itself
        assert!(existing[0].validate_against(&existing).is_ok());
    }

    #[test]
    fn test_suggest_next() {
        let existing = vec![
            FiscalYear::new(1, date(2023, 7, 1), date(2024, 6, 30), true),
            FiscalYear::new(2, date(2024, 7, 1), date(2025, 6, 30), false),
        ];
        let next = FiscalYear::suggest_next(&existing, date(2025, 3, 1));
        assert_eq!(next.begin, date(2025, 7, 1));
        assert_eq!(next.end, date(2026, 6, 30));
        assert_eq!(next.label(), "2025/2026");

        let first = FiscalYear::suggest_next(&[], date(2025, 3, 1));
        assert_eq!(first.begin, date(2025, 1, 1));
        assert_eq!(first.end, date(2025, 12, 31));
        assert_eq!(first.label(), "2025");
    }
}
