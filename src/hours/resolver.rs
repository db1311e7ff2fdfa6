//! Employer-hours lookup against an injected table.

use chrono::NaiveDate;
use tracing::debug;

use super::{day_from_ymd, parse_day};
use crate::error::{PlanningError, PlanningResult};
use crate::models::{EmployerProfile, EmployerTable, ScheduleDefaults};
use crate::validation::validate_employer_table;

/// Resolves default event hours per employer.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workforce_planning::hours::ScheduleDefaultsResolver;
/// use workforce_planning::models::{EmployerProfile, EmployerTable, HoursWindow};
///
/// let table = EmployerTable::new(
///     EmployerProfile::new("DEFAULT", HoursWindow::from_hm(8, 0, 17, 0).unwrap())
///         .with_friday_hours(HoursWindow::from_hm(8, 0, 16, 0).unwrap()),
/// );
/// let resolver = ScheduleDefaultsResolver::new(table).unwrap();
///
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let defaults = resolver.resolve_defaults("Anyone Ltd", friday);
/// assert_eq!(defaults.end, friday.and_hms_opt(16, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleDefaultsResolver {
    employers: EmployerTable,
}

impl ScheduleDefaultsResolver {
    /// Creates a resolver after validating the table.
    ///
    /// # Errors
    /// `Validation` when a window is inverted or names collide.
    pub fn new(employers: EmployerTable) -> PlanningResult<Self> {
        validate_employer_table(&employers).map_err(PlanningError::Validation)?;
        Ok(Self { employers })
    }

    /// The employer table.
    pub fn employers(&self) -> &EmployerTable {
        &self.employers
    }

    /// Profile for `employer`, falling back for unknown names.
    pub fn profile_for(&self, employer: &str) -> &EmployerProfile {
        match self.employers.find(employer) {
            Some(profile) => profile,
            None => {
                debug!(employer, fallback = %self.employers.fallback.name, "unknown employer, using fallback hours");
                &self.employers.fallback
            }
        }
    }

    /// Default start/end for `employer` on `day`.
    pub fn resolve_defaults(&self, employer: &str, day: NaiveDate) -> ScheduleDefaults {
        let defaults = self.profile_for(employer).defaults_on(day);
        debug!(
            employer,
            %day,
            start = %defaults.start.time(),
            end = %defaults.end.time(),
            hours = ?defaults.hours,
            "schedule defaults resolved"
        );
        defaults
    }

    /// As [`resolve_defaults`](Self::resolve_defaults), from date components.
    ///
    /// # Errors
    /// `InvalidDate` when the date does not exist.
    pub fn resolve_defaults_ymd(
        &self,
        employer: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> PlanningResult<ScheduleDefaults> {
        let day = day_from_ymd(year, month, day)?;
        Ok(self.resolve_defaults(employer, day))
    }

    /// As [`resolve_defaults`](Self::resolve_defaults), from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// `InvalidDate` when the string is not a valid day.
    pub fn resolve_defaults_str(&self, employer: &str, day: &str) -> PlanningResult<ScheduleDefaults> {
        let day = parse_day(day)?;
        Ok(self.resolve_defaults(employer, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanningConfig;
    use crate::models::{HoursKind, HoursWindow};
    use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

    fn standard() -> ScheduleDefaultsResolver {
        ScheduleDefaultsResolver::new(PlanningConfig::builtin().unwrap().employers).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        day.and_hms_opt(h, m, 0).unwrap()
    }

    // 2024-03-15 is a Friday.
    const FRIDAY: (i32, u32, u32) = (2024, 3, 15);

    #[test]
    fn test_reference_friday() {
        let (y, m, d) = FRIDAY;
        assert_eq!(day(y, m, d).weekday(), Weekday::Fri);
    }

    #[test]
    fn test_orizon_installation_same_every_day() {
        let r = standard();
        for offset in 0..7 {
            let d = day(2024, 3, 11) + Duration::days(offset);
            let defaults = r.resolve_defaults("ORIZON INSTALLATION", d);
            assert_eq!(defaults.start, at(d, 7, 30));
            assert_eq!(defaults.end, at(d, 15, 30));
            assert_eq!(defaults.employer, "ORIZON INSTALLATION");
        }
    }

    #[test]
    fn test_orizon_telecom_friday_and_weekday() {
        let r = standard();
        let (y, m, d) = FRIDAY;
        let friday = day(y, m, d);
        let defaults = r.resolve_defaults("ORIZON TELECOM", friday);
        assert_eq!(defaults.start, at(friday, 8, 30));
        assert_eq!(defaults.end, at(friday, 16, 30));
        assert_eq!(defaults.hours, HoursKind::Friday);

        let wednesday = day(2024, 3, 13);
        let defaults = r.resolve_defaults("ORIZON TELECOM", wednesday);
        assert_eq!(defaults.start, at(wednesday, 8, 30));
        assert_eq!(defaults.end, at(wednesday, 17, 0));
        assert_eq!(defaults.hours, HoursKind::Normal);
    }

    #[test]
    fn test_unknown_employer_uses_default_profile() {
        let r = standard();
        let (y, m, d) = FRIDAY;
        let friday = day(y, m, d);
        let monday = day(2024, 3, 11);

        let defaults = r.resolve_defaults("UNKNOWN CO", monday);
        assert_eq!(defaults.start, at(monday, 8, 0));
        assert_eq!(defaults.end, at(monday, 17, 0));
        assert_eq!(defaults.employer, "DEFAULT");

        let defaults = r.resolve_defaults("UNKNOWN CO", friday);
        assert_eq!(defaults.start, at(friday, 8, 0));
        assert_eq!(defaults.end, at(friday, 16, 0));
    }

    #[test]
    fn test_employer_name_matching_is_lenient() {
        let r = standard();
        let monday = day(2024, 3, 11);
        let defaults = r.resolve_defaults("  orizon telecom\t", monday);
        assert_eq!(defaults.employer, "ORIZON TELECOM");
        assert_eq!(defaults.end, at(monday, 17, 0));
    }

    #[test]
    fn test_weekend_uses_normal_hours() {
        let r = standard();
        let saturday = day(2024, 3, 16);
        let defaults = r.resolve_defaults("ORIZON TELECOM", saturday);
        assert_eq!(defaults.hours, HoursKind::Normal);
        assert_eq!(defaults.end, at(saturday, 17, 0));
    }

    #[test]
    fn test_deterministic() {
        let r = standard();
        let d = day(2024, 12, 27);
        assert_eq!(
            r.resolve_defaults("ORIZON TELECOM", d),
            r.resolve_defaults("ORIZON TELECOM", d)
        );
    }

    #[test]
    fn test_start_before_end_for_every_profile() {
        let r = standard();
        let names: Vec<String> = r
            .employers()
            .profiles
            .iter()
            .map(|p| p.name.clone())
            .chain(std::iter::once("someone else".to_string()))
            .collect();
        for name in &names {
            for offset in 0..7 {
                let d = day(2024, 1, 1) + Duration::days(offset);
                let defaults = r.resolve_defaults(name, d);
                assert!(defaults.start < defaults.end, "{name} on {d}");
                assert_eq!(defaults.start.date(), d);
            }
        }
    }

    #[test]
    fn test_invalid_dates() {
        let r = standard();
        assert!(matches!(
            r.resolve_defaults_ymd("ORIZON TELECOM", 2023, 2, 29),
            Err(PlanningError::InvalidDate(_))
        ));
        assert!(matches!(
            r.resolve_defaults_str("ORIZON TELECOM", "2024-13-01"),
            Err(PlanningError::InvalidDate(_))
        ));
        assert!(r.resolve_defaults_str("ORIZON TELECOM", "").is_err());
    }

    #[test]
    fn test_string_and_component_forms_agree() {
        let r = standard();
        let a = r.resolve_defaults_str("ORIZON TELECOM", "2024-03-15").unwrap();
        let b = r.resolve_defaults_ymd("ORIZON TELECOM", 2024, 3, 15).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hours, HoursKind::Friday);
    }

    #[test]
    fn test_rejects_inverted_table() {
        let table = EmployerTable::new(EmployerProfile::new(
            "DEFAULT",
            HoursWindow::from_hm(17, 0, 8, 0).unwrap(),
        ));
        assert!(matches!(
            ScheduleDefaultsResolver::new(table),
            Err(PlanningError::Validation(_))
        ));
    }
}
