//! Validation of planning tables.
//!
//! Checks the structural integrity of injected configuration before a
//! resolver accepts it. Detects:
//! - Empty zone tables and duplicate zone labels
//! - Band bounds that are negative, NaN, or not strictly increasing
//! - A missing or misplaced catch-all band
//! - Reference points out of coordinate range
//! - Working-hours windows whose start is not before their end
//! - Blank or duplicate employer names
//!
//! Every problem is collected so a bad configuration file can be fixed in
//! one pass.

use std::collections::HashSet;

use crate::config::PlanningConfig;
use crate::models::{normalize_name, EmployerProfile, EmployerTable, ReferencePoint, ZoneTable};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The zone table has no bands.
    EmptyZoneTable,
    /// Two bands share a label.
    DuplicateLabel,
    /// A finite bound is negative or NaN.
    InvalidBound,
    /// A finite bound is not greater than the previous one.
    NonIncreasingBand,
    /// The last band has a finite bound.
    MissingCatchAll,
    /// An unbounded band appears before the last position.
    MisplacedCatchAll,
    /// The reference point is out of coordinate range.
    InvalidReference,
    /// A working-hours window does not start before it ends.
    InvertedHours,
    /// An employer profile has a blank name.
    EmptyEmployerName,
    /// Two employer profiles share a name (after trim and case fold).
    DuplicateEmployer,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a zone table.
///
/// Checks:
/// 1. At least one band
/// 2. Unique labels
/// 3. Finite bounds are >= 0 and strictly increasing
/// 4. Exactly one unbounded band, in last position
pub fn validate_zone_table(table: &ZoneTable) -> ValidationResult {
    let mut errors = Vec::new();
    let bands = table.bands();

    if bands.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyZoneTable,
            "zone table has no bands",
        )]);
    }

    let mut labels = HashSet::new();
    for band in bands {
        if !labels.insert(band.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("duplicate zone label '{}'", band.label),
            ));
        }
    }

    let last = bands.len() - 1;
    let mut previous: Option<f64> = None;
    for (idx, band) in bands.iter().enumerate() {
        match band.upper_km {
            Some(upper) => {
                // NaN fails this comparison too.
                if !(upper >= 0.0 && upper.is_finite()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidBound,
                        format!("zone '{}' has invalid bound {upper} km", band.label),
                    ));
                    continue;
                }
                if let Some(prev) = previous {
                    if upper <= prev {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::NonIncreasingBand,
                            format!(
                                "zone '{}' bound {upper} km is not above previous bound {prev} km",
                                band.label
                            ),
                        ));
                    }
                }
                previous = Some(upper);
                if idx == last {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MissingCatchAll,
                        format!("last zone '{}' must be unbounded", band.label),
                    ));
                }
            }
            None if idx != last => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MisplacedCatchAll,
                    format!("unbounded zone '{}' is not the last band", band.label),
                ));
            }
            None => {}
        }
    }

    finish(errors)
}

/// Validates the reference point's coordinate range.
pub fn validate_reference(reference: &ReferencePoint) -> ValidationResult {
    if reference.coordinate.is_valid() {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidReference,
            format!(
                "reference point '{}' is out of range ({}, {})",
                reference.name, reference.coordinate.latitude, reference.coordinate.longitude
            ),
        )])
    }
}

/// Validates an employer table.
///
/// Checks:
/// 1. Every profile (fallback included) has a non-blank name
/// 2. Every window starts before it ends
/// 3. No two known profiles share a normalized name
pub fn validate_employer_table(table: &EmployerTable) -> ValidationResult {
    let mut errors = Vec::new();

    check_profile(&table.fallback, &mut errors);

    let mut names = HashSet::new();
    for profile in &table.profiles {
        check_profile(profile, &mut errors);
        let key = normalize_name(&profile.name);
        if !key.is_empty() && !names.insert(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployer,
                format!("duplicate employer '{}'", profile.name.trim()),
            ));
        }
    }

    finish(errors)
}

/// Validates a complete configuration, collecting errors from every table.
pub fn validate_config(config: &PlanningConfig) -> ValidationResult {
    let mut errors = Vec::new();
    for result in [
        validate_reference(&config.reference),
        validate_zone_table(&config.zones),
        validate_employer_table(&config.employers),
    ] {
        if let Err(mut e) = result {
            errors.append(&mut e);
        }
    }
    finish(errors)
}

fn check_profile(profile: &EmployerProfile, errors: &mut Vec<ValidationError>) {
    if profile.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyEmployerName,
            "employer profile has a blank name",
        ));
    }

    let windows = [("normal", Some(profile.normal_hours)), ("friday", profile.friday_hours)];
    for (which, window) in windows {
        if let Some(w) = window {
            if !w.is_ordered() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedHours,
                    format!(
                        "employer '{}' {which} hours {} - {} do not start before they end",
                        profile.name,
                        w.start.format("%H:%M"),
                        w.end.format("%H:%M")
                    ),
                ));
            }
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, DistanceBand, HoursWindow};

    fn hours(sh: u32, sm: u32, eh: u32, em: u32) -> HoursWindow {
        HoursWindow::from_hm(sh, sm, eh, em).unwrap()
    }

    fn valid_zones() -> ZoneTable {
        ZoneTable::new(vec![
            DistanceBand::bounded("1A", 5.0),
            DistanceBand::bounded("1B", 10.0),
            DistanceBand::unbounded("2"),
        ])
    }

    fn valid_employers() -> EmployerTable {
        EmployerTable::new(EmployerProfile::new("DEFAULT", hours(8, 0, 17, 0)))
            .with_profile(EmployerProfile::new("A", hours(7, 30, 15, 30)))
            .with_profile(
                EmployerProfile::new("B", hours(8, 30, 17, 0)).with_friday_hours(hours(8, 30, 16, 30)),
            )
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_zone_table() {
        assert!(validate_zone_table(&valid_zones()).is_ok());
    }

    #[test]
    fn test_single_catch_all_is_valid() {
        let table = ZoneTable::new(vec![DistanceBand::unbounded("only")]);
        assert!(validate_zone_table(&table).is_ok());
    }

    #[test]
    fn test_empty_zone_table() {
        let errors = validate_zone_table(&ZoneTable::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyZoneTable));
    }

    #[test]
    fn test_duplicate_label() {
        let table = valid_zones().with_band(DistanceBand::unbounded("1A"));
        let errors = validate_zone_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateLabel));
    }

    #[test]
    fn test_non_increasing_bands() {
        let table = ZoneTable::new(vec![
            DistanceBand::bounded("1A", 10.0),
            DistanceBand::bounded("1B", 10.0),
            DistanceBand::unbounded("2"),
        ]);
        let errors = validate_zone_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NonIncreasingBand));
    }

    #[test]
    fn test_invalid_bounds() {
        let table = ZoneTable::new(vec![
            DistanceBand::bounded("1A", -1.0),
            DistanceBand::bounded("1B", f64::NAN),
            DistanceBand::unbounded("2"),
        ]);
        let errors = validate_zone_table(&table).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidBound)
                .count(),
            2
        );
    }

    #[test]
    fn test_missing_and_misplaced_catch_all() {
        let bounded_last = ZoneTable::new(vec![
            DistanceBand::bounded("1A", 5.0),
            DistanceBand::bounded("1B", 10.0),
        ]);
        let errors = validate_zone_table(&bounded_last).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MissingCatchAll));

        let early = ZoneTable::new(vec![
            DistanceBand::unbounded("1A"),
            DistanceBand::unbounded("1B"),
        ]);
        let errors = validate_zone_table(&early).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MisplacedCatchAll));
    }

    #[test]
    fn test_reference_out_of_range() {
        let rp = ReferencePoint::new(
            "HQ",
            Coordinate {
                latitude: 123.0,
                longitude: 2.0,
            },
        );
        let errors = validate_reference(&rp).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidReference));
    }

    #[test]
    fn test_valid_employers() {
        assert!(validate_employer_table(&valid_employers()).is_ok());
    }

    #[test]
    fn test_inverted_hours() {
        let table = valid_employers().with_profile(
            EmployerProfile::new("C", hours(8, 0, 17, 0)).with_friday_hours(hours(16, 0, 8, 0)),
        );
        let errors = validate_employer_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvertedHours));
        assert!(errors[0].message.contains("friday"));
    }

    #[test]
    fn test_equal_start_end_rejected() {
        let table = EmployerTable::new(EmployerProfile::new("DEFAULT", hours(8, 0, 8, 0)));
        let errors = validate_employer_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvertedHours));
    }

    #[test]
    fn test_duplicate_employer_normalized() {
        let table = valid_employers().with_profile(EmployerProfile::new(" a ", hours(9, 0, 18, 0)));
        let errors = validate_employer_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateEmployer));
    }

    #[test]
    fn test_blank_employer_name() {
        let table = valid_employers().with_profile(EmployerProfile::new("   ", hours(9, 0, 18, 0)));
        let errors = validate_employer_table(&table).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyEmployerName));
        assert!(!has_kind(&errors, ValidationErrorKind::DuplicateEmployer));
    }

    #[test]
    fn test_config_collects_from_every_table() {
        let config = PlanningConfig {
            reference: ReferencePoint::new(
                "HQ",
                Coordinate {
                    latitude: 0.0,
                    longitude: 200.0,
                },
            ),
            zones: ZoneTable::default(),
            employers: EmployerTable::new(EmployerProfile::new("", hours(8, 0, 17, 0))),
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidReference));
        assert!(has_kind(&errors, ValidationErrorKind::EmptyZoneTable));
        assert!(has_kind(&errors, ValidationErrorKind::EmptyEmployerName));
    }
}
