//! IANA timezone resolution.

use chrono_tz::Tz;
use kairos_core::AppError;

/// Resolves an IANA zone name against the bundled zone database.
///
/// An absent name means UTC; an unknown name is a validation failure. The
/// error message never echoes the input, the client already knows what it
/// sent.
pub fn resolve_zone(name: Option<&str>) -> Result<Tz, AppError> {
    match name {
        None => Ok(Tz::UTC),
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| AppError::validation("invalid timezone")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_name_means_utc() {
        assert_eq!(resolve_zone(None).unwrap(), Tz::UTC);
    }

    #[test]
    fn known_zones_resolve() {
        assert_eq!(resolve_zone(Some("UTC")).unwrap(), Tz::UTC);
        assert_eq!(
            resolve_zone(Some("Europe/Moscow")).unwrap(),
            Tz::Europe__Moscow
        );
        assert_eq!(
            resolve_zone(Some("America/Argentina/Buenos_Aires")).unwrap(),
            Tz::America__Argentina__Buenos_Aires
        );
    }

    #[test]
    fn unknown_zone_is_a_validation_error() {
        let err = resolve_zone(Some("Europe/Europe")).unwrap_err();
        assert_eq!(err.message(), "invalid timezone");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[test]
    fn misspelled_zone_is_rejected() {
        assert!(resolve_zone(Some("merica/Argentina/Buenos_Aires")).is_err());
        assert!(resolve_zone(Some("asd")).is_err());
    }
}
