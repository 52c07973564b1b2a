use serde::{Deserialize, Serialize};

use crate::constants::{
    ArcSec, Degree, ABERRATION_ARCSEC, ARCSEC_PER_DEG, JULIAN_CENTURY, SEMI_DIAMETER_1AU_DEG,
};
use crate::ephemeris::{sun_pos, SolarDate};
use crate::heliorot_errors::HeliorotError;

/// Orientation of the solar disk at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskGeometry {
    /// Position angle of the solar rotation axis, measured eastward from
    /// celestial north (degrees)
    pub p: Degree,
    /// Tilt of the rotation axis toward the observer (degrees)
    pub b0: Degree,
    /// Apparent semi-diameter of the disk (arcseconds)
    pub rsun: ArcSec,
}

/// Observing vantage for the disk geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vantage {
    /// Geocentric observer
    Earth,
    /// STEREO spacecraft vantage, not modeled
    Stereo,
}

/// Solar P and B0 angles and the apparent semi-diameter at a given date.
///
/// Composes the [`sun_pos`] ephemeris with the longitude of the ascending
/// node of the solar equator on the ecliptic: the position angle of the pole
/// combines the obliquity and node terms, the axis tilt follows from the
/// aberrated longitude relative to the node, and the semi-diameter scales the
/// 1 AU value by the geocentric distance from a truncated anomaly series.
///
/// The B0 and semi-diameter closed forms come from the standard P/B0/L0
/// ephemeris algorithm; cross-check against an independent ephemeris before
/// relying on them at full precision.
///
/// Arguments
/// ---------
/// * `date`: the instant of the computation, see [`SolarDate`]
///
/// Return
/// ------
/// * a [`DiskGeometry`] with P and B0 in degrees and the semi-diameter in
///   arcseconds
pub fn solar_disk_geometry(date: &SolarDate) -> DiskGeometry {
    // days since the JD 2415020.0 reference epoch
    let de = date.offset_days();

    let sp = sun_pos(date);

    // aberrated longitude
    let lambda = sp.longitude - ABERRATION_ARCSEC / ARCSEC_PER_DEG;

    // longitude of the ascending node of the solar equator on the ecliptic
    let node = 73.666666 + (50.25 / ARCSEC_PER_DEG) * (de / 365.25 + 50.0);
    let arg = lambda - node;

    // position angle of the pole
    let p = ((-sp.obliq.to_radians().tan() * sp.app_long.to_radians().cos()).atan()
        + (-0.12722 * arg.to_radians().cos()).atan())
    .to_degrees();

    // tilt of the axis toward the observer
    let b0 = (0.12620 * arg.to_radians().sin()).asin().to_degrees();

    // geocentric distance in AU, from the mean anomalies of Venus, the
    // Earth, Mars, and Jupiter
    let t = de / JULIAN_CENTURY;
    let mv = 212.6 + (58517.80 * t).rem_euclid(360.0);
    let me = 358.476 + (35999.0499 * t).rem_euclid(360.0);
    let mm = 319.5 + (19139.86 * t).rem_euclid(360.0);
    let mj = 225.3 + (3034.69 * t).rem_euclid(360.0);
    let r = 1.000141
        - (0.016748 - 0.0000418 * t) * me.to_radians().cos()
        - 0.000140 * (2.0 * me).to_radians().cos()
        + 0.000016 * (58.3 + 2.0 * mv - 2.0 * me).to_radians().cos()
        + 0.000005 * (209.1 + mv - me).to_radians().cos()
        + 0.000005 * (253.8 - 2.0 * mm + 2.0 * me).to_radians().cos()
        + 0.000016 * (89.5 - mj + me).to_radians().cos()
        + 0.000009 * (357.1 - 2.0 * mj + 2.0 * me).to_radians().cos();

    // apparent semi-diameter
    let rsun = SEMI_DIAMETER_1AU_DEG / r * ARCSEC_PER_DEG;

    DiskGeometry { p, b0, rsun }
}

/// [`solar_disk_geometry`] from an explicit vantage.
///
/// Only the geocentric vantage is modeled; anything else fails immediately
/// with no partial result.
pub fn solar_disk_geometry_from(
    date: &SolarDate,
    vantage: Vantage,
) -> Result<DiskGeometry, HeliorotError> {
    match vantage {
        Vantage::Earth => Ok(solar_disk_geometry(date)),
        Vantage::Stereo => Err(HeliorotError::UnsupportedMode(
            "STEREO solar P, B0 and semi-diameter calculation is not supported".to_string(),
        )),
    }
}

/// Disk geometry at the current instant, resolved at call time.
pub fn solar_disk_geometry_now() -> Result<DiskGeometry, HeliorotError> {
    Ok(solar_disk_geometry(&SolarDate::Calendar(
        hifitime::Epoch::now()?,
    )))
}

#[cfg(test)]
mod disk_geometry_test {
    use super::*;

    #[test]
    fn test_geometry_2013_03_27() {
        let geometry = solar_disk_geometry(&SolarDate::parse("2013-03-27").unwrap());

        // windows from the published P/B0/semi-diameter tables for the date
        assert!(
            geometry.p > -26.5 && geometry.p < -25.3,
            "p = {}",
            geometry.p
        );
        assert!(
            geometry.b0 > -7.1 && geometry.b0 < -6.4,
            "b0 = {}",
            geometry.b0
        );
        assert!(
            geometry.rsun > 955.0 && geometry.rsun < 968.0,
            "rsun = {}",
            geometry.rsun
        );
    }

    #[test]
    fn test_axis_tilt_bounded() {
        // |B0| can never exceed asin(0.12620) and |P| stays under ~26.6 deg
        let p_limit = 26.6;
        let b0_limit = (0.12620f64).asin().to_degrees() + 1e-9;
        for month in 1..=12 {
            let date = SolarDate::parse(&format!("2013-{month:02}-07")).unwrap();
            let geometry = solar_disk_geometry(&date);
            assert!(geometry.b0.abs() <= b0_limit);
            assert!(geometry.p.abs() <= p_limit);
        }
    }

    #[test]
    fn test_semi_diameter_annual_cycle() {
        // perihelion in early January, aphelion in early July
        let january = solar_disk_geometry(&SolarDate::parse("2013-01-03").unwrap());
        let july = solar_disk_geometry(&SolarDate::parse("2013-07-05").unwrap());
        assert!(january.rsun > july.rsun);
        assert!(january.rsun > 970.0 && january.rsun < 985.0);
        assert!(july.rsun > 938.0 && july.rsun < 950.0);
    }

    #[test]
    fn test_stereo_vantage_unsupported() {
        let date = SolarDate::parse("2013-03-27").unwrap();
        let err = solar_disk_geometry_from(&date, Vantage::Stereo).unwrap_err();
        assert!(matches!(err, HeliorotError::UnsupportedMode(_)));

        let ok = solar_disk_geometry_from(&date, Vantage::Earth).unwrap();
        assert_eq!(ok, solar_disk_geometry(&date));
    }

    #[test]
    fn test_now_resolves_at_call_time() {
        let geometry = solar_disk_geometry_now().unwrap();
        assert!(geometry.rsun > 938.0 && geometry.rsun < 985.0);
    }
}
