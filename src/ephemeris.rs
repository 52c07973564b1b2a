use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, JulianDay, ABERRATION_ARCSEC, ARCSEC_PER_DEG, EPOCH_1900_JD, JULIAN_CENTURY,
};
use crate::heliorot_errors::HeliorotError;
use crate::time::{julian_day, parse_time};

/// A date understood by the solar ephemeris.
///
/// The series is referred to the JD 2415020.0 epoch (1900 January 0.5); the
/// variants carry the three ways a caller may already have resolved the time
/// axis. Calendar instants are converted to a Julian day before any
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarDate {
    /// A calendar instant
    Calendar(Epoch),
    /// A Julian day number, no offset applied
    JulianDay(JulianDay),
    /// A Julian day count already offset from JD 2415020.0
    SinceEpoch1900(f64),
}

impl SolarDate {
    /// Parse a calendar date string into a [`SolarDate::Calendar`].
    pub fn parse(date: &str) -> Result<Self, HeliorotError> {
        Ok(SolarDate::Calendar(parse_time(date)?))
    }

    /// Days elapsed since the JD 2415020.0 reference epoch.
    pub fn offset_days(&self) -> f64 {
        match *self {
            SolarDate::Calendar(epoch) => julian_day(&epoch) - EPOCH_1900_JD,
            SolarDate::JulianDay(jd) => jd - EPOCH_1900_JD,
            SolarDate::SinceEpoch1900(dd) => dd,
        }
    }
}

impl From<Epoch> for SolarDate {
    fn from(epoch: Epoch) -> Self {
        SolarDate::Calendar(epoch)
    }
}

/// Apparent solar position quantities, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPos {
    /// Longitude of the Sun for the mean equinox of date
    pub longitude: Degree,
    /// Apparent right ascension for the true equinox of date, in [0, 360)
    pub ra: Degree,
    /// Apparent declination for the true equinox of date
    pub dec: Degree,
    /// Apparent longitude (aberration and nutation applied)
    pub app_long: Degree,
    /// True obliquity of the ecliptic
    pub obliq: Degree,
}

/// Compute apparent solar ephemeris parameters at a given date.
///
/// Truncated form of Newcomb's theory of the Sun: the mean longitude is
/// corrected for the equation of centre and for the Venus, Jupiter, and lunar
/// perturbations, then for aberration and nutation. The apparent angular
/// coordinates are good to about one second of time.
///
/// Every term of the series is a closed-form trigonometric expression in the
/// time since the reference epoch; there is no iteration and no convergence
/// tolerance. All internal angles are kept in degrees (the mean longitude in
/// arcseconds) and converted to radians only at each trigonometric call.
///
/// Arguments
/// ---------
/// * `date`: the instant of the computation, see [`SolarDate`]
///
/// Return
/// ------
/// * a [`SunPos`] record with all angles in degrees
///
/// # See also
/// * [`sun_pos_at`] – the same computation from a calendar date string
/// * [`solar_disk_geometry`](crate::disk_geometry::solar_disk_geometry) – P, B0 and
///   semi-diameter composed from this ephemeris
pub fn sun_pos(date: &SolarDate) -> SunPos {
    let dd = date.offset_days();

    // Julian centuries from 1900.0
    let t = dd / JULIAN_CENTURY;

    // mean longitude, in arcseconds
    let mut l = (279.696678 + (36000.768925 * t).rem_euclid(360.0)) * ARCSEC_PER_DEG;

    // equation of centre, from the Earth's mean anomaly
    let me = 358.475844 + (35999.04975 * t).rem_euclid(360.0);
    l += (6910.1 - 17.2 * t) * me.to_radians().sin() + 72.3 * (2.0 * me).to_radians().sin();

    // Venus perturbation, from the mean anomaly of Venus
    let mv = 212.603219 + (58517.803875 * t).rem_euclid(360.0);
    l += 4.8 * (299.1017 + mv - me).to_radians().cos()
        + 5.5 * (148.3133 + 2.0 * mv - 2.0 * me).to_radians().cos()
        + 2.5 * (315.9433 + 2.0 * mv - 3.0 * me).to_radians().cos()
        + 1.6 * (345.2533 + 3.0 * mv - 4.0 * me).to_radians().cos()
        + 1.0 * (318.15 + 3.0 * mv - 5.0 * me).to_radians().cos();

    // Jupiter perturbation, from the mean anomaly of Jupiter
    let mj = 225.328328 + (3034.6920239 * t).rem_euclid(360.0);
    l += 7.2 * (179.5317 - mj + me).to_radians().cos()
        + 2.6 * (263.2167 - mj).to_radians().cos()
        + 2.7 * (87.145 - 2.0 * mj + 2.0 * me).to_radians().cos()
        + 1.6 * (109.4933 - 2.0 * mj + me).to_radians().cos();

    // lunar perturbation, from the mean elongation of the Moon from the Sun
    let d = 350.7376814 + (445267.11422 * t).rem_euclid(360.0);
    l += 6.5 * d.to_radians().sin();

    // long-period term
    l += 6.4 * (231.19 + 20.2 * t).to_radians().sin();

    l = (l + 2_592_000.0).rem_euclid(1_296_000.0);
    let longitude = l / ARCSEC_PER_DEG;

    // aberration
    l -= ABERRATION_ARCSEC;

    // nutation, from the longitude of the Moon's mean node
    let omega = 259.183275 - (1934.142008 * t).rem_euclid(360.0);
    l -= 17.2 * omega.to_radians().sin();

    // true obliquity
    let obliq = 23.452294 - 0.0130125 * t + (9.2 * omega.to_radians().cos()) / ARCSEC_PER_DEG;

    // apparent right ascension and declination for the true equinox of date
    let l = l / ARCSEC_PER_DEG;
    let mut ra = f64::atan2(
        l.to_radians().sin() * obliq.to_radians().cos(),
        l.to_radians().cos(),
    )
    .to_degrees();
    if ra < 0.0 {
        ra += 360.0;
    }
    let dec = (l.to_radians().sin() * obliq.to_radians().sin())
        .asin()
        .to_degrees();

    SunPos {
        longitude,
        ra,
        dec,
        app_long: l,
        obliq,
    }
}

/// Convenience form of [`sun_pos`] taking a calendar date string.
pub fn sun_pos_at(date: &str) -> Result<SunPos, HeliorotError> {
    Ok(sun_pos(&SolarDate::parse(date)?))
}

/// Elementwise [`sun_pos`] over a sequence of dates; the result preserves the
/// input shape.
pub fn sun_pos_many(dates: &[SolarDate]) -> Vec<SunPos> {
    dates.iter().map(sun_pos).collect()
}
