use crate::constants::{ArcSec, Degree};
use crate::disk_geometry::solar_disk_geometry;
use crate::ephemeris::SolarDate;
use crate::heliorot_errors::HeliorotError;
use crate::rotation::{diff_rot, FrameTime, RotationProfile};
use crate::time::TimeWindow;

/// Conversion from Cartesian disk coordinates to heliographic longitude and
/// latitude, supplied by the caller.
pub trait DiskToHeliographic {
    /// Map arcsecond disk offsets `(x, y)` to heliographic
    /// `(longitude, latitude)` in degrees, given the apparent semi-diameter,
    /// the axis tilt, and the central meridian longitude.
    fn to_heliographic(
        &self,
        rsun: ArcSec,
        b0: Degree,
        l0: Degree,
        x: ArcSec,
        y: ArcSec,
    ) -> (Degree, Degree);
}

/// Differentially rotate disk positions over a time window.
///
/// Resolves the window to an elapsed duration, computes the disk geometry at
/// the window start, maps each `(x, y)` pair to heliographic coordinates
/// through `transform`, and shifts each longitude by [`diff_rot`] at the
/// pair's latitude. Longitudes are measured from the central meridian at the
/// window start; re-projection back to disk coordinates is left to the owner
/// of the transform.
///
/// Arguments
/// ---------
/// * `x`, `y`: paired disk offsets in arcseconds; must have the same length
/// * `window`: the rotation time window, see [`TimeWindow`]
/// * `profile`: rotation rate law
/// * `frame`: time reference frame
/// * `transform`: the disk-to-heliographic collaborator
///
/// Return
/// ------
/// * rotated heliographic `(longitude, latitude)` pairs in degrees, one per
///   input pair, or [`HeliorotError::ShapeMismatch`] when the slices differ
///   in length
pub fn rot_xy<T: DiskToHeliographic>(
    x: &[ArcSec],
    y: &[ArcSec],
    window: &TimeWindow,
    profile: RotationProfile,
    frame: FrameTime,
    transform: &T,
) -> Result<Vec<(Degree, Degree)>, HeliorotError> {
    if x.len() != y.len() {
        return Err(HeliorotError::ShapeMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let elapsed = window.elapsed();
    let geometry = solar_disk_geometry(&SolarDate::Calendar(window.start()));

    Ok(x.iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let (longitude, latitude) =
                transform.to_heliographic(geometry.rsun, geometry.b0, 0.0, xi, yi);
            (
                longitude + diff_rot(elapsed, latitude, profile, frame),
                latitude,
            )
        })
        .collect())
}

#[cfg(test)]
mod rotate_test {
    use super::*;
    use hifitime::Duration;

    /// Stub transform: reads the pair back as heliographic degrees, scaled
    /// down from arcseconds by the disk radius.
    struct FlatDisk;

    impl DiskToHeliographic for FlatDisk {
        fn to_heliographic(
            &self,
            rsun: ArcSec,
            _b0: Degree,
            l0: Degree,
            x: ArcSec,
            y: ArcSec,
        ) -> (Degree, Degree) {
            (l0 + 90.0 * x / rsun, 90.0 * y / rsun)
        }
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let window = TimeWindow::from_parts(Some("2013-03-27"), None, Some(86400.0)).unwrap();
        let err = rot_xy(
            &[0.0, 100.0],
            &[0.0],
            &window,
            RotationProfile::Howard,
            FrameTime::Sidereal,
            &FlatDisk,
        )
        .unwrap_err();
        assert_eq!(err, HeliorotError::ShapeMismatch { x: 2, y: 1 });
    }

    #[test]
    fn test_longitudes_shift_by_diff_rot() {
        let window = TimeWindow::from_parts(Some("2013-03-27"), None, Some(2.0 * 86400.0)).unwrap();
        let x = [0.0, 120.0, -300.0];
        let y = [0.0, 240.0, -480.0];

        let rotated = rot_xy(
            &x,
            &y,
            &window,
            RotationProfile::Howard,
            FrameTime::Synodic,
            &FlatDisk,
        )
        .unwrap();
        assert_eq!(rotated.len(), 3);

        let geometry =
            solar_disk_geometry(&SolarDate::parse("2013-03-27").unwrap());
        for ((&xi, &yi), &(longitude, latitude)) in x.iter().zip(&y).zip(&rotated) {
            let expected_latitude = 90.0 * yi / geometry.rsun;
            let expected_longitude = 90.0 * xi / geometry.rsun
                + diff_rot(
                    Duration::from_days(2.0),
                    expected_latitude,
                    RotationProfile::Howard,
                    FrameTime::Synodic,
                );
            assert_eq!(latitude, expected_latitude);
            assert_eq!(longitude, expected_longitude);
        }
    }

    #[test]
    fn test_zero_interval_leaves_longitudes_unchanged() {
        let window = TimeWindow::from_parts(Some("2013-03-27"), None, Some(0.0)).unwrap();
        let rotated = rot_xy(
            &[75.0],
            &[150.0],
            &window,
            RotationProfile::Snodgrass,
            FrameTime::Sidereal,
            &FlatDisk,
        )
        .unwrap();

        let geometry = solar_disk_geometry(&SolarDate::parse("2013-03-27").unwrap());
        assert_eq!(rotated[0].0, 90.0 * 75.0 / geometry.rsun);
        assert_eq!(rotated[0].1, 90.0 * 150.0 / geometry.rsun);
    }
}
