//! Pixel-to-time conversion helpers for timeline consumers.
//!
//! The engine itself never touches time-domain values; these free functions
//! are what a timeline feeds a completed gesture's pixel delta into when it
//! seeds its reschedule or duration dialog. `pixels_per_hour` comes from the
//! caller's own layout.

use crate::constants::DURATION_SNAP_MINUTES;

/// Convert a pixel displacement into a snapped time shift in minutes.
///
/// The sign follows the sign of `pixels`. A displacement smaller than one
/// snap interval collapses to zero minutes; callers treat zero as "no-op"
/// before opening a dialog. No clamping is applied.
pub fn time_shift(pixels: f64, pixels_per_hour: f64, snap_minutes: i64) -> i64 {
    let snap = snap_minutes.max(1);
    let minutes = pixels / pixels_per_hour * 60.0;
    let intervals = (minutes / snap as f64).trunc() as i64;
    intervals * snap
}

/// Compute a new duration (minutes) from a resize's pixel delta.
///
/// The candidate duration is floored at `min_duration_minutes` before
/// snapping to the nearest 15-minute multiple. The 15-minute snap is fixed
/// on purpose and independent of the `snap_minutes` used by [`time_shift`].
pub fn duration_change(
    original_minutes: i64,
    pixels: f64,
    pixels_per_hour: f64,
    min_duration_minutes: i64,
) -> i64 {
    let change_minutes = pixels / pixels_per_hour * 60.0;
    let candidate = (original_minutes as f64 + change_minutes).max(min_duration_minutes as f64);
    (candidate / DURATION_SNAP_MINUTES as f64).round() as i64 * DURATION_SNAP_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MIN_DURATION_MINUTES;

    #[test]
    fn shift_exact_intervals() {
        // 100px at 50px/h is two hours, already a multiple of 15.
        assert_eq!(time_shift(100.0, 50.0, 15), 120);
    }

    #[test]
    fn shift_small_drag_collapses_to_zero() {
        // -10px at 50px/h is -12 minutes, under one snap interval.
        assert_eq!(time_shift(-10.0, 50.0, 15), 0);
        assert_eq!(time_shift(10.0, 50.0, 15), 0);
    }

    #[test]
    fn shift_sign_follows_pixels() {
        assert_eq!(time_shift(-100.0, 50.0, 15), -120);
        assert_eq!(time_shift(-50.0, 50.0, 30), -60);
    }

    #[test]
    fn shift_respects_caller_snap() {
        // 90px at 60px/h is 90 minutes; snap 60 keeps whole hours only.
        assert_eq!(time_shift(90.0, 60.0, 60), 60);
    }

    #[test]
    fn duration_grows_and_snaps() {
        // +50px at 50px/h adds 60 minutes.
        assert_eq!(
            duration_change(60, 50.0, 50.0, DEFAULT_MIN_DURATION_MINUTES),
            120
        );
        // +20px at 50px/h adds 24 minutes; 84 snaps to 90.
        assert_eq!(
            duration_change(60, 20.0, 50.0, DEFAULT_MIN_DURATION_MINUTES),
            90
        );
    }

    #[test]
    fn duration_clamps_to_minimum() {
        // An arbitrarily large negative delta can never go below the floor.
        assert_eq!(
            duration_change(60, -1000.0, 50.0, DEFAULT_MIN_DURATION_MINUTES),
            15
        );
    }

    #[test]
    fn duration_snap_is_fixed_at_fifteen() {
        // 60 + 7px*60/50 = 68.4 minutes, snaps to 75 no matter what snap the
        // caller uses for shifts elsewhere.
        assert_eq!(duration_change(60, 7.0, 50.0, 15), 75);
    }
}
