//! Create derived profiles from a parsed sounding.
//!
//! The output of each function here is at the same levels as the profile that bounds it in
//! the sounding, so it is suitable to be set back on the sounding with the matching
//! builder method. If a profile required for the calculation is missing the result cannot
//! be calculated and an empty vector is returned, that is a degraded data state and not an
//! error, the plotting side simply skips the series.

use crate::{met_formulas, sounding::Sounding};
use itertools::izip;
use metfor::Kelvin;

/// Given a sounding, calculate a profile of saturation equivalent potential temperature.
///
/// Requires the temperature and equivalent potential temperature profiles to be present.
/// The equivalent potential temperature column is the shorter, later computed one in the
/// archive listing, so it bounds how many levels are valid: the temperature and pressure
/// profiles are truncated to its length (taking the prefix) before being fed through the
/// thermodynamics.
pub fn saturation_theta_e(snd: &Sounding) -> Vec<Kelvin> {
    let p_profile = snd.pressure_profile();
    let t_profile = snd.temperature_profile();
    let theta_e_len = snd.theta_e_profile().len();

    if t_profile.is_empty() || theta_e_len == 0 {
        return vec![];
    }

    izip!(t_profile, p_profile)
        .take(theta_e_len)
        .map(|(&t, &p)| met_formulas::saturation_theta_e(t, p))
        .collect()
}
