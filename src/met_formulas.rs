//! Moist thermodynamic formulas used to derive emagram profiles.
//!
//! These are scalar, closed form functions over typed quantities. They are deterministic
//! and side effect free, profile level versions that map them over the columns of a
//! sounding live in the [`crate::profile`] module. Inputs are assumed to be physically
//! meaningful (temperatures above absolute zero, pressure well above the vapor
//! pressure), a NaN input propagates to a NaN output.

use metfor::{HectoPascal, Kelvin, Pressure, Temperature};

// Ratio of the molecular weight of water vapor to that of dry air.
const EPSILON: f64 = 0.622;
// Reference pressure for potential temperatures, in hPa.
const P0: f64 = 1000.0;
// Rd / cpd
const KAPPA: f64 = 0.286;
// Specific heat of dry air at constant pressure, in J / kg / K.
const CPD: f64 = 1004.0;
// Latent heat of vaporization, in J / kg.
const LV: f64 = 2.50e6;

/// Saturation vapor pressure over liquid water.
///
/// This is the eight coefficient fit of Bolton (1980), eq. 9. At 0C it reproduces the
/// textbook 6.11 hPa calibration point.
///
/// # Examples
///
/// ```rust
/// use emagram::met_formulas::saturation_vapor_pressure;
/// use metfor::{Celsius, HectoPascal, Kelvin};
///
/// let HectoPascal(es) = saturation_vapor_pressure(Kelvin(273.15));
/// assert!((es - 6.11).abs() < 0.05);
///
/// // Any temperature type converts on the way in.
/// let HectoPascal(es) = saturation_vapor_pressure(Celsius(0.0));
/// assert!((es - 6.11).abs() < 0.05);
/// ```
pub fn saturation_vapor_pressure<T>(temperature: T) -> HectoPascal
where
    Kelvin: From<T>,
    T: Temperature,
{
    const G0: f64 = -2991.2729;
    const G1: f64 = -6017.0128;
    const G2: f64 = 18.87643854;
    const G3: f64 = -0.028354721;
    const G4: f64 = 1.7838301e-5;
    const G5: f64 = -8.4150417e-10;
    const G6: f64 = 4.4412543e-13;
    const G7: f64 = 2.858487;

    let Kelvin(t) = Kelvin::from(temperature);

    let log_es_pa = G0 / (t * t)
        + G1 / t
        + G2
        + G3 * t
        + G4 * t * t
        + G5 * t * t * t
        + G6 * t * t * t * t
        + G7 * t.ln();

    HectoPascal(log_es_pa.exp() / 100.0)
}

/// Saturation vapor pressure over liquid water, Tetens formula.
///
/// A shorter fit than [`saturation_vapor_pressure`], kept as a named alternative. The two
/// agree to within about 2% between -30C and 40C.
pub fn saturation_vapor_pressure_tetens<T>(temperature: T) -> HectoPascal
where
    Kelvin: From<T>,
    T: Temperature,
{
    let Kelvin(t) = Kelvin::from(temperature);

    HectoPascal(6.11 * (17.27 * (t - 273.15) / (t - 35.86)).exp())
}

/// Vapor pressure corresponding to a mixing ratio (kg/kg) at a given pressure.
pub fn vapor_pressure<P>(mixing_ratio: f64, pressure: P) -> HectoPascal
where
    HectoPascal: From<P>,
    P: Pressure,
{
    let HectoPascal(p) = HectoPascal::from(pressure);

    HectoPascal(mixing_ratio * p / (EPSILON + mixing_ratio))
}

/// Saturation mixing ratio in kg/kg.
///
/// This is the form whose denominator subtracts the saturation vapor pressure,
/// `epsilon * es(t) / (p - es(t))`. See [`saturation_mixing_ratio_ambient`] for the
/// variant that subtracts a separately supplied ambient vapor pressure instead. The two
/// coincide exactly when the air is saturated.
pub fn saturation_mixing_ratio<T, P>(temperature: T, pressure: P) -> f64
where
    Kelvin: From<T>,
    HectoPascal: From<P>,
    T: Temperature,
    P: Pressure,
{
    let HectoPascal(p) = HectoPascal::from(pressure);
    let HectoPascal(es) = saturation_vapor_pressure(temperature);

    EPSILON * es / (p - es)
}

/// Saturation mixing ratio in kg/kg, with an ambient vapor pressure correction.
///
/// `epsilon * es(t) / (p - e)` where `e` is the actual vapor pressure of the air rather
/// than the saturation value. Call sites choose between this and
/// [`saturation_mixing_ratio`] explicitly.
pub fn saturation_mixing_ratio_ambient<T, P, E>(temperature: T, pressure: P, vapor_pressure: E) -> f64
where
    Kelvin: From<T>,
    HectoPascal: From<P>,
    HectoPascal: From<E>,
    T: Temperature,
    P: Pressure,
    E: Pressure,
{
    let HectoPascal(p) = HectoPascal::from(pressure);
    let HectoPascal(e) = HectoPascal::from(vapor_pressure);
    let HectoPascal(es) = saturation_vapor_pressure(temperature);

    EPSILON * es / (p - e)
}

/// Saturation equivalent potential temperature.
///
/// `t * (1000 / p)^0.286 * exp((Lv / cpd) * qs(t, p) / t)`, the value of the equivalent
/// potential temperature a parcel would have if it were saturated at its current
/// temperature and pressure.
pub fn saturation_theta_e<T, P>(temperature: T, pressure: P) -> Kelvin
where
    Kelvin: From<T>,
    HectoPascal: From<P>,
    T: Temperature,
    P: Pressure,
{
    let t_k = Kelvin::from(temperature);
    let p_hpa = HectoPascal::from(pressure);

    let qs = saturation_mixing_ratio::<Kelvin, HectoPascal>(t_k, p_hpa);
    let Kelvin(t) = t_k;
    let HectoPascal(p) = p_hpa;

    Kelvin(t * (P0 / p).powf(KAPPA) * ((LV / CPD) * qs / t).exp())
}

/// Saturation equivalent potential temperature with an ambient vapor pressure correction.
///
/// Same as [`saturation_theta_e`] except the pressure in the Exner term has the supplied
/// ambient vapor pressure removed, `t * (1000 / (p - e))^0.286 * ...`. The saturation
/// mixing ratio in the exponential is still evaluated at the full pressure.
pub fn saturation_theta_e_ambient<T, P, E>(temperature: T, pressure: P, vapor_pressure: E) -> Kelvin
where
    Kelvin: From<T>,
    HectoPascal: From<P>,
    HectoPascal: From<E>,
    T: Temperature,
    P: Pressure,
    E: Pressure,
{
    let t_k = Kelvin::from(temperature);
    let p_hpa = HectoPascal::from(pressure);

    let qs = saturation_mixing_ratio::<Kelvin, HectoPascal>(t_k, p_hpa);
    let Kelvin(t) = t_k;
    let HectoPascal(p) = p_hpa;
    let HectoPascal(e) = HectoPascal::from(vapor_pressure);

    Kelvin(t * (P0 / (p - e)).powf(KAPPA) * ((LV / CPD) * qs / t).exp())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_data::approx_equal;
    use metfor::Celsius;

    #[test]
    fn saturation_vapor_pressure_calibration_point() {
        // The defining calibration point of the fit, es at 0C is 6.11 hPa.
        let HectoPascal(es) = saturation_vapor_pressure(Kelvin(273.15));
        assert!(approx_equal(6.11, es, 0.05));

        let HectoPascal(es) = saturation_vapor_pressure(Celsius(20.0));
        assert!(approx_equal(23.385, es, 0.01));
    }

    #[test]
    fn saturation_vapor_pressure_is_monotonic() {
        let mut prev = saturation_vapor_pressure(Celsius(-60.0));
        let mut t = -59.9;
        while t <= 50.0 {
            let next = saturation_vapor_pressure(Celsius(t));
            assert!(next > prev, "es not increasing near {} C", t);
            prev = next;
            t += 0.1;
        }
    }

    #[test]
    fn tetens_agrees_with_bolton() {
        let mut t = -30.0;
        while t <= 40.0 {
            let HectoPascal(bolton) = saturation_vapor_pressure(Celsius(t));
            let HectoPascal(tetens) = saturation_vapor_pressure_tetens(Celsius(t));
            assert!(
                ((bolton - tetens) / bolton).abs() < 0.02,
                "formulas diverge at {} C",
                t
            );
            t += 1.0;
        }
    }

    #[test]
    fn saturation_mixing_ratio_at_20c() {
        let qs = saturation_mixing_ratio(Kelvin(293.15), HectoPascal(1000.0));
        assert!(approx_equal(0.014894, qs, 1.0e-5));
    }

    #[test]
    fn mixing_ratio_variants_coincide_at_saturation() {
        let t = Kelvin(283.15);
        let p = HectoPascal(900.0);
        let es = saturation_vapor_pressure(t);

        let plain = saturation_mixing_ratio(t, p);
        let ambient = saturation_mixing_ratio_ambient(t, p, es);
        assert!(approx_equal(plain, ambient, 1.0e-12));
    }

    #[test]
    fn vapor_pressure_inverts_the_mixing_ratio() {
        let t = Kelvin(293.15);
        let p = HectoPascal(1000.0);

        let qs = saturation_mixing_ratio(t, p);
        let HectoPascal(e) = vapor_pressure(qs, p);
        let HectoPascal(es) = saturation_vapor_pressure(t);
        assert!(approx_equal(es, e, 1.0e-9));
    }

    #[test]
    fn saturation_theta_e_reference_values() {
        let Kelvin(theta_es) = saturation_theta_e(Kelvin(293.15), HectoPascal(1000.0));
        assert!(approx_equal(332.685, theta_es, 0.01));

        let Kelvin(theta_es) = saturation_theta_e(Kelvin(263.15), HectoPascal(500.0));
        assert!(approx_equal(331.919, theta_es, 0.01));
    }

    #[test]
    fn ambient_variant_with_zero_correction_is_the_plain_form() {
        let t = Kelvin(283.15);
        let p = HectoPascal(850.0);

        let Kelvin(plain) = saturation_theta_e(t, p);
        let Kelvin(ambient) = saturation_theta_e_ambient(t, p, HectoPascal(0.0));
        assert!(approx_equal(plain, ambient, 1.0e-12));
    }
}
