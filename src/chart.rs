//! Prepare plottable series for an emagram chart.
//!
//! Nothing in this module draws anything. It pairs the columns of a [`Sounding`] into
//! `(horizontal, vertical)` points a rendering backend can plot directly, handling the
//! unequal column lengths described on [`Sounding`]: every series is truncated to the
//! shorter of the two columns being paired before any values are zipped together.

use crate::sounding::Sounding;
use itertools::izip;
use metfor::Quantity;
use strum_macros::{Display, EnumIter, EnumString};

/// Vertical coordinate for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum VerticalAxis {
    /// Pressure in hPa, conventionally drawn decreasing upward.
    #[strum(serialize = "p")]
    Pressure,
    /// Geopotential height in meters.
    #[strum(serialize = "z")]
    Height,
}

/// The family of values drawn on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum HorizontalAxis {
    /// Temperature and dew point in C.
    #[strum(serialize = "t")]
    Temperature,
    /// Potential temperature, equivalent potential temperature and its saturation value,
    /// in Kelvin.
    #[strum(serialize = "pt")]
    PotentialTemperature,
}

/// A single profile variable that can be drawn as a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ProfileVariable {
    /// Temperature in C.
    #[strum(serialize = "temperature")]
    Temperature,
    /// Dew point in C.
    #[strum(serialize = "dew point")]
    DewPoint,
    /// Potential temperature in Kelvin.
    #[strum(serialize = "potential temperature")]
    Theta,
    /// Equivalent potential temperature in Kelvin.
    #[strum(serialize = "equivalent potential temperature")]
    ThetaE,
    /// Saturation equivalent potential temperature in Kelvin.
    #[strum(serialize = "saturation equivalent potential temperature")]
    ThetaEs,
}

/// Chart configuration supplied by the interactive front end.
///
/// Limits are in the units of the matching axis and optional, `None` means let the
/// renderer auto scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmagramConfig {
    /// Which family of series to draw.
    pub horizontal: HorizontalAxis,
    /// Vertical coordinate.
    pub vertical: VerticalAxis,
    /// Fixed horizontal axis range.
    pub horizontal_limits: Option<(f64, f64)>,
    /// Fixed vertical axis range.
    pub vertical_limits: Option<(f64, f64)>,
}

impl Default for EmagramConfig {
    fn default() -> Self {
        EmagramConfig {
            horizontal: HorizontalAxis::Temperature,
            vertical: VerticalAxis::Pressure,
            horizontal_limits: None,
            vertical_limits: None,
        }
    }
}

/// One labelled series, paired and truncated, ready for a plotting backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// The profile variable this series shows.
    pub variable: ProfileVariable,
    /// `(horizontal value, vertical coordinate)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Pair one profile variable against a vertical coordinate.
///
/// The result is truncated to `min` of the two column lengths, element `i` of the longer
/// column past that point has no partner and is dropped.
pub fn series(snd: &Sounding, variable: ProfileVariable, vertical: VerticalAxis) -> Vec<(f64, f64)> {
    match variable {
        ProfileVariable::Temperature => pair_with_vertical(snd.temperature_profile(), snd, vertical),
        ProfileVariable::DewPoint => pair_with_vertical(snd.dew_point_profile(), snd, vertical),
        ProfileVariable::Theta => pair_with_vertical(snd.theta_profile(), snd, vertical),
        ProfileVariable::ThetaE => pair_with_vertical(snd.theta_e_profile(), snd, vertical),
        ProfileVariable::ThetaEs => pair_with_vertical(snd.theta_es_profile(), snd, vertical),
    }
}

/// Build the full series set for one chart.
///
/// Temperature mode yields temperature and dew point, potential temperature mode yields
/// the three potential temperature variants. Series with no points, for example the
/// saturation series when the derivation was skipped for lack of data, are left out so a
/// renderer can just draw what it is given.
pub fn emagram_series(snd: &Sounding, config: &EmagramConfig) -> Vec<PlotSeries> {
    let variables: &[ProfileVariable] = match config.horizontal {
        HorizontalAxis::Temperature => &[ProfileVariable::Temperature, ProfileVariable::DewPoint],
        HorizontalAxis::PotentialTemperature => &[
            ProfileVariable::Theta,
            ProfileVariable::ThetaE,
            ProfileVariable::ThetaEs,
        ],
    };

    variables
        .iter()
        .map(|&variable| PlotSeries {
            variable,
            points: series(snd, variable, config.vertical),
        })
        .filter(|series| !series.points.is_empty())
        .collect()
}

fn pair_with_vertical<X>(xs: &[X], snd: &Sounding, vertical: VerticalAxis) -> Vec<(f64, f64)>
where
    X: Quantity,
{
    match vertical {
        VerticalAxis::Pressure => pair_series(xs, snd.pressure_profile()),
        VerticalAxis::Height => pair_series(xs, snd.height_profile()),
    }
}

fn pair_series<X, V>(xs: &[X], vs: &[V]) -> Vec<(f64, f64)>
where
    X: Quantity,
    V: Quantity,
{
    izip!(xs, vs)
        .map(|(&x, &v)| (x.unpack(), v.unpack()))
        .collect()
}
