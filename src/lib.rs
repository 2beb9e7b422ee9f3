#![warn(missing_docs)]
//! Parse upper air radiosonde soundings published as fixed width text by the University
//! of Wyoming archive, and derive the extra profiles needed to draw an emagram.
//!
//! The crate sits between two collaborators it does not contain: a retrieval layer that
//! fetches the archive page and extracts the page title and the `<pre>` text block, and a
//! rendering layer that draws series on a chart. Everything in between is here.
//!
//! * [`parse_sounding`] turns the raw text lines into a typed [`Sounding`].
//! * [`met_formulas`] holds the closed form moist thermodynamics.
//! * [`derive()`] attaches the derivable profiles, currently the saturation equivalent
//!   potential temperature.
//! * [`chart`] pairs columns into plottable series, handling the unequal column lengths
//!   described on [`Sounding`].
//!
//! # Examples
//!
//! ```rust
//! use emagram::{
//!     emagram_series, sounding_from_text, EmagramConfig, FormatVariant, HorizontalAxis,
//! };
//!
//! let lines = [
//!     // Five lines of banner text, skipped by position.
//!     "",
//!     "---------------------",
//!     "   PRES   HGHT   TEMP ...",
//!     "    hPa     m      C  ...",
//!     "---------------------",
//!     " 1000.0  105.0    5.2   -3.8   52.0    2.9  345.0    8.0  278.0  286.3  278.5",
//!     "  925.0  734.0    0.6   -6.4   59.0    2.8  320.0   18.0  279.4  287.4  279.9",
//! ];
//!
//! let snd = sounding_from_text(&lines, "47646 Tateno", FormatVariant::Extended)?;
//!
//! let config = EmagramConfig {
//!     horizontal: HorizontalAxis::PotentialTemperature,
//!     ..EmagramConfig::default()
//! };
//! let series = emagram_series(&snd, &config);
//! assert_eq!(series.len(), 3);
//! # Ok::<(), emagram::ParseError>(())
//! ```

//
// API
//
pub use crate::{
    analysis::{derive, sounding_from_text},
    chart::{
        emagram_series, series, EmagramConfig, HorizontalAxis, PlotSeries, ProfileVariable,
        VerticalAxis,
    },
    error::{ParseError, Result},
    parse::{parse_sounding, FormatVariant},
    sounding::{Sounding, StationInfo},
};

pub mod chart;
pub mod met_formulas;
pub mod profile;

// Modules
mod analysis;
mod error;
mod parse;
mod sounding;

#[cfg(test)]
mod test_data;
