//! Parse the fixed width text body of an archived sounding.
//!
//! The archive publishes each sounding as a `<pre>` block of fixed width columns. The
//! retrieval layer is expected to hand the lines of that block to [`parse_sounding`]
//! together with the page title, this module never does any I/O itself.

use crate::{
    error::{ParseError, Result},
    sounding::Sounding,
};
use metfor::{Celsius, HectoPascal, Kelvin, Meters};
use std::str;
use strum_macros::{Display, EnumIter, EnumString};

/// Data lines with a 0-based index at or below this are banner and column header text.
pub const HEADER_SKIP_COUNT: usize = 4;
/// Number of fixed width columns in a data line.
pub const COLUMN_COUNT: usize = 11;
/// Width of a single column in characters.
pub const COLUMN_WIDTH: usize = 7;
/// Expected length of a data line.
pub const LINE_WIDTH: usize = COLUMN_COUNT * COLUMN_WIDTH;

/// Column layouts published by the archive.
///
/// The modern listing carries eleven columns including the three potential temperature
/// variants, older listings only carry values for the first four. Both share the same
/// line width, the variant only controls which fields are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum FormatVariant {
    /// Legacy listing, only pressure, height, temperature and dew point are interpreted.
    #[strum(serialize = "narrow")]
    Narrow,
    /// Full listing, the potential temperature columns are interpreted as well.
    #[strum(serialize = "extended")]
    Extended,
}

impl FormatVariant {
    // Fields 4 through 7 (humidity, mixing ratio and wind) are never interpreted.
    #[inline]
    fn maps_column(self, column: usize) -> bool {
        match self {
            FormatVariant::Narrow => column <= 3,
            FormatVariant::Extended => column <= 3 || column >= 8,
        }
    }
}

/// Parse the text body of a sounding into a [`Sounding`].
///
/// `lines` is the raw text of the sounding block split into lines, `title` is the
/// station/time label scraped from the same page. The first five lines (indexes 0
/// through [`HEADER_SKIP_COUNT`]) are always discarded as banner text regardless of
/// content. After that, zero length lines are skipped and every other line must be
/// exactly [`LINE_WIDTH`] characters, anything else aborts the parse with no partial
/// result.
///
/// Within a data line each 7 character field is either blank, in which case it simply
/// contributes nothing to its column, or a number. A non-blank field that does not parse
/// as a number is a fatal format error. Because blank fields shorten their column
/// independently, the profiles of the returned sounding may have different lengths, see
/// the discussion on [`Sounding`].
///
/// # Examples
///
/// ```rust
/// use emagram::{parse_sounding, FormatVariant};
///
/// let lines = [
///     // The first five lines are banner text, content and length are irrelevant.
///     "",
///     "---------------------",
///     "   PRES   HGHT   TEMP ...",
///     "    hPa     m      C  ...",
///     "---------------------",
///     " 1000.0  105.0    5.2   -3.8   52.0    2.9  345.0    8.0  278.0  286.3  278.5",
///     "  925.0  734.0    0.6   -6.4   59.0    2.8  320.0   18.0  279.4  287.4  279.9",
/// ];
///
/// let snd = parse_sounding(&lines, "47646 Tateno", FormatVariant::Extended).unwrap();
/// assert_eq!(snd.pressure_profile().len(), 2);
/// assert_eq!(snd.theta_e_profile().len(), 2);
/// ```
pub fn parse_sounding<L, S>(lines: L, title: &str, variant: FormatVariant) -> Result<Sounding>
where
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pressure: Vec<HectoPascal> = vec![];
    let mut height: Vec<Meters> = vec![];
    let mut temperature: Vec<Celsius> = vec![];
    let mut dew_point: Vec<Celsius> = vec![];
    let mut theta: Vec<Kelvin> = vec![];
    let mut theta_e: Vec<Kelvin> = vec![];
    let mut virtual_theta: Vec<Kelvin> = vec![];

    for (line_no, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        if line_no <= HEADER_SKIP_COUNT {
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if line.len() != LINE_WIDTH {
            return Err(ParseError::WrongLineLength {
                line: line_no,
                length: line.len(),
            });
        }

        for (column, raw) in line.as_bytes().chunks_exact(COLUMN_WIDTH).enumerate() {
            if !variant.maps_column(column) {
                continue;
            }

            let field = str::from_utf8(raw)
                .map_err(|_| ParseError::MalformedNumber {
                    line: line_no,
                    column,
                })?
                .trim();

            if field.is_empty() {
                continue;
            }

            let value: f64 = field.parse().map_err(|_| ParseError::MalformedNumber {
                line: line_no,
                column,
            })?;

            match column {
                0 => pressure.push(HectoPascal(value)),
                1 => height.push(Meters(value)),
                2 => temperature.push(Celsius(value)),
                3 => dew_point.push(Celsius(value)),
                8 => theta.push(Kelvin(value)),
                9 => theta_e.push(Kelvin(value)),
                10 => virtual_theta.push(Kelvin(value)),
                _ => unreachable!(),
            }
        }
    }

    Ok(Sounding::new()
        .with_title(title)
        .with_pressure_profile(pressure)
        .with_height_profile(height)
        .with_temperature_profile(temperature)
        .with_dew_point_profile(dew_point)
        .with_theta_profile(theta)
        .with_theta_e_profile(theta_e)
        .with_virtual_theta_profile(virtual_theta))
}
