//! Data type and methods to store a parsed upper air sounding.

use chrono::NaiveDateTime;
use metfor::{Celsius, HectoPascal, Kelvin, Meters};

pub use self::station_info::StationInfo;

mod station_info;

/// A single radiosonde sounding parsed from the archive's fixed width text.
///
/// Each profile variable is stored in its own vector holding only the levels where that
/// variable was actually reported. The archive publishes rows in which any field may be
/// blank, and a blank field contributes nothing to its column, so two profiles from the
/// same sounding may have different lengths.
///
/// **Indexes are not level numbers.** Element `i` of one profile only corresponds to
/// element `i` of another if neither column skipped a row below it. Consumers pairing two
/// profiles must truncate both to the shorter length before zipping them, as the helpers
/// in [`crate::chart`] do. The columns are kept exactly as the source reported them,
/// reflowing or padding would change which values pair with which pressure level.
///
/// A `Sounding` is built once from a parse, optionally augmented with derived profiles,
/// and then read. There are no mutating setters, the builder methods consume `self`.
#[derive(Clone, Debug, Default)]
pub struct Sounding {
    // Station/time label scraped from the archive page, trimmed.
    title: String,

    // Station info
    station: StationInfo,

    // Valid time of the observation
    valid_time: Option<NaiveDateTime>,

    // Parsed profiles
    pressure: Vec<HectoPascal>,
    height: Vec<Meters>,
    temperature: Vec<Celsius>,
    dew_point: Vec<Celsius>,
    theta: Vec<Kelvin>,
    theta_e: Vec<Kelvin>,
    virtual_theta: Vec<Kelvin>,

    // Derived profiles
    theta_es: Vec<Kelvin>,
}

macro_rules! make_profile_setter {
    ($(#[$attr:meta])* => $name:tt, $units:tt, $field:ident) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(self, profile: Vec<$units>) -> Self {
            Self {
                $field: profile,
                ..self
            }
        }
    };
}

impl Sounding {
    /// Create a new sounding with default values. This is a proxy for default with a
    /// clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emagram::Sounding;
    ///
    /// let snd = Sounding::new();
    /// println!("{:?}", snd);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Sounding::default()
    }

    /// Builder method for the title, the station/time label from the archive page.
    ///
    /// Surrounding whitespace is trimmed before storing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emagram::Sounding;
    ///
    /// let snd = Sounding::new().with_title(" 47646 Tateno Observations at 00Z 01 Feb 2020\n");
    /// assert_eq!(snd.title(), "47646 Tateno Observations at 00Z 01 Feb 2020");
    /// ```
    #[inline]
    pub fn with_title<S>(self, title: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            title: title.as_ref().trim().to_owned(),
            ..self
        }
    }

    /// Get the title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Builder method for setting the station info.
    #[inline]
    pub fn with_station_info(self, new_value: StationInfo) -> Self {
        Self {
            station: new_value,
            ..self
        }
    }

    /// Get the station info.
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Builder method for the valid time of the observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use emagram::Sounding;
    ///
    /// let vt = NaiveDate::from_ymd(2020, 2, 1).and_hms(0, 0, 0);
    /// let snd = Sounding::new().with_valid_time(vt);
    /// assert_eq!(snd.valid_time(), Some(vt));
    /// ```
    #[inline]
    pub fn with_valid_time<T>(self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        Self {
            valid_time: Option::from(valid_time),
            ..self
        }
    }

    /// Get the valid time of the observation.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    make_profile_setter!(
        /// Builder method for the pressure profile.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use emagram::Sounding;
        /// use metfor::HectoPascal;
        ///
        /// let data = vec![1000.0, 925.0, 850.0, 700.0, 500.0, 300.0, 250.0, 100.0];
        /// let pressure_data: Vec<HectoPascal> = data.into_iter().map(HectoPascal).collect();
        ///
        /// let snd = Sounding::new().with_pressure_profile(pressure_data);
        /// assert_eq!(snd.pressure_profile().len(), 8);
        /// ```
        => with_pressure_profile, HectoPascal, pressure
    );

    /// Get the pressure profile in hPa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emagram::Sounding;
    ///
    /// // Uninitialized profiles just return an empty slice.
    /// let snd = Sounding::new();
    /// assert!(snd.pressure_profile().is_empty());
    /// ```
    #[inline]
    pub fn pressure_profile(&self) -> &[HectoPascal] {
        &self.pressure
    }

    make_profile_setter!(
        /// Builder method for the geopotential height profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units
        /// type may be different.
        => with_height_profile, Meters, height
    );

    /// Get the geopotential height profile in meters.
    #[inline]
    pub fn height_profile(&self) -> &[Meters] {
        &self.height
    }

    make_profile_setter!(
        /// Builder method for the temperature profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units
        /// type may be different.
        => with_temperature_profile, Celsius, temperature
    );

    /// Get the temperature profile in C.
    #[inline]
    pub fn temperature_profile(&self) -> &[Celsius] {
        &self.temperature
    }

    make_profile_setter!(
        /// Builder method for the dew point profile.
        ///
        /// See `with_pressure_profile` for an example of usage, keeping in mind the units
        /// type may be different.
        => with_dew_point_profile, Celsius, dew_point
    );

    /// Get the dew point profile in C.
    #[inline]
    pub fn dew_point_profile(&self) -> &[Celsius] {
        &self.dew_point
    }

    make_profile_setter!(
        /// Builder method for the potential temperature profile.
        ///
        /// Only present in the extended archive listing, see
        /// [`FormatVariant`](crate::FormatVariant).
        => with_theta_profile, Kelvin, theta
    );

    /// Get the potential temperature profile in Kelvin.
    #[inline]
    pub fn theta_profile(&self) -> &[Kelvin] {
        &self.theta
    }

    make_profile_setter!(
        /// Builder method for the equivalent potential temperature profile.
        ///
        /// Only present in the extended archive listing, see
        /// [`FormatVariant`](crate::FormatVariant).
        => with_theta_e_profile, Kelvin, theta_e
    );

    /// Get the equivalent potential temperature profile in Kelvin.
    #[inline]
    pub fn theta_e_profile(&self) -> &[Kelvin] {
        &self.theta_e
    }

    make_profile_setter!(
        /// Builder method for the virtual potential temperature profile.
        ///
        /// Only present in the extended archive listing, see
        /// [`FormatVariant`](crate::FormatVariant).
        => with_virtual_theta_profile, Kelvin, virtual_theta
    );

    /// Get the virtual potential temperature profile in Kelvin.
    #[inline]
    pub fn virtual_theta_profile(&self) -> &[Kelvin] {
        &self.virtual_theta
    }

    make_profile_setter!(
        /// Builder method for the saturation equivalent potential temperature profile.
        ///
        /// This profile is never parsed from the archive text, it is derived from the
        /// temperature and pressure profiles by [`crate::profile::saturation_theta_e`].
        => with_theta_es_profile, Kelvin, theta_es
    );

    /// Get the saturation equivalent potential temperature profile in Kelvin.
    ///
    /// Empty unless it has been derived, see [`crate::derive()`].
    #[inline]
    pub fn theta_es_profile(&self) -> &[Kelvin] {
        &self.theta_es
    }
}
