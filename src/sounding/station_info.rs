use metfor::Meters;
use optional::Optioned;

/// Identification and location data for a radiosonde launch site.
///
/// The archive identifies stations by their WMO number, eg 47646 for Tateno. Location and
/// elevation come from the station listing on the archive page and may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StationInfo {
    num: Optioned<i32>,
    location: Option<(f64, f64)>,
    elevation: Optioned<Meters>,
}

impl StationInfo {
    /// Create a new object with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emagram::StationInfo;
    ///
    /// assert!(StationInfo::new().station_num().is_none());
    /// assert!(StationInfo::new().location().is_none());
    /// assert!(StationInfo::new().elevation().is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a WMO station number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emagram::StationInfo;
    ///
    /// assert_eq!(StationInfo::new().with_station(47646).station_num().unwrap(), 47646);
    /// assert_eq!(StationInfo::new().with_station(Some(47646)).station_num().unwrap(), 47646);
    /// ```
    #[inline]
    pub fn with_station<T>(mut self, number: T) -> Self
    where
        Optioned<i32>: From<T>,
    {
        self.num = Optioned::from(number);
        self
    }

    /// Builder method to add a latitude and longitude in degrees.
    #[inline]
    pub fn with_lat_lon<T>(mut self, coords: T) -> Self
    where
        Option<(f64, f64)>: From<T>,
    {
        self.location = Option::from(coords);
        self
    }

    /// Builder method to add the station elevation.
    #[inline]
    pub fn with_elevation<T>(mut self, elev: T) -> Self
    where
        Optioned<Meters>: From<T>,
    {
        self.elevation = Optioned::from(elev);
        self
    }

    /// WMO station number, eg 47646.
    #[inline]
    pub fn station_num(&self) -> Optioned<i32> {
        self.num
    }

    /// Latitude and longitude in degrees.
    #[inline]
    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Elevation of the launch site in meters.
    #[inline]
    pub fn elevation(&self) -> Optioned<Meters> {
        self.elevation
    }
}
