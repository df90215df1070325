//! Common data structures

// standard library
use std::format as f;

// internal modules
use crate::error::{Error, Result};
use crate::parsers::nuclide_from_str;

/// Field sets available from the API
///
/// Every request names exactly one of these through the `fields` parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Ground state properties (`ground_states`)
    GroundStates,
    /// Excited levels (`levels`)
    Levels,
    /// Gamma transitions between levels (`gammas`)
    Gammas,
    /// Decay radiation of a given type (`decay_rads`)
    DecayRads,
    /// Binned beta spectra (`bin_beta`)
    BetaSpectra,
    /// Cumulative fission yields (`cumulative_fy`)
    CumulativeFy,
    /// Independent fission yields (`independent_fy`)
    IndependentFy,
}

impl Field {
    /// Get corresponding API name for a variant
    ///
    /// ```rust
    /// # use livechart_client::Field;
    /// assert_eq!(Field::GroundStates.query_name(), "ground_states");
    /// assert_eq!(Field::BetaSpectra.query_name(), "bin_beta");
    /// ```
    pub fn query_name(&self) -> &'static str {
        match self {
            Field::GroundStates => "ground_states",
            Field::Levels => "levels",
            Field::Gammas => "gammas",
            Field::DecayRads => "decay_rads",
            Field::BetaSpectra => "bin_beta",
            Field::CumulativeFy => "cumulative_fy",
            Field::IndependentFy => "independent_fy",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.query_name())
    }
}

/// Radiation type filter for `decay_rads` and `bin_beta` requests
///
/// Each variant maps to the short symbol sent as `rad_types`. Operations take
/// anything `AsRef<str>`, so a variant or a raw symbol such as `"bm"` both
/// work, and symbols parse back case-insensitively.
///
/// ```rust
/// # use livechart_client::RadType;
/// assert_eq!("BM".parse::<RadType>().unwrap(), RadType::BetaMinus);
/// assert_eq!(RadType::Xray.as_ref(), "x");
/// assert!("n".parse::<RadType>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadType {
    /// Alpha decay (`a`)
    Alpha,
    /// Beta+ or electron capture (`bp`)
    BetaPlus,
    /// Beta- (`bm`)
    BetaMinus,
    /// Gamma decay (`g`)
    Gamma,
    /// Auger and conversion electron (`e`)
    Electron,
    /// X-ray (`x`)
    Xray,
}

impl RadType {
    /// Every radiation type accepted by `decay_rads` requests
    pub const ALL: [RadType; 6] = [
        RadType::Alpha,
        RadType::BetaPlus,
        RadType::BetaMinus,
        RadType::Gamma,
        RadType::Electron,
        RadType::Xray,
    ];

    /// Radiation types accepted by `bin_beta` requests
    pub const BETA: [RadType; 2] = [RadType::BetaPlus, RadType::BetaMinus];

    /// Symbol used for the `rad_types` parameter
    pub fn query_symbol(&self) -> &'static str {
        match self {
            RadType::Alpha => "a",
            RadType::BetaPlus => "bp",
            RadType::BetaMinus => "bm",
            RadType::Gamma => "g",
            RadType::Electron => "e",
            RadType::Xray => "x",
        }
    }
}

impl AsRef<str> for RadType {
    fn as_ref(&self) -> &str {
        self.query_symbol()
    }
}

impl std::str::FromStr for RadType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(RadType::Alpha),
            "bp" => Ok(RadType::BetaPlus),
            "bm" => Ok(RadType::BetaMinus),
            "g" => Ok(RadType::Gamma),
            "e" => Ok(RadType::Electron),
            "x" => Ok(RadType::Xray),
            _ => Err(Error::InvalidParameter(f!(
                "invalid 'rad_type' \"{s}\", must be one of {}",
                symbol_list(&RadType::ALL)
            ))),
        }
    }
}

/// Comma separated, sorted list of symbols for error messages
pub(crate) fn symbol_list(types: &[RadType]) -> String {
    let mut symbols: Vec<&str> = types.iter().map(|t| t.query_symbol()).collect();
    symbols.sort_unstable();
    f!("[{}]", symbols.join(", "))
}

/// Type of fission yield
///
/// ```rust
/// # use livechart_client::{Field, YieldType};
/// # use std::str::FromStr;
/// let yield_type = YieldType::from_str("cumulative_fy").unwrap();
/// assert_eq!(yield_type, YieldType::Cumulative);
/// assert_eq!(yield_type.field(), Field::CumulativeFy);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YieldType {
    /// Cumulative fission yields (`cumulative_fy`)
    Cumulative,
    /// Independent fission yields (`independent_fy`)
    Independent,
}

impl YieldType {
    /// The field set requested for this yield type
    pub fn field(&self) -> Field {
        match self {
            YieldType::Cumulative => Field::CumulativeFy,
            YieldType::Independent => Field::IndependentFy,
        }
    }
}

impl AsRef<str> for YieldType {
    fn as_ref(&self) -> &str {
        self.field().query_name()
    }
}

impl std::str::FromStr for YieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cumulative_fy" => Ok(YieldType::Cumulative),
            "independent_fy" => Ok(YieldType::Independent),
            _ => Err(Error::InvalidParameter(f!(
                "invalid 'yield_type' \"{s}\", must be one of [cumulative_fy, independent_fy]"
            ))),
        }
    }
}

/// Definition for a particular nuclide
///
/// The `FromStr` trait is implemented and will try to parse a string into
/// a nuclide. Either the mass number or the element may come first, with an
/// optional separator in between:
///
/// - API style 60co, 235U
/// - Element first Co60, u235
/// - Separated Co-60, co_60
///
/// Elements alone are rejected because the API always expects a mass number.
///
/// ```rust
/// # use livechart_client::Nuclide;
/// # use std::str::FromStr;
/// let nuclide = Nuclide::from_str("Co-60").unwrap();
/// assert_eq!(nuclide, Nuclide { symbol: "co".to_string(), mass: 60 });
/// assert_eq!(nuclide.query_name(), "60co");
/// assert_eq!(nuclide.name(), "Co60");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nuclide {
    /// Element symbol, lowercase
    pub symbol: String,
    /// Mass number (Z+N, total nucleons)
    pub mass: u16,
}

impl Nuclide {
    /// Name in the form expected by the `nuclides`, `parents` and `products`
    /// query parameters, e.g. `60co`
    pub fn query_name(&self) -> String {
        f!("{}{}", self.mass, self.symbol.to_lowercase())
    }

    /// A display name with consistent formatting, e.g. `Co60`
    pub fn name(&self) -> String {
        f!("{}{}", capitalise(&self.symbol), self.mass)
    }
}

impl std::str::FromStr for Nuclide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match nuclide_from_str(s.trim()) {
            Ok(("", nuclide)) if nuclide.mass > 0 => Ok(nuclide),
            _ => Err(Error::InvalidParameter(f!(
                "could not interpret \"{s}\" as a nuclide, expected e.g. \"60co\""
            ))),
        }
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Nuclide selection for a query
///
/// The API accepts the pseudo-identifier `all` in place of a nuclide to
/// select the full chart.
///
/// ```rust
/// # use livechart_client::NuclideQuery;
/// # use std::str::FromStr;
/// assert_eq!(NuclideQuery::from_str("ALL").unwrap(), NuclideQuery::All);
/// assert_eq!(NuclideQuery::from_str("u235").unwrap().query_name(), "235u");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NuclideQuery {
    /// Every nuclide in the chart
    All,
    /// A single nuclide
    Single(Nuclide),
}

impl NuclideQuery {
    /// Value for the query string
    pub fn query_name(&self) -> String {
        match self {
            NuclideQuery::All => "all".to_string(),
            NuclideQuery::Single(nuclide) => nuclide.query_name(),
        }
    }
}

impl std::str::FromStr for NuclideQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(NuclideQuery::All)
        } else {
            Ok(NuclideQuery::Single(s.parse()?))
        }
    }
}

impl From<Nuclide> for NuclideQuery {
    fn from(nuclide: Nuclide) -> Self {
        NuclideQuery::Single(nuclide)
    }
}

/// Capitalises the first letter in a string
pub(crate) fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}
