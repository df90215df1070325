//! Client operations for each field set

// standard library
use std::format as f;

// internal modules
use crate::common::{symbol_list, Field, NuclideQuery, RadType, YieldType};
use crate::error::{Error, Result};
use crate::interpret::interpret;
use crate::query::Query;
use crate::table::Table;
use crate::transport::{Config, HttpTransport, Transport};

// external crates
use log::debug;

/// Client for the IAEA Live Chart of Nuclides data download API
///
/// Every operation validates its arguments first and fails without touching
/// the network if they are obviously wrong. Otherwise exactly one request is
/// sent and the response is interpreted into a [Table] or a typed [Error].
/// Nothing is retried.
///
/// ```rust, no_run
/// # use livechart_client::LiveChartClient;
/// let client = LiveChartClient::new().unwrap();
///
/// let co60 = client.ground_states("60co").unwrap();
/// let row = co60.row(0).unwrap();
/// println!("Z = {:?}, T1/2 = {:?} s", row.get("z"), row.get("half_life_sec"));
/// ```
///
/// The client owns its transport, and [HttpTransport] keeps one connection
/// pool for the lifetime of the client. Any other [Transport] can be plugged
/// in with [LiveChartClient::with_transport].
#[derive(Debug, Clone)]
pub struct LiveChartClient<T = HttpTransport> {
    transport: T,
}

impl LiveChartClient<HttpTransport> {
    /// Client for the public API with the default [Config]
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Client using custom connection settings
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> LiveChartClient<T> {
    /// Client sending requests through any [Transport]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a query and return the raw response body
    ///
    /// No interpretation is done, so API error codes come back as text.
    pub fn request(&self, query: &Query) -> Result<String> {
        self.transport.get(query)
    }

    /// Send a query and interpret the response
    pub fn query(&self, query: &Query) -> Result<Table> {
        debug!(
            "Requesting '{}' with {} parameters",
            query.get("fields").unwrap_or("none"),
            query.len()
        );
        interpret(&self.request(query)?)
    }

    /// Ground state properties
    ///
    /// Use `"all"` for every nuclide in the chart.
    pub fn ground_states(&self, nuclide: &str) -> Result<Table> {
        self.nuclide_query(Field::GroundStates, nuclide)
    }

    /// Excited levels of a nuclide
    pub fn levels(&self, nuclide: &str) -> Result<Table> {
        self.nuclide_query(Field::Levels, nuclide)
    }

    /// Gamma transitions between the levels of a nuclide
    pub fn gammas(&self, nuclide: &str) -> Result<Table> {
        self.nuclide_query(Field::Gammas, nuclide)
    }

    /// Decay radiation of a given type
    ///
    /// The radiation type may be a [RadType] or its symbol, one of
    /// `a`, `bp`, `bm`, `g`, `e`, `x`.
    ///
    /// ```rust, no_run
    /// # use livechart_client::{LiveChartClient, RadType};
    /// let client = LiveChartClient::new().unwrap();
    /// let gammas = client.decay_rads("60co", RadType::Gamma).unwrap();
    /// let alphas = client.decay_rads("241am", "a").unwrap();
    /// ```
    pub fn decay_rads<R: AsRef<str>>(&self, nuclide: &str, rad_type: R) -> Result<Table> {
        let rad_type = allowed_rad_type(rad_type.as_ref(), &RadType::ALL, "decay radiation")?;
        let query = Query::new(Field::DecayRads)
            .with("nuclides", nuclide_name(nuclide)?)
            .with("rad_types", rad_type.query_symbol());
        self.query(&query)
    }

    /// Binned beta spectra
    ///
    /// Only beta+ (`bp`) and beta- (`bm`) are valid radiation types. The
    /// optional `metastable_seqno` selects the decay of an excited parent.
    pub fn beta_spectra<R: AsRef<str>>(
        &self,
        nuclide: &str,
        rad_type: R,
        metastable_seqno: Option<u32>,
    ) -> Result<Table> {
        let rad_type = allowed_rad_type(rad_type.as_ref(), &RadType::BETA, "beta spectra")?;
        let mut query = Query::new(Field::BetaSpectra)
            .with("nuclides", nuclide_name(nuclide)?)
            .with("rad_types", rad_type.query_symbol());
        if let Some(seqno) = metastable_seqno {
            query.set("metastable_seqno", seqno);
        }
        self.query(&query)
    }

    /// Fission yields by parent, product, or both
    ///
    /// The yield type may be a [YieldType] or its name, `cumulative_fy` or
    /// `independent_fy`. At least one of `parent` and `product` is required,
    /// and empty strings count as not given.
    ///
    /// ```rust, no_run
    /// # use livechart_client::LiveChartClient;
    /// let client = LiveChartClient::new().unwrap();
    /// let u235 = client.fission_yields("cumulative_fy", Some("235u"), None).unwrap();
    /// ```
    pub fn fission_yields<Y: AsRef<str>>(
        &self,
        yield_type: Y,
        parent: Option<&str>,
        product: Option<&str>,
    ) -> Result<Table> {
        let yield_type: YieldType = yield_type.as_ref().parse()?;

        let parent = parent.map(str::trim).filter(|p| !p.is_empty());
        let product = product.map(str::trim).filter(|p| !p.is_empty());
        if parent.is_none() && product.is_none() {
            return Err(Error::MissingParameter(
                "at least one of 'parent' or 'product' must be specified for fission yields"
                    .to_string(),
            ));
        }

        let mut query = Query::new(yield_type.field());
        if let Some(parent) = parent {
            query.set("parents", nuclide_name(parent)?);
        }
        if let Some(product) = product {
            query.set("products", nuclide_name(product)?);
        }
        self.query(&query)
    }

    fn nuclide_query(&self, field: Field, nuclide: &str) -> Result<Table> {
        let query = Query::new(field).with("nuclides", nuclide_name(nuclide)?);
        self.query(&query)
    }
}

/// Normalise a nuclide argument to the form the API expects
fn nuclide_name(nuclide: &str) -> Result<String> {
    Ok(nuclide.parse::<NuclideQuery>()?.query_name())
}

/// Parse a radiation type and check it against an operation's allowed set
fn allowed_rad_type(symbol: &str, allowed: &[RadType], context: &str) -> Result<RadType> {
    match symbol.parse::<RadType>() {
        Ok(rad_type) if allowed.contains(&rad_type) => Ok(rad_type),
        _ => Err(Error::InvalidParameter(f!(
            "invalid 'rad_type' \"{symbol}\" for {context}, must be one of {}",
            symbol_list(allowed)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuclide_names_are_normalised() {
        assert_eq!(nuclide_name("Co-60").unwrap(), "60co");
        assert_eq!(nuclide_name("ALL").unwrap(), "all");
        assert!(nuclide_name("cobalt").is_err());
    }

    #[test]
    fn beta_spectra_only_allow_beta() {
        assert_eq!(
            allowed_rad_type("bm", &RadType::BETA, "beta spectra").unwrap(),
            RadType::BetaMinus
        );

        let err = allowed_rad_type("g", &RadType::BETA, "beta spectra").unwrap_err();
        assert!(err.to_string().contains("[bm, bp]"));
    }
}
