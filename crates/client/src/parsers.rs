//! Parser combinators for nuclide identifiers

// internal modules
use crate::common::Nuclide;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, one_of};
use nom::combinator::opt;
use nom::error::{Error, ErrorKind};
use nom::{Err, IResult};

/// Parse string into a Nuclide
///
/// Can be:
///     - Mass first 60co, 235U (the API convention)
///     - Element first Co60, u235
///     - Either with a separator Co-60, 60_co
///
/// An element on its own is returned with a mass of 0 and left for the
/// caller to reject.
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, Nuclide> {
    alt((mass_first, element_first))(i)
}

fn mass_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, mass) = mass(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, element) = element(i)?;

    Ok((
        i,
        Nuclide {
            symbol: element.to_lowercase(),
            mass,
        },
    ))
}

fn element_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, element) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass) = opt(mass)(i)?;

    Ok((
        i,
        Nuclide {
            symbol: element.to_lowercase(),
            mass: mass.unwrap_or(0),
        },
    ))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (rest, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((rest, element))
    }
}

/// Get the mass number
fn mass(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}
