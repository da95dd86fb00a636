//! Session command parsing
//!
//! Every input line of the browse session becomes a `SessionCommand`. Lines
//! starting with `/` are commands; anything else replaces the search query.

use crate::listing::PropertyType;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing or applying a session command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown command '/{0}' (type /help for a list)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),

    #[error("Expected yes, no or any, got '{0}'")]
    InvalidFlag(String),

    #[error("Expected on or off, got '{0}'")]
    InvalidToggle(String),

    #[error("{0}")]
    InvalidPropertyType(String),

    #[error("No listing with id '{0}'")]
    UnknownListing(String),
}

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the query text
    Query(String),
    /// Clear the query text
    ClearQuery,
    /// Set the price range
    Price { min: u32, max: u32 },
    /// Minimum bedrooms (`None` clears)
    Beds(Option<u32>),
    /// Minimum bathrooms (`None` clears)
    Baths(Option<u32>),
    /// Accepted property types (empty clears)
    Types(Vec<PropertyType>),
    /// Toggle a required amenity
    Amenity(String),
    /// List amenity labels present in the catalog
    Amenities,
    /// Pet policy (`None` = any)
    Pets(Option<bool>),
    /// Furnished status (`None` = any)
    Furnished(Option<bool>),
    /// Parking requirement
    Parking(bool),
    /// Criteria back to defaults
    Reset,
    /// Toggle favorite on a listing
    Favorite(String),
    /// Detail view of a listing
    Show(String),
    /// Explain why a listing is or isn't in the results
    Why(String),
    /// List favorites
    Favorites,
    /// Show the active query and criteria
    Filters,
    Help,
    Quit,
}

/// Text shown by `/help`
pub const HELP: &str = "\
Type any text to search titles, addresses and cities.

  /clear                 clear the search text
  /price MIN MAX         monthly rent range (inclusive)
  /beds N|any            minimum bedrooms
  /baths N|any           minimum bathrooms
  /type TYPE...          apartment, house, condo, townhouse (none = any)
  /amenity LABEL         toggle a required amenity
  /amenities             list known amenity labels
  /pets yes|no|any       pet policy
  /furnished yes|no|any  furnished status
  /parking on|off        require a parking space
  /reset                 reset all filters
  /fav ID                toggle favorite
  /show ID               listing details
  /why ID                explain why a listing is hidden
  /favorites             list favorites
  /filters               show active filters
  /help                  this help
  /quit                  leave";

fn parse_number(arg: &str) -> Result<u32, SessionError> {
    arg.parse()
        .map_err(|_| SessionError::InvalidNumber(arg.to_string()))
}

fn parse_threshold(arg: Option<&str>, usage: &'static str) -> Result<Option<u32>, SessionError> {
    match arg {
        None => Err(SessionError::Usage(usage)),
        Some(a) if a.eq_ignore_ascii_case("any") => Ok(None),
        Some(a) => parse_number(a).map(Some),
    }
}

fn parse_tri_state(arg: Option<&str>, usage: &'static str) -> Result<Option<bool>, SessionError> {
    let arg = arg.ok_or(SessionError::Usage(usage))?;
    match arg.to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(Some(true)),
        "no" | "n" | "false" => Ok(Some(false)),
        "any" => Ok(None),
        _ => Err(SessionError::InvalidFlag(arg.to_string())),
    }
}

fn parse_toggle(arg: Option<&str>) -> Result<bool, SessionError> {
    let arg = arg.ok_or(SessionError::Usage("/parking on|off"))?;
    match arg.to_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(SessionError::InvalidToggle(arg.to_string())),
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, SessionError> {
    if rest.is_empty() {
        Err(SessionError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(body) = line.trim_start().strip_prefix('/') else {
            return Ok(Self::Query(line.to_string()));
        };

        let (name, rest) = body
            .split_once(char::is_whitespace)
            .map_or((body, ""), |(n, r)| (n, r.trim()));
        let mut args = rest.split_whitespace();

        match name.to_lowercase().as_str() {
            "clear" => Ok(Self::ClearQuery),
            "price" => {
                let (Some(min), Some(max)) = (args.next(), args.next()) else {
                    return Err(SessionError::Usage("/price MIN MAX"));
                };
                Ok(Self::Price {
                    min: parse_number(min)?,
                    max: parse_number(max)?,
                })
            }
            "beds" => parse_threshold(args.next(), "/beds N|any").map(Self::Beds),
            "baths" => parse_threshold(args.next(), "/baths N|any").map(Self::Baths),
            "type" | "types" => args
                .map(|a| a.parse::<PropertyType>().map_err(SessionError::InvalidPropertyType))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Types),
            "amenity" => required(rest, "/amenity LABEL").map(Self::Amenity),
            "amenities" => Ok(Self::Amenities),
            "pets" => parse_tri_state(args.next(), "/pets yes|no|any").map(Self::Pets),
            "furnished" => parse_tri_state(args.next(), "/furnished yes|no|any").map(Self::Furnished),
            "parking" => parse_toggle(args.next()).map(Self::Parking),
            "reset" => Ok(Self::Reset),
            "fav" => required(rest, "/fav ID").map(Self::Favorite),
            "show" => required(rest, "/show ID").map(Self::Show),
            "why" => required(rest, "/why ID").map(Self::Why),
            "favorites" => Ok(Self::Favorites),
            "filters" => Ok(Self::Filters),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}
