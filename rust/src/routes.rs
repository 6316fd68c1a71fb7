//! Route table and path codec.
//!
//! Navigation paths are the only wire format in the app: a screen is
//! formatted as a route name plus percent-encoded path segments, and parsed
//! back when navigation is requested through a path.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::state::{ProfileParams, Screen};

/// Literal substituted for any display parameter that is absent from the
/// path or does not decode cleanly.
pub const NOT_PROVIDED: &str = "Not Provided";

pub const ROUTE_HOME: &str = "home";
pub const ROUTE_PROFILE_FORM: &str = "profile_form";
pub const ROUTE_PROFILE_DISPLAY: &str = "profile_display";

// Everything except ASCII alphanumerics and the RFC 3986 unreserved marks is
// encoded, so `/`, `?`, `#`, `%`, and spaces are all safe inside a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RouteError {
    #[error("unknown route: {path}")]
    UnknownRoute { path: String },
    #[error("malformed route path: {path}")]
    MalformedPath { path: String },
}

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Decodes one path segment. A segment that doesn't decode to valid UTF-8
/// falls back to the placeholder rather than surfacing an error.
pub fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(s) => s.into_owned(),
        Err(_) => NOT_PROVIDED.to_string(),
    }
}

pub fn route_path(screen: &Screen) -> String {
    match screen {
        Screen::Home => ROUTE_HOME.to_string(),
        Screen::ProfileForm { prefill: None } => ROUTE_PROFILE_FORM.to_string(),
        Screen::ProfileForm { prefill: Some(p) } => {
            format!("{ROUTE_PROFILE_FORM}/{}", encode_params(p))
        }
        Screen::ProfileDisplay { params } => {
            format!("{ROUTE_PROFILE_DISPLAY}/{}", encode_params(params))
        }
    }
}

pub fn parse_route_path(path: &str) -> Result<Screen, RouteError> {
    let mut parts = path.split('/');
    let head = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();
    match head {
        ROUTE_HOME if rest.is_empty() => Ok(Screen::Home),
        ROUTE_PROFILE_FORM if rest.is_empty() => Ok(Screen::ProfileForm { prefill: None }),
        ROUTE_PROFILE_FORM if rest.len() <= 5 => Ok(Screen::ProfileForm {
            prefill: Some(decode_params(&rest)),
        }),
        ROUTE_PROFILE_DISPLAY if rest.len() <= 5 => Ok(Screen::ProfileDisplay {
            params: decode_params(&rest),
        }),
        ROUTE_HOME | ROUTE_PROFILE_FORM | ROUTE_PROFILE_DISPLAY => {
            Err(RouteError::MalformedPath {
                path: path.to_string(),
            })
        }
        _ => Err(RouteError::UnknownRoute {
            path: path.to_string(),
        }),
    }
}

fn encode_params(p: &ProfileParams) -> String {
    [&p.name, &p.email, &p.phone, &p.age, &p.gender]
        .map(|field| encode_segment(field))
        .join("/")
}

/// Each parameter defaults independently: a missing trailing segment becomes
/// the placeholder, while a present-but-empty segment decodes to the empty
/// string, so submitted-empty stays distinguishable from never-supplied.
fn decode_params(segments: &[&str]) -> ProfileParams {
    let seg = |i: usize| {
        segments
            .get(i)
            .map(|s| decode_segment(s))
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    };
    ProfileParams {
        name: seg(0),
        email: seg(1),
        phone: seg(2),
        age: seg(3),
        gender: seg(4),
    }
}
