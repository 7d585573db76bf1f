use crate::crs::projection::{GenericSrs, Projection};
use crate::crs::service::GeodeticService;
use log::debug;

/// A system identifier: either a code string or a numeric EPSG id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrsCode {
    Code(String),
    Epsg(u32),
}

impl SrsCode {
    /// The code string; numeric ids become `"EPSG:<id>"`.
    pub fn normalized(&self) -> String {
        match self {
            SrsCode::Code(code) => code.clone(),
            SrsCode::Epsg(id) => format!("EPSG:{}", id),
        }
    }
}

impl From<&str> for SrsCode {
    fn from(code: &str) -> Self {
        SrsCode::Code(code.to_string())
    }
}

impl From<String> for SrsCode {
    fn from(code: String) -> Self {
        SrsCode::Code(code)
    }
}

impl From<u32> for SrsCode {
    fn from(id: u32) -> Self {
        SrsCode::Epsg(id)
    }
}

/// Matches the obfuscated-system spellings, case-sensitive.
fn obfuscated(code: &str, exact: bool) -> Option<Projection> {
    match code {
        "EPSG:BDMC" | "EPSG:BD09MC" | "BD09MC" => Some(Projection::Bd09Mercator),
        "EPSG:GCJ02MC" | "GCJ02MC" => Some(Projection::Gcj02Mercator),
        "EPSG:BD09" | "BD09" => Some(Projection::Bd09 { exact }),
        "EPSG:GCJ02" | "GCJ02" => Some(Projection::Gcj02 { exact }),
        _ => None,
    }
}

/// Resolves `id` to a [`Projection`].
///
/// Obfuscated-system codes are matched first; everything else is handed to
/// `service` unchanged. Returns `None` when the service does not know the
/// code.
pub fn resolve_with(
    id: impl Into<SrsCode>,
    exact: bool,
    service: &dyn GeodeticService,
) -> Option<Projection> {
    let code = id.into().normalized();

    if let Some(projection) = obfuscated(&code, exact) {
        return Some(projection);
    }

    if !service.recognizes(&code) {
        debug!("{} is not known to the geodetic service", code);
        return None;
    }

    debug!("delegating {} to the geodetic service", code);
    let latlong = service.is_geographic(&code);
    Some(Projection::Srs(GenericSrs::new(code, latlong)))
}
