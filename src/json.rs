use crate::model::LatLng;
use crate::Plotter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ingest cap; a polyline document beyond this is rejected rather than
/// replayed marker by marker.
pub(crate) const MAX_VERTICES: usize = 4096;

pub(crate) fn to_json_impl(p: &Plotter) -> Value {
    #[derive(Serialize)]
    struct DocSer {
        version: u32,
        latlngs: Vec<[f64; 2]>,
    }
    let latlngs = p
        .latlngs()
        .iter()
        .map(|ll| [ll.lat, ll.lng])
        .collect::<Vec<_>>();
    serde_json::to_value(DocSer {
        version: 1,
        latlngs,
    })
    .unwrap_or(Value::Null)
}

// Strict variant: returns rich error codes instead of an empty list.
pub(crate) fn latlngs_from_json_strict(v: Value) -> Result<Vec<LatLng>, (&'static str, String)> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        latlngs: Vec<[f64; 2]>,
    }
    let doc: DocDe = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;
    if let Some(ver) = doc.version {
        if ver != 1 {
            return Err(("unsupported_version", format!("version {}", ver)));
        }
    }
    if doc.latlngs.len() > MAX_VERTICES {
        return Err(("caps_exceeded", format!("latlngs>{}", MAX_VERTICES)));
    }
    Ok(doc
        .latlngs
        .into_iter()
        .map(|[lat, lng]| LatLng { lat, lng })
        .collect())
}
