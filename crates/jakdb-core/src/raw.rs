// crates/jakdb-core/src/raw.rs
use serde::{Deserialize, Deserializer};

/// Raw facility structure as it comes from the source JSON.
/// NOTE: This type mirrors the external dataset export. Field values are
/// messy by nature; ids and coordinates arrive as numbers or strings
/// depending on which spreadsheet column they were pasted from.
/// We do *not* expose this type from the public API.
#[derive(Debug, Default, Deserialize)]
pub struct FacilityRaw {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(rename = "jakName", default)]
    pub jak_name: Option<String>,
    #[serde(rename = "institutionName", default)]
    pub institution_name: Option<String>,
    #[serde(rename = "jakCode", default)]
    pub jak_code: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(rename = "healthBlock", default)]
    pub health_block: Option<String>,
    #[serde(default)]
    pub constituency: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ninid: Option<String>,
}

pub type FacilitiesRaw = Vec<FacilityRaw>;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

/// Accepts a JSON number, a numeric string (trimmed), or null.
/// Anything unparseable becomes `None`; malformed records never fail a load.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<NumOrStr>::deserialize(deserializer)?;
    Ok(v.and_then(|v| match v {
        NumOrStr::Num(f) => Some(f),
        NumOrStr::Str(s) => s.trim().parse::<f64>().ok(),
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRaw {
    Num(i64),
    Str(String),
}

/// Accepts an integer or string id; normalized to its string form.
fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<IdRaw>::deserialize(deserializer)?;
    Ok(v.map(|v| match v {
        IdRaw::Num(n) => n.to_string(),
        IdRaw::Str(s) => s,
    }))
}
