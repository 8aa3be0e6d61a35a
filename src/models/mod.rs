use serde::{Deserialize, Deserializer, Serialize};

// `null` binds like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One species entry within a fishing result
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Catch {
    #[serde(default, deserialize_with = "null_as_default", alias = "Fish_Name", alias = "FISH_NAME")]
    pub fish_name: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "Quantity", alias = "QUANTITY")]
    pub quantity: i64,
}

impl Catch {
    pub fn new(fish_name: impl Into<String>, quantity: i64) -> Self {
        Catch {
            fish_name: fish_name.into(),
            quantity,
        }
    }
}

/// Per-angler record addressed by an externally assigned id
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FishingResult {
    #[serde(default, deserialize_with = "null_as_default", alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "Angler", alias = "ANGLER")]
    pub angler: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "Results", alias = "RESULTS")]
    pub results: Vec<Catch>,
}

impl FishingResult {
    pub fn new(id: impl Into<String>, angler: impl Into<String>, results: Vec<Catch>) -> Self {
        FishingResult {
            id: id.into(),
            angler: angler.into(),
            results,
        }
    }

    /// First catch entry whose species matches `fish_name`
    pub fn catch_mut(&mut self, fish_name: &str) -> Option<&mut Catch> {
        self.results.iter_mut().find(|c| c.fish_name == fish_name)
    }
}
