/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns its value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

// Serialize a HexMap as a list instead of a map. Hexes generally shouldn't be
// used as serialized map keys, since JSON and other formats don't support
// complex keys.
pub mod hex_map_to_vec_serde {
    use crate::{HasHexPosition, HexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a hex map as a list
    pub fn serialize<T, S>(
        map: &HexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for tile in map.values() {
            seq.serialize_element(tile)?;
        }
        seq.end()
    }

    /// Deserialize a list of values into a map. The deserialized type must
    /// implement [HasHexPosition] so that we can derive a [Hex](crate::Hex)
    /// for each element to use as its map key.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<HexMap<T>, D::Error>
    where
        T: Deserialize<'de> + HasHexPosition,
        D: Deserializer<'de>,
    {
        let vec: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(vec
            .into_iter()
            .map(|element| (element.position(), element))
            .collect())
    }
}
