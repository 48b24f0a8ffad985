/// Implement `Serialize` and `Deserialize` by routing through the generic
/// form, so serde users get exactly the codec's behaviour.
macro_rules! generic_serde {
    ($($ty:ty),+ $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::Error as _;
                let value = openapi_graph_common::Codec::to_generic(self)
                    .map_err(S::Error::custom)?;
                serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error as _;
                // Any-keyed first: YAML maps may carry non-string keys
                let raw = <serde_yaml::Value as serde::Deserialize>::deserialize(deserializer)?;
                let value = openapi_graph_common::normalize(raw);
                <$ty as openapi_graph_common::Codec>::from_generic(&value)
                    .map_err(D::Error::custom)
            }
        }
    )+};
}
