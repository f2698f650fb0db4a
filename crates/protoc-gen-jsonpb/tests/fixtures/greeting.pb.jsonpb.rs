// Code generated by protoc-gen-jsonpb. DO NOT EDIT.
// source: greeting.proto

const _: () = {
    #[allow(unused_imports)]
    use self::greeting as pkg;
    #[allow(unused_imports)]
    use ::prost_reflect::{DynamicMessage, ReflectMessage};
    #[allow(unused_imports)]
    use ::serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    impl Serialize for pkg::Greeting {
        fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.transcode_to_dynamic().serialize(serializer)
        }
    }
    impl<'de> Deserialize<'de> for pkg::Greeting {
        fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let descriptor = Self::default().descriptor();
            DynamicMessage::deserialize(descriptor, deserializer)?
                .transcode_to::<Self>()
                .map_err(D::Error::custom)
        }
    }
    impl Serialize for pkg::Farewell {
        fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.transcode_to_dynamic().serialize(serializer)
        }
    }
    impl<'de> Deserialize<'de> for pkg::Farewell {
        fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let descriptor = Self::default().descriptor();
            DynamicMessage::deserialize(descriptor, deserializer)?
                .transcode_to::<Self>()
                .map_err(D::Error::custom)
        }
    }
};
