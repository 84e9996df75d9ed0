/// Generates a stack-attribute identifier enum.
///
/// Each variant carries a stable serde key (the wire/contract string, e.g.
/// "nextjs") and a human display name (e.g. "Next.js"). A `Custom(String)`
/// variant absorbs unknown keys on deserialization so that identifiers
/// persisted by a newer version never fail to load here.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal : $display_name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_key(&s).unwrap_or(Self::Custom(s)))
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $enum_name {
            /// Stable identifier key (contract string, never renamed).
            pub fn key(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $key,
                    )*
                    Self::Custom(name) => name,
                }
            }

            /// Human-readable display name.
            pub fn name(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                    Self::Custom(name) => name,
                }
            }

            /// Resolve a known variant from its stable key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $(
                        $key => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            /// All built-in variants, in declaration order.
            pub fn all_variants() -> &'static [Self] {
                const VARIANTS: &[$enum_name] = &[
                    $(
                        $enum_name::$variant,
                    )*
                ];
                VARIANTS
            }
        }
    };
}
