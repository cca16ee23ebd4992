//! Open string enumerations.
//!
//! The metering API encodes statuses and units as bare strings. The server
//! may add values at any time, so every enumeration keeps a fallback variant
//! carrying the raw string. Unrecognized values decode without error and are
//! written back exactly as received.
//!
//! # Macro-based enum types
//!
//! The `string_enum!` macro generates, for each enumeration:
//! - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
//! - `Serialize`, `Deserialize` (as string)
//! - `FromStr` (infallible), `Display`
//! - `From<String>`, `From<&str>`, `Into<String>`
//! - `as_str()` and `is_known()`
//!
//! # Example
//!
//! ```
//! metering_core::string_enum! {
//!     /// Traffic light colour.
//!     pub enum Light {
//!         /// Stop.
//!         Red => "RED",
//!         /// Go.
//!         Green => "GREEN",
//!     } else Unrecognized
//! }
//!
//! assert_eq!(Light::from("RED"), Light::Red);
//! assert_eq!(Light::from("BLUE").as_str(), "BLUE");
//! ```

/// Define a string-backed enumeration with a fallback for unknown values.
///
/// The crate using this macro must depend on `serde`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        } else $fallback:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not recognized by this client, kept verbatim.
            $fallback(String),
        }

        impl $name {
            /// Return the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::$fallback(raw) => raw.as_str(),
                }
            }

            /// Whether this is one of the documented values.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::$fallback(_))
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                let known = match value.as_str() {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                };
                known.unwrap_or_else(|| Self::$fallback(value))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::$fallback(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::string_enum! {
        /// Test enumeration.
        pub enum Sample {
            /// First.
            Alpha => "ALPHA",
            /// Second.
            Beta => "BETA",
        } else Unknown
    }

    #[test]
    fn known_values_parse() {
        assert_eq!(Sample::from("ALPHA"), Sample::Alpha);
        assert_eq!("BETA".parse::<Sample>(), Ok(Sample::Beta));
        assert!(Sample::Alpha.is_known());
    }

    #[test]
    fn unknown_values_are_kept() {
        let value = Sample::from("GAMMA");
        assert_eq!(value, Sample::Unknown("GAMMA".to_string()));
        assert!(!value.is_known());
        assert_eq!(value.to_string(), "GAMMA");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Sample::from("alpha"), Sample::Unknown("alpha".to_string()));
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&Sample::Beta).unwrap();
        assert_eq!(json, "\"BETA\"");

        let parsed: Vec<Sample> = serde_json::from_str(r#"["ALPHA","DELTA"]"#).unwrap();
        assert_eq!(parsed, vec![Sample::Alpha, Sample::Unknown("DELTA".to_string())]);

        let back = serde_json::to_string(&parsed).unwrap();
        assert_eq!(back, r#"["ALPHA","DELTA"]"#);
    }
}
