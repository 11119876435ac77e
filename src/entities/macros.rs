//! Macros for reducing boilerplate when exposing entities to list queries

/// Implement [`Record`](crate::core::record::Record) for a struct
///
/// Each query path maps to a field access chain on the struct, so nested
/// data (`stats.total_spent`) resolves through typed accessors instead of
/// runtime reflection. Values convert through `Into<FieldValue>`; `Option`
/// fields become `Null` when empty. Unknown paths resolve to `None`.
///
/// # Example
///
/// ```rust,ignore
/// use listing::prelude::*;
///
/// impl_record!(
///     Customer,
///     search: ["name", "email"],
///     fields: {
///         "name" => name,
///         "email" => email,
///         "segment" => marketing.customer_segment,
///         "stats.total_spent" => stats.total_spent,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ty,
        search: [ $( $search_field:literal ),* $(,)? ],
        fields: {
            $( $path:literal => $( $member:ident ).+ ),* $(,)?
        }
    ) => {
        impl $crate::core::record::Record for $type {
            fn field_value(&self, path: &str) -> Option<$crate::core::field::FieldValue> {
                match path {
                    $(
                        $path => Some($crate::core::field::FieldValue::from(
                            self.$( $member ).+.clone()
                        )),
                    )*
                    _ => None,
                }
            }

            fn default_search_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }
        }
    };
}

/// Declare a closed set of string-valued states usable as record fields
///
/// Generates the enum with serde names, `as_str`, `Display`, `FromStr`
/// (case-insensitive) and a conversion into `FieldValue::String`.
///
/// # Example
///
/// ```rust,ignore
/// field_enum!(
///     /// Order fulfilment state
///     OrderStatus {
///         Pending => "pending",
///         Shipped => "shipped",
///     }
/// );
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $(
                    if wanted.eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!("unknown {} '{}'", stringify!($name), s))
            }
        }

        impl From<$name> for $crate::core::field::FieldValue {
            fn from(value: $name) -> Self {
                $crate::core::field::FieldValue::String(value.as_str().to_string())
            }
        }
    };
}
