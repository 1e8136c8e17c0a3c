//! Closed option sets that travel as human-readable labels.

/// Declare an enum whose variants serialize, display and parse as fixed
/// labels (e.g. `"Deep Cleaning"`, `"In Progress"`).
///
/// The generated type gets `ALL` (declaration order), `label()`, `Display`,
/// serde support through the labels, and a `FromStr` that trims surrounding
/// whitespace and then requires an exact label match. Unknown input is mapped
/// to an error by the supplied constructor.
///
/// The calling crate must depend on `serde`.
#[macro_export]
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $err:ty = $unknown:expr ;
        {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == wanted)
                    .ok_or_else(|| ($unknown)(s.to_string()))
            }
        }
    };
}
