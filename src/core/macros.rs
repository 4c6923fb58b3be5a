//! Macros for declaring entity state enums.

/// Declare a state enum and generate its `State` implementation.
///
/// Extra attributes (for example additional derives) are forwarded to the
/// generated enum. Variants listed under `final:` report `is_final() == true`.
///
/// # Example
///
/// ```
/// use traffic_lights::core::State;
/// use traffic_lights::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Gate {
///         Open,
///         Closed,
///         Dismantled,
///     }
///     final: [Dismantled]
/// }
///
/// assert_eq!(Gate::Open.name(), "Open");
/// assert!(Gate::Dismantled.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
