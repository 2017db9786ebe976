/// Declare a quantity tag with its unit catalog, the standard unit going first.
///
/// `absolute: Alias` marks the quantity as having a positioned form and names `Abs<Tag>`.
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $tag:ident,
        name: $name:literal,
        units: [$standard:ident $(, $unit:ident)* $(,)?]
        $(, absolute: $(#[$absolute_meta:meta])* $absolute:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $tag {}

        impl $crate::Quantity for $tag {
            const NAME: &'static str = $name;
            const STANDARD_UNIT: $crate::Unit<Self> = $standard;
            const UNITS: &'static [$crate::Unit<Self>] = &[$standard $(, $unit)*];
        }

        $(
            impl $crate::AbsoluteQuantity for $tag {}

            $(#[$absolute_meta])*
            pub type $absolute = $crate::Abs<$tag>;
        )?
    };
}

macro_rules! product {
    ($($lhs:ident * $rhs:ident => $output:ident;)+) => {
        $(
            impl $crate::Product<$rhs> for $lhs {
                type Output = $output;
            }
        )+
    };
}

macro_rules! quotient {
    ($($lhs:ident / $rhs:ident => $output:ident;)+) => {
        $(
            impl $crate::Quotient<$rhs> for $lhs {
                type Output = $output;
            }
        )+
    };
}
