//! Defines helper macros for generating domain port error enums.
//!
//! Each generated enum gets `thiserror` formatting, one snake-case
//! constructor per variant (string-like fields accept `impl Into<_>`), and a
//! `kind()` accessor returning the snake-case variant name for log fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (@pattern $variant:ident) => { Self::$variant };
    (@pattern $variant:ident { $($field:ident : $ty:ty),* }) => { Self::$variant { .. } };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Snake-case variant name, stable for structured log fields.
            pub fn kind(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $(
                            define_port_error!(@pattern $variant $( { $($field : $ty),* } )?) =>
                                stringify!([<$variant:snake>]),
                        )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExampleStoreError {
            Unavailable => "store unavailable",
            Rejected { message: String } => "rejected: {message}",
            Throttled { retry_after_secs: u32 } => "throttled for {retry_after_secs}s",
            Broken { message: String, status: u16 } => "broken: {message} ({status})",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        let err = ExampleStoreError::unavailable();
        assert_eq!(err.to_string(), "store unavailable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExampleStoreError::rejected("bad slug");
        assert_eq!(err.to_string(), "rejected: bad slug");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExampleStoreError::throttled(30_u32);
        assert_eq!(err.to_string(), "throttled for 30s");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExampleStoreError::broken("gateway", 502_u16);
        assert_eq!(err.to_string(), "broken: gateway (502)");
    }

    #[test]
    fn kind_names_the_variant() {
        assert_eq!(ExampleStoreError::unavailable().kind(), "unavailable");
        assert_eq!(ExampleStoreError::rejected("x").kind(), "rejected");
        assert_eq!(ExampleStoreError::broken("x", 1_u16).kind(), "broken");
    }
}
