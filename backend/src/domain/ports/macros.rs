//! Helper macro for adapter-facing error enums.

/// Generate a `thiserror` enum whose variants all carry a free-form
/// `message`, plus a snake_case convenience constructor per variant.
macro_rules! define_adapter_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )+
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_adapter_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_adapter_error! {
        pub enum ExampleAdapterError {
            Offline => "backend offline: {message}",
            Rejected => "request rejected: {message}",
        }
    }

    #[test]
    fn constructors_accept_anything_stringy() {
        let err = ExampleAdapterError::offline("socket closed");
        assert_eq!(err.to_string(), "backend offline: socket closed");
    }

    #[test]
    fn variants_compare_by_content() {
        assert_eq!(
            ExampleAdapterError::rejected("nope"),
            ExampleAdapterError::Rejected {
                message: "nope".to_owned()
            }
        );
    }
}
