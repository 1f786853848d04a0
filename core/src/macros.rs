//! Declarative helpers for request objects and model registration.

/// Declares a request object and its builder.
///
/// Every field is optional and serialized only when set, so the generated
/// types never put unset filters on the wire. Fields listed under `path` are
/// substituted into the request path and never serialized.
///
/// ```ignore
/// request! {
///     /// Find webhooks by name.
///     pub struct FindWebhooksRequest => FindWebhooksRequestBuilder {
///         limit: i64,
///         name: String,
///     }
/// }
/// ```
macro_rules! request {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            path {
                $( $pfield:ident : $pty:ty ),* $(,)?
            }
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(skip)]
                pub(crate) $pfield: Option<$pty>,
            )*
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub(crate) $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            $(
                pub fn $pfield(&self) -> Option<&$pty> {
                    self.$pfield.as_ref()
                }
            )*

            $(
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            request: $name,
        }

        impl $builder {
            $(
                pub fn $pfield(mut self, value: impl Into<$pty>) -> Self {
                    self.request.$pfield = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.request.$field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> $name {
                self.request
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        request! {
            $(#[$meta])*
            pub struct $name => $builder {
                path {}
                $(
                    $(#[$fmeta])*
                    $field : $ty
                ),*
            }
        }
    };
}

/// Binds model types to their `ResourceKind`.
macro_rules! impl_model {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::model_type::Model for $ty {
                const KIND: $crate::model_type::ResourceKind =
                    $crate::model_type::ResourceKind::$kind;
            }
        )*
    };
}
