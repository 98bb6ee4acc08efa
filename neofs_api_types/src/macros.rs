//! Each message is declared once, as a table of `field: Type = number => kind` rows in
//! ascending field-number order. From that table [`stable_message!`] derives
//! the struct, its stable encoding, the transport conversions, and the JSON mapping,
//! so the field numbers live in exactly one place.
//!
//! `kind` names a module under [`crate::field`]. A row ending in `as "jsonName"` overrides
//! the lowerCamelCase JSON key.

macro_rules! stable_message {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $grpc:path {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty = $num:literal => $kind:ident $(as $json:literal)?,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Clone, Default, Debug)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        impl ::neofs_api_proto::StableSize for $name {
            fn stable_size(&self) -> usize {
                0 $( + $crate::field::$kind::size($num, &self.$field) )+
            }
        }

        impl ::neofs_api_proto::StableMarshal for $name {
            fn stable_marshal_into(&self, buf: &mut [u8]) -> ::neofs_api_proto::Result<usize> {
                let mut offset = 0;
                $(
                    offset += $crate::field::$kind::marshal($num, &mut buf[offset..], &self.$field)?;
                )+
                Ok(offset)
            }
        }

        impl $crate::convert::IntoGrpc for $name {
            type Grpc = $grpc;

            fn to_grpc(&self) -> $grpc {
                $grpc {
                    $( $field: $crate::field::$kind::to_grpc(&self.$field), )+
                }
            }
        }

        impl $crate::convert::FromGrpc for $name {
            fn from_grpc(grpc: $grpc) -> ::neofs_api_proto::Result<Self> {
                Ok(Self {
                    $( $field: $crate::field::$kind::from_grpc(grpc.$field)?, )+
                })
            }
        }

        impl $crate::json::ToJson for $name {
            fn to_json(&self) -> ::serde_json::Value {
                let mut obj = ::serde_json::Map::new();
                $(
                    let key = $crate::json::Key::new(stringify!($field)) $(.renamed($json))?;
                    $crate::field::$kind::write_json(&mut obj, key, &self.$field);
                )+
                ::serde_json::Value::Object(obj)
            }
        }

        impl $crate::json::FromJson for $name {
            fn from_json(value: &::serde_json::Value) -> ::neofs_api_proto::Result<Self> {
                let obj = $crate::json::expect_object(value, stringify!($name))?;
                Ok(Self {
                    $(
                        $field: $crate::field::$kind::read_json(
                            obj,
                            $crate::json::Key::new(stringify!($field)) $(.renamed($json))?,
                        )?,
                    )+
                })
            }
        }
    };
}

/// A wire enum. The first variant must be the zero value; it is the default.
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $proto_name:literal {
            $first:ident = $first_v:literal => $first_str:literal,
            $( $var:ident = $v:literal => $var_str:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
        pub enum $name {
            #[default]
            $first,
            $( $var, )*
            /// A value not declared here, as received.
            Unknown(i32),
        }

        impl $crate::enums::ProtoEnum for $name {
            const NAME: &'static str = $proto_name;

            fn value(self) -> i32 {
                match self {
                    Self::$first => $first_v,
                    $( Self::$var => $v, )*
                    Self::Unknown(v) => v,
                }
            }

            fn from_value(value: i32) -> Self {
                match value {
                    $first_v => Self::$first,
                    $( $v => Self::$var, )*
                    v => Self::Unknown(v),
                }
            }

            fn as_str_name(self) -> Option<&'static str> {
                match self {
                    Self::$first => Some($first_str),
                    $( Self::$var => Some($var_str), )*
                    Self::Unknown(_) => None,
                }
            }

            fn from_str_name(name: &str) -> Option<Self> {
                match name {
                    $first_str => Some(Self::$first),
                    $( $var_str => Some(Self::$var), )*
                    _ => None,
                }
            }
        }
    };
}

/// A oneof, declared as `Variant(Type) = number => member_kind as json_key` rows.
///
/// `member_kind` names a module under [`crate::field::member`]. The transport enum must
/// use the same variant names.
macro_rules! stable_oneof {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $($grpc:ident)::+ {
            $(
                $var:ident($vty:ty) = $num:literal => $kind:ident as $key:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Clone, Debug)]
        pub enum $name {
            $( $var($vty), )+
        }

        impl ::neofs_api_proto::StableSize for $name {
            fn stable_size(&self) -> usize {
                match self {
                    $( Self::$var(v) => $crate::field::member::$kind::size($num, v), )+
                }
            }
        }

        impl ::neofs_api_proto::StableMarshal for $name {
            fn stable_marshal_into(&self, buf: &mut [u8]) -> ::neofs_api_proto::Result<usize> {
                match self {
                    $( Self::$var(v) => $crate::field::member::$kind::marshal($num, buf, v), )+
                }
            }
        }

        impl $crate::convert::IntoGrpc for $name {
            type Grpc = $($grpc)::+;

            fn to_grpc(&self) -> Self::Grpc {
                type G = $($grpc)::+;
                match self {
                    $( Self::$var(v) => G::$var($crate::field::member::$kind::to_grpc(v)), )+
                }
            }
        }

        impl $crate::convert::FromGrpc for $name {
            fn from_grpc(grpc: Self::Grpc) -> ::neofs_api_proto::Result<Self> {
                type G = $($grpc)::+;
                Ok(match grpc {
                    $( G::$var(v) => Self::$var($crate::field::member::$kind::from_grpc(v)?), )+
                })
            }
        }

        impl $crate::field::Oneof for $name {
            fn write_json(&self, obj: &mut ::serde_json::Map<String, ::serde_json::Value>) {
                match self {
                    $(
                        Self::$var(v) => {
                            let value = $crate::field::member::$kind::to_json(v);
                            $crate::field::insert(obj, stringify!($key), value);
                        }
                    )+
                }
            }

            fn read_json(
                obj: &::serde_json::Map<String, ::serde_json::Value>,
            ) -> ::neofs_api_proto::Result<Option<Self>> {
                let mut found = None;
                $(
                    if let Some(v) = $crate::json::lookup(obj, stringify!($key)) {
                        if found.is_some() {
                            return Err(::neofs_api_proto::Error::json(format!(
                                "{}: more than one member set",
                                stringify!($name)
                            )));
                        }
                        found = Some(Self::$var($crate::field::member::$kind::from_json(v)?));
                    }
                )+
                Ok(found)
            }
        }
    };
}
