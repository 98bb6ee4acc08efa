use std::fmt::Debug;

/// An open set of wire values, carried as int32.
///
/// Values outside the declared variants decode to the `Unknown(i32)` arm and re-encode to
/// the same varint. Use `proto_enum!` to define one.
pub trait ProtoEnum: Copy + Eq + Default + Debug + 'static {
    /// Fully qualified protobuf name, for error messages.
    const NAME: &'static str;

    fn value(self) -> i32;

    fn from_value(value: i32) -> Self;

    /// The protobuf identifier, as used by the JSON mapping. `None` for unknown values.
    fn as_str_name(self) -> Option<&'static str>;

    fn from_str_name(name: &str) -> Option<Self>;

    fn is_known(self) -> bool {
        self.as_str_name().is_some()
    }
}
