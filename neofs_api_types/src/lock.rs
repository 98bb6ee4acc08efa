use crate::grpc;
use crate::refs::ObjectId;

stable_message! {
    /// Objects protected from removal.
    pub struct Lock => grpc::lock::Lock {
        members: Vec<ObjectId> = 1 => repeated_message,
    }
}
