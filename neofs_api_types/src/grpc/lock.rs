use super::refs::ObjectId;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Lock {
    #[prost(message, repeated, tag = "1")]
    pub members: Vec<ObjectId>,
}
