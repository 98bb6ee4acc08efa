use super::refs::ObjectId;

#[derive(Clone, PartialEq, prost::Message)]
pub struct MeasuredObject {
    #[prost(message, optional, tag = "1")]
    pub id: Option<ObjectId>,
    #[prost(uint32, tag = "2")]
    pub size: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Link {
    #[prost(message, repeated, tag = "1")]
    pub children: Vec<MeasuredObject>,
}
