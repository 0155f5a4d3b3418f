use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Copy, Clone)]
#[repr(transparent)]
#[schema(value_type = String)]
pub struct VilleId(#[serde(serialize_with = "obj_id_serialize")] ObjectId);

fn obj_id_serialize<S>(id: &ObjectId, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    id.to_hex().serialize(ser)
}

impl VilleId {
    pub fn new(id: ObjectId) -> Self {
        Self(id)
    }
}

impl Deref for VilleId {
    type Target = ObjectId;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<VilleId> for Bson {
    fn from(value: VilleId) -> Self {
        value.0.into()
    }
}

impl Display for VilleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_hex_string() {
        let oid = ObjectId::new();
        let id = VilleId::new(oid);

        let value = serde_json::to_value(id).unwrap();

        assert_eq!(value, json!(oid.to_hex()));
    }

    #[test]
    fn display_matches_hex() {
        let oid = ObjectId::new();

        assert_eq!(VilleId::new(oid).to_string(), oid.to_hex());
    }
}
