use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: i32,
    /// Owning client.
    pub client_id: Uuid,
}
