use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub client_id: Uuid,
    pub owner_id: Uuid,
    pub service_id: Uuid,
    pub date: String,
    pub time: String,
}
