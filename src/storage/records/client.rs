use crate::domain::animal::Animal;
use crate::domain::appointment::Appointment;
use crate::domain::client::Client;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct ClientRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ClientRecord {
    pub(crate) fn into_domain(self, animals: Vec<Animal>, appointments: Vec<Appointment>) -> Client {
        Client {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            animals,
            appointments,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct AnimalRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub species: String,
    pub age: i32,
}

impl From<AnimalRecord> for Animal {
    fn from(record: AnimalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            species: record.species,
            age: record.age,
            client_id: record.client_id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct AppointmentRecord {
    pub client_id: Uuid,
    pub owner_id: Uuid,
    pub service_id: Uuid,
    pub date: String,
    pub time: String,
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        Self {
            client_id: record.client_id,
            owner_id: record.owner_id,
            service_id: record.service_id,
            date: record.date,
            time: record.time,
        }
    }
}
