use crate::domain::animal::Animal;
use crate::domain::appointment::Appointment;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub animals: Vec<Animal>,
    pub appointments: Vec<Appointment>,
}
