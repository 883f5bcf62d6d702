use crate::domain::appointment::Appointment;
use crate::domain::service::Service;
use uuid::Uuid;

/// A groomer offering services.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub career: String,
    pub services: Vec<Service>,
    pub appointments: Vec<Appointment>,
}
