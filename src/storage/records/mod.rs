pub mod client;

pub(crate) use client::{AnimalRecord, AppointmentRecord, ClientRecord};
