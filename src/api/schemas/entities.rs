//! Wire projections of the domain entities.
//!
//! Each projection copies exactly its documented field set from the entity as
//! it is at call time. Nested collections go through their own projection.

use crate::domain::animal::Animal;
use crate::domain::appointment::Appointment;
use crate::domain::client::Client;
use crate::domain::owner::Owner;
use crate::domain::service::Service;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub animals: Vec<AnimalResponse>,
    pub appointments: Vec<AppointmentResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub career: String,
    pub services: Vec<ServiceResponse>,
    pub appointments: Vec<AppointmentResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: i32,
    pub client: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub client_id: Uuid,
    pub owner_id: Uuid,
    pub service_id: Uuid,
    pub date: String,
    pub time: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            full_name: client.full_name,
            email: client.email,
            phone: client.phone,
            animals: client.animals.into_iter().map(Into::into).collect(),
            appointments: client.appointments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self { id: service.id, name: service.name, description: service.description, price: service.price }
    }
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            full_name: owner.full_name,
            phone: owner.phone,
            email: owner.email,
            career: owner.career,
            services: owner.services.into_iter().map(Into::into).collect(),
            appointments: owner.appointments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Animal> for AnimalResponse {
    fn from(animal: Animal) -> Self {
        Self { id: animal.id, name: animal.name, species: animal.species, age: animal.age, client: animal.client_id }
    }
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            client_id: appointment.client_id,
            owner_id: appointment.owner_id,
            service_id: appointment.service_id,
            date: appointment.date,
            time: appointment.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn appointment(client_id: Uuid, owner_id: Uuid, service_id: Uuid) -> Appointment {
        Appointment { client_id, owner_id, service_id, date: "2024-06-01".into(), time: "09:30".into() }
    }

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_client_projection_copies_exact_fields() {
        let client_id = Uuid::new_v4();
        let animal = Animal {
            id: Uuid::new_v4(),
            name: "Biscuit".into(),
            species: "Dog".into(),
            age: 4,
            client_id,
        };
        let appt = appointment(client_id, Uuid::new_v4(), Uuid::new_v4());
        let client = Client {
            id: client_id,
            full_name: "Ana Lopez".into(),
            email: "ana@example.com".into(),
            phone: "555-0100".into(),
            animals: vec![animal.clone()],
            appointments: vec![appt.clone()],
        };

        let response = ClientResponse::from(client.clone());

        assert_eq!(response.id, client.id);
        assert_eq!(response.full_name, client.full_name);
        assert_eq!(response.email, client.email);
        assert_eq!(response.phone, client.phone);
        assert_eq!(response.animals, vec![AnimalResponse::from(animal)]);
        assert_eq!(response.appointments, vec![AppointmentResponse::from(appt)]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(keys(&json), vec!["animals", "appointments", "email", "fullName", "id", "phone"]);
    }

    #[test]
    fn test_owner_projection_copies_exact_fields() {
        let service = Service { id: Uuid::new_v4(), name: "Bath".into(), description: "Full wash".into(), price: 35.5 };
        let owner = Owner {
            id: Uuid::new_v4(),
            full_name: "Sam Reyes".into(),
            phone: "555-0101".into(),
            email: "sam@example.com".into(),
            career: "Groomer".into(),
            services: vec![service.clone()],
            appointments: vec![],
        };

        let response = OwnerResponse::from(owner.clone());

        assert_eq!(response.id, owner.id);
        assert_eq!(response.career, "Groomer");
        assert_eq!(response.services, vec![ServiceResponse::from(service)]);
        assert!(response.appointments.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            keys(&json),
            vec!["appointments", "career", "email", "fullName", "id", "phone", "services"]
        );
    }

    #[test]
    fn test_leaf_projections() {
        let service = ServiceResponse::from(Service {
            id: Uuid::nil(),
            name: "Nails".into(),
            description: "Trim".into(),
            price: 12.0,
        });
        assert_eq!(keys(&serde_json::to_value(&service).unwrap()), vec!["description", "id", "name", "price"]);

        let owner_id = Uuid::new_v4();
        let animal = AnimalResponse::from(Animal {
            id: Uuid::nil(),
            name: "Milo".into(),
            species: "Cat".into(),
            age: 2,
            client_id: owner_id,
        });
        assert_eq!(animal.client, owner_id);
        assert_eq!(keys(&serde_json::to_value(&animal).unwrap()), vec!["age", "client", "id", "name", "species"]);

        let appt = AppointmentResponse::from(appointment(Uuid::nil(), Uuid::nil(), Uuid::nil()));
        assert_eq!(appt.date, "2024-06-01");
        assert_eq!(
            keys(&serde_json::to_value(&appt).unwrap()),
            vec!["clientId", "date", "ownerId", "serviceId", "time"]
        );
    }
}
