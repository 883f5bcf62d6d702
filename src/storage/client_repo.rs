use crate::domain::animal::Animal;
use crate::domain::appointment::Appointment;
use crate::domain::client::Client;
use crate::error::Result;
use crate::storage::records::{AnimalRecord, AppointmentRecord, ClientRecord};
use sqlx::{Executor, PgConnection, Postgres};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct ClientRepository {}

impl ClientRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Inserts a client. A new client has no animals or appointments yet.
    pub async fn create<'e, E>(&self, executor: E, full_name: &str, email: &str, phone: &str) -> Result<Client>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let record = sqlx::query_as::<_, ClientRecord>(
            r"
            INSERT INTO clients (full_name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, email, phone
            ",
        )
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(record.into_domain(Vec::new(), Vec::new()))
    }

    /// Lists all clients with their animals and appointments attached.
    pub async fn list(&self, conn: &mut PgConnection) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, ClientRecord>(
            r"
            SELECT id, full_name, email, phone
            FROM clients
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&mut *conn)
        .await?;

        if clients.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = clients.iter().map(|c| c.id).collect();

        let animals = sqlx::query_as::<_, AnimalRecord>(
            r"
            SELECT id, client_id, name, species, age
            FROM animals
            WHERE client_id = ANY($1)
            ORDER BY name, id
            ",
        )
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await?;

        let appointments = sqlx::query_as::<_, AppointmentRecord>(
            r"
            SELECT client_id, owner_id, service_id, date, time
            FROM appointments
            WHERE client_id = ANY($1)
            ORDER BY date, time, id
            ",
        )
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await?;

        let mut animals_by_client: HashMap<Uuid, Vec<Animal>> = HashMap::new();
        for animal in animals {
            animals_by_client.entry(animal.client_id).or_default().push(animal.into());
        }

        let mut appointments_by_client: HashMap<Uuid, Vec<Appointment>> = HashMap::new();
        for appointment in appointments {
            appointments_by_client.entry(appointment.client_id).or_default().push(appointment.into());
        }

        Ok(clients
            .into_iter()
            .map(|record| {
                let animals = animals_by_client.remove(&record.id).unwrap_or_default();
                let appointments = appointments_by_client.remove(&record.id).unwrap_or_default();
                record.into_domain(animals, appointments)
            })
            .collect())
    }
}
