//! `PostgreSQL` ticket store implementation.
//!
//! Uses a sqlx connection pool. The sale transition relies on per-row write
//! atomicity of a single `UPDATE ... WHERE id = $1 AND is_sold = FALSE`:
//! under any isolation level Postgres offers, exactly one concurrent caller
//! can observe `is_sold = FALSE` and apply the update; everyone else matches
//! zero rows. No application-level locking is needed.

use crate::config::PostgresConfig;
use crate::error::{Result, TicketError};
use crate::store::TicketStore;
use crate::types::{NewTicket, Ticket};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// `PostgreSQL`-backed ticket store.
#[derive(Clone)]
pub struct PostgresTicketStore {
    /// Connection pool, shared across handlers.
    pool: PgPool,
}

impl PostgresTicketStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a new pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Database`] if the pool cannot be established.
    pub async fn connect(config: &PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| TicketError::Database(format!("Failed to connect: {e}")))?;

        Ok(Self::from_pool(pool))
    }

    /// Create the tickets table if it does not exist yet.
    ///
    /// Idempotent; run once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Database`] if schema creation fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tickets (
                id      BIGSERIAL PRIMARY KEY,
                price   BIGINT  NOT NULL,
                is_sold BOOLEAN NOT NULL DEFAULT FALSE,
                sold_to TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| TicketError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Tickets schema ready");
        Ok(())
    }
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    async fn list_all(&self) -> Result<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            r"
            SELECT id, price, is_sold, sold_to
            FROM tickets
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TicketError::Database(format!("Failed to list tickets: {e}")))
    }

    async fn create(&self, new: NewTicket) -> Result<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r"
            INSERT INTO tickets (price, is_sold, sold_to)
            VALUES ($1, $2, $3)
            RETURNING id, price, is_sold, sold_to
            ",
        )
        .bind(new.price)
        .bind(new.is_sold)
        .bind(&new.sold_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TicketError::Database(format!("Failed to create ticket: {e}")))?;

        tracing::info!(ticket_id = ticket.id, price = ticket.price, "Ticket created");
        Ok(ticket)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            r"
            SELECT id, price, is_sold, sold_to
            FROM tickets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TicketError::Database(format!("Failed to get ticket: {e}")))
    }

    async fn mark_sold_if_unsold(&self, id: i64, buyer: &str) -> Result<bool> {
        // Single conditional write. The WHERE clause carries both the id and
        // the unsold precondition, so concurrent buyers of the same ticket
        // resolve at the storage layer: one update matches, the rest report
        // zero rows affected.
        let result = sqlx::query(
            r"
            UPDATE tickets
            SET is_sold = TRUE,
                sold_to = $2
            WHERE id = $1 AND is_sold = FALSE
            ",
        )
        .bind(id)
        .bind(buyer)
        .execute(&self.pool)
        .await
        .map_err(|e| TicketError::Database(format!("Failed to mark ticket sold: {e}")))?;

        Ok(result.rows_affected() == 1)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| TicketError::Database(format!("Ping failed: {e}")))?;
        Ok(())
    }
}
