//! SQLite-backed record store for investments.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use nestegg_core::errors::{DatabaseError, Error};
use nestegg_core::investments::{
    Investment, InvestmentRepositoryTrait, InvestmentUpdate, NewInvestment,
};
use nestegg_core::Result;

use super::model::InvestmentRow;
use crate::errors::IntoCore;

/// Record store over a single `investments` table.
///
/// The connection sits behind a mutex; every method takes the lock for the
/// duration of its statement, so callers need no coordination of their own.
pub struct SqliteInvestmentRepository {
    conn: Mutex<Connection>,
}

impl SqliteInvestmentRepository {
    pub fn new(conn: Connection) -> Self {
        SqliteInvestmentRepository {
            conn: Mutex::new(conn),
        }
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<InvestmentRow> {
        Ok(InvestmentRow {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
            data: row.get(3)?,
        })
    }

    fn load_row(conn: &Connection, investment_id: &str) -> Result<InvestmentRow> {
        conn.query_row(
            "SELECT id, name, created_at, data FROM investments WHERE id = ?1",
            params![investment_id],
            Self::map_row,
        )
        .optional()
        .into_core()?
        .ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "Investment '{}' not found",
                investment_id
            )))
        })
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for SqliteInvestmentRepository {
    fn load_investments(&self) -> Result<Vec<Investment>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, name, created_at, data FROM investments ORDER BY created_at DESC")
            .into_core()?;
        let rows = stmt.query_map([], Self::map_row).into_core()?;

        let mut investments = Vec::new();
        for row in rows {
            investments.push(row.into_core()?.into_domain()?);
        }
        Ok(investments)
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        let conn = self.conn.lock().unwrap();
        Self::load_row(&conn, investment_id)?.into_domain()
    }

    async fn insert_new_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        let investment = Investment {
            id: new_investment
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_investment.name,
            created_at: Utc::now().timestamp_millis(),
            details: new_investment.details,
        };
        let investment_row = InvestmentRow::from_domain(&investment)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO investments (id, name, created_at, data) VALUES (?1, ?2, ?3, ?4)",
            params![
                investment_row.id,
                investment_row.name,
                investment_row.created_at,
                investment_row.data
            ],
        )
        .into_core()?;

        debug!("Inserted investment {}", investment.id);
        Ok(investment)
    }

    async fn update_investment(&self, investment_update: InvestmentUpdate) -> Result<Investment> {
        let conn = self.conn.lock().unwrap();
        let current = Self::load_row(&conn, &investment_update.id)?.into_domain()?;

        // id and created_at are immutable; only the editable fields move.
        let investment = Investment {
            id: current.id,
            name: investment_update.name,
            created_at: current.created_at,
            details: investment_update.details,
        };
        let investment_row = InvestmentRow::from_domain(&investment)?;

        conn.execute(
            "UPDATE investments SET name = ?2, data = ?3 WHERE id = ?1",
            params![investment_row.id, investment_row.name, investment_row.data],
        )
        .into_core()?;

        Ok(investment)
    }

    async fn delete_investment(&self, investment_id: String) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute(
                "DELETE FROM investments WHERE id = ?1",
                params![investment_id],
            )
            .into_core()?;
        Ok(deleted)
    }
}
