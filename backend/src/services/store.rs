//! Read-only access to the inventory records store
//!
//! The store is owned by the wider inventory system; this adapter only
//! mirrors the reads the forecasting engine needs. Quantities are summed in
//! SQL and cast to BIGINT since lots and movements carry integer amounts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use shared::{DailyOutflow, LotTally};

use crate::error::{AppError, AppResult};

/// Read-side store adapter for products, lots and stock movements
#[derive(Clone)]
pub struct StockStore {
    db: PgPool,
}

/// Display metadata for a product
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductMetadata {
    pub name: String,
    pub unit: Option<String>,
    pub unit_price: Option<Decimal>,
}

impl StockStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All product ids, in stable id order
    pub async fn product_ids(&self) -> AppResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM products ORDER BY id")
            .fetch_all(&self.db)
            .await?;
        Ok(ids)
    }

    /// Name, unit and unit price of a product
    pub async fn product_metadata(&self, product_id: i64) -> AppResult<ProductMetadata> {
        sqlx::query_as::<_, ProductMetadata>(
            "SELECT name, unit, unit_price FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }

    /// Current stock: sum of quantities over lots with quantity > 0
    pub async fn stock_of(&self, product_id: i64) -> AppResult<Decimal> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM lots WHERE product_id = $1 AND quantity > 0",
        )
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;
        Ok(Decimal::from(total))
    }

    /// Daily aggregated outbound movements since a date, chronological
    ///
    /// Outflow matching is a case-insensitive prefix test on the movement
    /// kind label, so decorated labels still count.
    pub async fn outflow_series(
        &self,
        product_id: i64,
        since: NaiveDate,
    ) -> AppResult<Vec<DailyOutflow>> {
        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT m.moved_on, COALESCE(SUM(m.quantity), 0)::BIGINT as total
            FROM stock_movements m
            JOIN lots l ON l.id = m.lot_id
            WHERE l.product_id = $1
              AND m.moved_on >= $2
              AND m.kind ILIKE 'outflow%'
            GROUP BY m.moved_on
            ORDER BY m.moved_on
            "#,
        )
        .bind(product_id)
        .bind(since)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, total)| DailyOutflow {
                date,
                total: Decimal::from(total),
            })
            .collect())
    }

    /// Expiration date of the earliest-expiring lot with stock, if any
    ///
    /// Lots without an expiration date sort last; a product whose only
    /// stocked lots carry no date yields None.
    pub async fn oldest_lot_expiry(&self, product_id: i64) -> AppResult<Option<NaiveDate>> {
        let row = sqlx::query_scalar::<_, Option<NaiveDate>>(
            r#"
            SELECT expires_on FROM lots
            WHERE product_id = $1 AND quantity > 0
            ORDER BY expires_on ASC NULLS LAST
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.flatten())
    }

    /// Count and total quantity of expired lots still holding stock
    pub async fn expired_lots(&self, product_id: i64, as_of: NaiveDate) -> AppResult<LotTally> {
        let (lots, quantity) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(quantity), 0)::BIGINT
            FROM lots
            WHERE product_id = $1 AND expires_on < $2 AND quantity > 0
            "#,
        )
        .bind(product_id)
        .bind(as_of)
        .fetch_one(&self.db)
        .await?;
        Ok(LotTally { lots, quantity })
    }

    /// Count and total quantity of lots expiring within the horizon
    /// (inclusive), still holding stock
    pub async fn soon_expiring_lots(
        &self,
        product_id: i64,
        as_of: NaiveDate,
        horizon_days: i64,
    ) -> AppResult<LotTally> {
        let until = as_of + chrono::Days::new(horizon_days.max(0) as u64);
        let (lots, quantity) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(quantity), 0)::BIGINT
            FROM lots
            WHERE product_id = $1
              AND expires_on >= $2
              AND expires_on <= $3
              AND quantity > 0
            "#,
        )
        .bind(product_id)
        .bind(as_of)
        .bind(until)
        .fetch_one(&self.db)
        .await?;
        Ok(LotTally { lots, quantity })
    }
}
