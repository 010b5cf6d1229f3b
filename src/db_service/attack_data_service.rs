use crate::models::attack_data::NewAttackData;
use crate::schemas::amm_cost_of_attack_data;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Postgres caps a statement at 65535 bind parameters; a row binds 7
const INSERT_CHUNK_SIZE: usize = 5_000;

/// Writes swap trials to `amm_cost_of_attack_data`
pub struct AttackDataService;

impl AttackDataService {
    /// Inserts a batch of trials in a single transaction.
    ///
    /// # Arguments
    /// * `conn` - Database connection
    /// * `rows` - Rows to insert
    ///
    /// # Returns
    /// Number of inserted rows
    ///
    /// # Errors
    /// * If any insert fails; nothing of the batch is kept in that case
    pub fn insert_batch(
        conn: &mut PgConnection,
        rows: &[NewAttackData],
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            let mut inserted = 0;
            for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                inserted += diesel::insert_into(amm_cost_of_attack_data::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
