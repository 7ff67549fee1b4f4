//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::domain::entity::{leaderboard::LeaderboardEntry, user::User};
use crate::domain::repository::{LeaderboardRepository, UserRepository};
use crate::domain::value_object::{
    score::Score, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// What [`SqliteUserRepository::migrate`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// The `users` table did not exist and was created
    pub created_table: bool,
    /// Columns added to an existing table
    pub added_columns: Vec<String>,
    /// A legacy `password` column was renamed to `password_hash`
    pub renamed_legacy_password: bool,
}

impl MigrationReport {
    /// Whether the schema was already up to date
    pub fn is_noop(&self) -> bool {
        !self.created_table && self.added_columns.is_empty() && !self.renamed_legacy_password
    }
}

/// Columns added to older tables, with their definitions
const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("best_score", "REAL NOT NULL DEFAULT 0.0"),
    ("created_at", "TEXT"),
    ("updated_at", "TEXT"),
];

/// SQLite-backed account store
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` (e.g. `sqlite://users.db?mode=rwc`)
    pub async fn connect(database_url: &str, max_connections: u32) -> AccountResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(database_url)
            .await?;

        tracing::info!(max_connections, "Connected to account database");

        Ok(Self::new(pool))
    }

    /// Private in-memory database
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to one connection that never expires.
    pub async fn in_memory() -> AccountResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Bring the `users` table up to the current schema
    ///
    /// Safe to run on every start. Tables created by older deployments keep
    /// their rows; missing columns are added with their defaults.
    pub async fn migrate(&self) -> AccountResult<MigrationReport> {
        let mut report = MigrationReport::default();
        let mut tx = self.pool.begin().await?;

        let exists: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
        )
        .fetch_one(&mut *tx)
        .await?;

        if exists == 0 {
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    username TEXT UNIQUE NOT NULL,
                    password_hash TEXT NOT NULL,
                    best_score REAL NOT NULL DEFAULT 0.0,
                    created_at TEXT,
                    updated_at TEXT
                )
                "#,
            )
            .execute(&mut *tx)
            .await?;
            report.created_table = true;
        } else {
            let columns: Vec<String> =
                sqlx::query_scalar("SELECT name FROM pragma_table_info('users')")
                    .fetch_all(&mut *tx)
                    .await?;
            let has = |name: &str| columns.iter().any(|c| c == name);

            if has("password") && !has("password_hash") {
                sqlx::query("ALTER TABLE users RENAME COLUMN password TO password_hash")
                    .execute(&mut *tx)
                    .await?;
                report.renamed_legacy_password = true;
            }

            for (name, definition) in ADDITIVE_COLUMNS {
                if has(name) {
                    continue;
                }
                sqlx::query(&format!("ALTER TABLE users ADD COLUMN {name} {definition}"))
                    .execute(&mut *tx)
                    .await?;
                report.added_columns.push((*name).to_string());
            }
        }

        tx.commit().await?;

        if report.is_noop() {
            tracing::debug!("Account schema up to date");
        } else {
            tracing::info!(
                created_table = report.created_table,
                added_columns = ?report.added_columns,
                renamed_legacy_password = report.renamed_legacy_password,
                "Migrated account schema"
            );
        }

        Ok(report)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> AccountResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username,
                password_hash,
                best_score,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.best_score.value())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AccountError::UserNameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                password_hash,
                COALESCE(best_score, 0.0) AS best_score,
                created_at,
                updated_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn best_score(&self, user_name: &UserName) -> AccountResult<Option<Score>> {
        let score: Option<f64> =
            sqlx::query_scalar("SELECT COALESCE(best_score, 0.0) FROM users WHERE username = ?1")
                .bind(user_name.as_str())
                .fetch_optional(&self.pool)
                .await?;

        score.map(stored_score).transpose()
    }

    async fn record_score(&self, user_name: &UserName, candidate: Score) -> AccountResult<bool> {
        let rows = sqlx::query(
            r#"
            UPDATE users
            SET best_score = ?1, updated_at = ?2
            WHERE username = ?3 AND COALESCE(best_score, 0.0) < ?1
            "#,
        )
        .bind(candidate.value())
        .bind(Utc::now())
        .bind(user_name.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows > 0)
    }

    async fn update_password_hash(
        &self,
        user_name: &UserName,
        password_hash: &UserPassword,
    ) -> AccountResult<()> {
        sqlx::query("UPDATE users SET password_hash = ?1, updated_at = ?2 WHERE username = ?3")
            .bind(password_hash.as_str())
            .bind(Utc::now())
            .bind(user_name.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Leaderboard Repository Implementation
// ============================================================================

impl LeaderboardRepository for SqliteUserRepository {
    async fn top_scores(&self, limit: u32) -> AccountResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT username, COALESCE(best_score, 0.0) AS best_score
            FROM users
            ORDER BY best_score DESC, username ASC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn count_users(&self) -> AccountResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
    best_score: f64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let user_name = UserName::from_db(self.username)
            .map_err(|e| AccountError::Internal(format!("Invalid username: {}", e)))?;

        let password_hash = UserPassword::from_db(self.password_hash)?;

        Ok(User {
            user_name,
            password_hash,
            best_score: stored_score(self.best_score)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    username: String,
    best_score: f64,
}

impl LeaderboardRow {
    fn into_entry(self) -> AccountResult<LeaderboardEntry> {
        let user_name = UserName::from_db(self.username)
            .map_err(|e| AccountError::Internal(format!("Invalid username: {}", e)))?;

        Ok(LeaderboardEntry {
            user_name,
            best_score: stored_score(self.best_score)?,
        })
    }
}

fn stored_score(value: f64) -> AccountResult<Score> {
    Score::new(value).map_err(|e| AccountError::Internal(format!("Invalid best_score: {}", e)))
}
