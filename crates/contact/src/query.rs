use bittencourt_db::table::ContactMessage;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Default, Clone, FromRow)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
}

impl ContactRow {
    pub fn created_at(&self) -> String {
        bittencourt_shared::format_timestamp(self.created_at)
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            ContactMessage::Id,
            ContactMessage::Name,
            ContactMessage::Email,
            ContactMessage::Phone,
            ContactMessage::Message,
            ContactMessage::CreatedAt,
        ])
        .from(ContactMessage::Table)
        .to_owned()
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<ContactRow>> {
        let statement = select()
            .and_where(Expr::col(ContactMessage::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Most recent submissions first.
    pub async fn list(&self, limit: u64) -> anyhow::Result<Vec<ContactRow>> {
        let statement = select()
            .order_by(ContactMessage::CreatedAt, Order::Desc)
            .order_by(ContactMessage::Id, Order::Desc)
            .limit(limit)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(ContactMessage::Id)))
            .from(ContactMessage::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total.try_into()?)
    }
}
