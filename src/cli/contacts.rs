use bittencourt::Config;
use bittencourt_contact::Query;

pub async fn list(config: &Config, limit: u64) -> anyhow::Result<()> {
    let pool = bittencourt::db::create_pool(&config.database.url, 1).await?;
    bittencourt_db::migrate(&pool).await?;

    let query = Query(pool.clone());
    let total = query.count().await?;
    let rows = query.list(limit).await?;

    println!("{} of {} contact submissions", rows.len(), total);

    for row in rows {
        println!();
        println!("{}  {}", row.id, row.created_at());
        println!("  {} <{}>", row.name, row.email);
        if let Some(phone) = &row.phone {
            println!("  tel: {phone}");
        }
        println!("  {}", row.message);
    }

    pool.close().await;

    Ok(())
}
