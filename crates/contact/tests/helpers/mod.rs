use std::{path::PathBuf, str::FromStr};

use bittencourt_contact::SubmitFormInput;
use bittencourt_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_string_lossy()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    bittencourt_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn valid_input(name: impl Into<String>) -> SubmitFormInput {
    let name = name.into();

    SubmitFormInput {
        email: Some(format!("{name}@bittencourt.localhost")),
        name: Some(name),
        phone: None,
        message: Some("Gostaria de agendar uma consulta.".to_owned()),
    }
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &bittencourt_contact::Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let id = cmd.submit_form(valid_input(name)).await?;
        ids.push(id);
    }

    Ok(ids)
}
