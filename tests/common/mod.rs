use sqlx::SqlitePool;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use trivia_api::db::queries::questions::create_question;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub api_client: reqwest::Client,
    // dropping this deletes the database file
    _db_file: NamedTempFile,
}

pub async fn spawn_app() -> TestApp {
    let db_file = NamedTempFile::new().expect("Failed to create temp database");
    let pool = configure_database(db_file.path().to_str().expect("db path is not utf-8")).await;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let _ = tokio::spawn(run_server(listener, pool.clone()));

    TestApp {
        address,
        db_pool: pool,
        api_client: reqwest::Client::new(),
        _db_file: db_file,
    }
}

// Migrations seed the six categories; questions start empty.
async fn configure_database(path: &str) -> SqlitePool {
    let pool = establish_connection(path)
        .await
        .expect("Failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("Failed to migrate database");
    pool
}

#[allow(dead_code)]
pub async fn seed_question(
    app: &TestApp,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> i64 {
    create_question(&app.db_pool, question, answer, category, difficulty)
        .await
        .expect("Failed to seed question")
}

#[allow(dead_code)]
pub async fn seed_questions(app: &TestApp, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        let id = seed_question(
            app,
            &format!("seeded question {n}"),
            &format!("seeded answer {n}"),
            category,
            1,
        )
        .await;
        ids.push(id);
    }
    ids
}
