use sqlx::PgPool;

use student_portal::config::cors::CorsConfig;
use student_portal::router::init_router;
use student_portal::state::AppState;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Inserts a student row with address rows directly, bypassing the API.
/// Returns the assigned student id.
#[allow(dead_code)]
pub async fn seed_student(
    pool: &PgPool,
    name: &str,
    student_class: &str,
    age: i32,
    addresses: &[(&str, &str, &str)],
) -> i64 {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO students (name, student_class, age) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(student_class)
    .bind(age)
    .fetch_one(pool)
    .await
    .unwrap();

    for &(flat_no, city, state) in addresses {
        sqlx::query("INSERT INTO addresses (flat_no, city, state, student_id) VALUES ($1, $2, $3, $4)")
            .bind(flat_no)
            .bind(city)
            .bind(state)
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    id
}

#[allow(dead_code)]
pub async fn count_addresses(pool: &PgPool, student_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM addresses WHERE student_id = $1")
        .bind(student_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
