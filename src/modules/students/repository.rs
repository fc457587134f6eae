//! Persistence gateway for students and their owned addresses.
//!
//! All writes that touch a student together with its child rows run inside a
//! single transaction, so a partially written address list is never
//! observable.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::modules::students::model::{Address, Student};

pub struct StudentRepository;

impl StudentRepository {
    /// Persists the entity and returns it with every identity assigned.
    ///
    /// An entity without a key is inserted; an entity with a key has its
    /// scalar columns overwritten and its address collection replaced
    /// wholesale (the previous child rows are deleted, not merged).
    pub async fn save(db: &PgPool, student: &Student) -> Result<Student, sqlx::Error> {
        let mut tx = db.begin().await?;

        let student_id = match student.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE students SET name = $1, student_class = $2, age = $3 WHERE id = $4",
                )
                .bind(&student.name)
                .bind(&student.student_class)
                .bind(student.age)
                .bind(id)
                .execute(&mut *tx)
                .await?;

                sqlx::query("DELETE FROM addresses WHERE student_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                id
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO students (name, student_class, age)
                     VALUES ($1, $2, $3)
                     RETURNING id",
                )
                .bind(&student.name)
                .bind(&student.student_class)
                .bind(student.age)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        let mut addresses = Vec::with_capacity(student.addresses.len());
        for address in &student.addresses {
            let address_id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO addresses (flat_no, city, state, student_id)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id",
            )
            .bind(&address.flat_no)
            .bind(&address.city)
            .bind(&address.state)
            .bind(student_id)
            .fetch_one(&mut *tx)
            .await?;

            addresses.push(Address {
                id: Some(address_id),
                flat_no: address.flat_no.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                student_id: Some(student_id),
            });
        }

        tx.commit().await?;

        Ok(Student {
            id: Some(student_id),
            name: student.name.clone(),
            student_class: student.student_class.clone(),
            age: student.age,
            addresses,
        })
    }

    /// Looks up a student by key. Absence is a normal outcome, not an error.
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Student>, sqlx::Error> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, student_class, age FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        match student {
            Some(mut student) => {
                student.addresses = Self::addresses_for(db, id).await?;
                Ok(Some(student))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(db: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let students =
            sqlx::query_as::<_, Student>("SELECT id, name, student_class, age FROM students ORDER BY id")
                .fetch_all(db)
                .await?;

        Self::attach_addresses(db, students).await
    }

    /// Paginated class filter. `offset` is already 0-based.
    pub async fn find_by_class(
        db: &PgPool,
        student_class: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, student_class, age FROM students
             WHERE student_class = $1
             ORDER BY id
             LIMIT $2 OFFSET $3",
        )
        .bind(student_class)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        Self::attach_addresses(db, students).await
    }

    /// Unpaginated class filter.
    pub async fn find_all_by_class(
        db: &PgPool,
        student_class: &str,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, student_class, age FROM students
             WHERE student_class = $1
             ORDER BY id",
        )
        .bind(student_class)
        .fetch_all(db)
        .await?;

        Self::attach_addresses(db, students).await
    }

    pub async fn exists_by_id(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(db)
            .await
    }

    /// Deletes the row; owned addresses go with it via the foreign-key
    /// cascade. Callers check existence first.
    pub async fn delete_by_id(db: &PgPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    async fn addresses_for(db: &PgPool, student_id: i64) -> Result<Vec<Address>, sqlx::Error> {
        sqlx::query_as::<_, Address>(
            "SELECT id, flat_no, city, state, student_id FROM addresses
             WHERE student_id = $1
             ORDER BY id",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
    }

    /// Loads the address rows for a batch of students in one query and
    /// distributes them to their owners.
    async fn attach_addresses(
        db: &PgPool,
        mut students: Vec<Student>,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let ids: Vec<i64> = students.iter().filter_map(|s| s.id).collect();
        if ids.is_empty() {
            return Ok(students);
        }

        let rows = sqlx::query_as::<_, Address>(
            "SELECT id, flat_no, city, state, student_id FROM addresses
             WHERE student_id = ANY($1)
             ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(db)
        .await?;

        let mut by_owner: HashMap<i64, Vec<Address>> = HashMap::new();
        for address in rows {
            if let Some(owner) = address.student_id {
                by_owner.entry(owner).or_default().push(address);
            }
        }

        for student in &mut students {
            if let Some(id) = student.id {
                student.addresses = by_owner.remove(&id).unwrap_or_default();
            }
        }

        Ok(students)
    }
}
