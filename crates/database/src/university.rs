//! University read/search/insert operations.

use sqlx::SqlitePool;
use tracing::warn;

use crate::error::Result;
use crate::models::{NewUniversity, University, UniversityCard, UniversityRow};

/// Decode a JSON list column.
///
/// Invariant: a list field always decodes to a list. NULL, empty, or
/// malformed values degrade to an empty vec, never an error.
pub fn parse_json_list(value: Option<&str>) -> Vec<String> {
    let Some(raw) = value else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(err) => {
            warn!(error = %err, "Malformed JSON list column, degrading to empty");
            Vec::new()
        }
    }
}

impl From<UniversityRow> for University {
    fn from(row: UniversityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
            kind: row.kind,
            rating: row.rating,
            tuition_fee: row.tuition_fee,
            programs: parse_json_list(row.programs.as_deref()),
            languages: parse_json_list(row.languages.as_deref()),
            international_score: row.international_score,
            employment_rate: row.employment_rate,
            reviews: parse_json_list(row.reviews.as_deref()),
            image_url: row.image_url,
            description: row.description,
        }
    }
}

/// Get a university by id. Returns `None` when no record matches.
pub async fn get_university(pool: &SqlitePool, id: i64) -> Result<Option<University>> {
    let row = sqlx::query_as::<_, UniversityRow>(
        r#"
        SELECT id, name, city, type, rating, tuition_fee, programs, languages,
               international_score, employment_rate, reviews, image_url, description
        FROM universities
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(University::from))
}

/// Get several universities by id. Ids with no record are skipped.
pub async fn get_universities_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<University>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!(
        r#"
        SELECT id, name, city, type, rating, tuition_fee, programs, languages,
               international_score, employment_rate, reviews, image_url, description
        FROM universities
        WHERE id IN ({placeholders})
        "#
    );

    let mut query = sqlx::query_as::<_, UniversityRow>(&sql);
    for id in ids {
        query = query.bind(*id);
    }

    let rows = query.fetch_all(pool).await?;

    Ok(rows.into_iter().map(University::from).collect())
}

/// List universities as lightweight cards, rated first (NULL ratings last),
/// ties broken by name. A negative or absent limit returns everything.
pub async fn list_universities(
    pool: &SqlitePool,
    limit: Option<i64>,
) -> Result<Vec<UniversityCard>> {
    let cards = sqlx::query_as::<_, UniversityCard>(
        r#"
        SELECT id, name, city, rating, image_url
        FROM universities
        ORDER BY rating DESC NULLS LAST, name ASC
        LIMIT ?
        "#,
    )
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// Case-insensitive substring search on name and description, with the same
/// ordering policy as [`list_universities`].
pub async fn search_universities(
    pool: &SqlitePool,
    query: &str,
    limit: i64,
) -> Result<Vec<UniversityCard>> {
    let like = format!("%{}%", query.trim().to_lowercase());

    let cards = sqlx::query_as::<_, UniversityCard>(
        r#"
        SELECT id, name, city, rating, image_url
        FROM universities
        WHERE LOWER(name) LIKE ? OR LOWER(COALESCE(description, '')) LIKE ?
        ORDER BY rating DESC NULLS LAST, name ASC
        LIMIT ?
        "#,
    )
    .bind(&like)
    .bind(&like)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// Insert a new university and return its id.
pub async fn create_university(pool: &SqlitePool, university: &NewUniversity) -> Result<i64> {
    let programs = serde_json::to_string(&university.programs).unwrap_or_else(|_| "[]".to_string());
    let languages =
        serde_json::to_string(&university.languages).unwrap_or_else(|_| "[]".to_string());
    let reviews = serde_json::to_string(&university.reviews).unwrap_or_else(|_| "[]".to_string());

    let result = sqlx::query(
        r#"
        INSERT INTO universities (name, city, type, rating, tuition_fee, programs, languages,
                                  international_score, employment_rate, reviews, image_url, description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&university.name)
    .bind(&university.city)
    .bind(&university.kind)
    .bind(university.rating)
    .bind(university.tuition_fee)
    .bind(&programs)
    .bind(&languages)
    .bind(university.international_score)
    .bind(university.employment_rate)
    .bind(&reviews)
    .bind(&university.image_url)
    .bind(&university.description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Count total universities.
pub async fn count_universities(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM universities
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn sample(name: &str, rating: Option<f64>) -> NewUniversity {
        NewUniversity {
            name: name.to_string(),
            city: Some("Almaty".to_string()),
            kind: Some("public".to_string()),
            rating,
            tuition_fee: Some(1_500_000),
            programs: vec!["CS".to_string(), "Math".to_string()],
            languages: vec!["ru".to_string(), "en".to_string()],
            international_score: Some(7.5),
            employment_rate: Some(0.82),
            reviews: vec!["Отличный кампус".to_string()],
            image_url: None,
            description: Some("IT университет".to_string()),
        }
    }

    #[test]
    fn test_parse_json_list_degrades_to_empty() {
        assert!(parse_json_list(None).is_empty());
        assert!(parse_json_list(Some("")).is_empty());
        assert!(parse_json_list(Some("{not json")).is_empty());
        assert!(parse_json_list(Some("\"a string\"")).is_empty());
        assert_eq!(
            parse_json_list(Some(r#"["a","b"]"#)),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = test_db().await;

        let id = create_university(db.pool(), &sample("SDU University", Some(8.1)))
            .await
            .unwrap();

        let fetched = get_university(db.pool(), id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "SDU University");
        assert_eq!(fetched.programs, vec!["CS", "Math"]);
        assert_eq!(fetched.languages, vec!["ru", "en"]);
        assert_eq!(fetched.reviews.len(), 1);
        assert_eq!(fetched.employment_rate, Some(0.82));
        assert_eq!(fetched.kind.as_deref(), Some("public"));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let db = test_db().await;
        assert!(get_university(db.pool(), 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_list_columns_degrade_to_empty() {
        let db = test_db().await;

        sqlx::query(
            "INSERT INTO universities (name, programs, languages, reviews) VALUES (?, ?, ?, ?)",
        )
        .bind("Broken U")
        .bind("{oops")
        .bind("not json at all")
        .bind::<Option<String>>(None)
        .execute(db.pool())
        .await
        .unwrap();

        let all = list_universities(db.pool(), None).await.unwrap();
        let fetched = get_university(db.pool(), all[0].id).await.unwrap().unwrap();

        assert!(fetched.programs.is_empty());
        assert!(fetched.languages.is_empty());
        assert!(fetched.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_listing_orders_by_rating_desc_nulls_last() {
        let db = test_db().await;
        let pool = db.pool();

        create_university(pool, &sample("Mid", Some(5.0))).await.unwrap();
        create_university(pool, &sample("Unrated", None)).await.unwrap();
        create_university(pool, &sample("Top", Some(9.0))).await.unwrap();
        create_university(pool, &sample("Also top", Some(9.0))).await.unwrap();

        let cards = list_universities(pool, None).await.unwrap();
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();

        // Ties at 9.0 break by name ascending; the NULL rating sorts last
        assert_eq!(names, vec!["Also top", "Top", "Mid", "Unrated"]);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let db = test_db().await;
        let pool = db.pool();

        create_university(pool, &sample("A", Some(1.0))).await.unwrap();
        create_university(pool, &sample("B", Some(2.0))).await.unwrap();
        create_university(pool, &sample("C", Some(3.0))).await.unwrap();

        let cards = list_universities(pool, Some(2)).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "C");
    }

    #[tokio::test]
    async fn test_search_matches_name_and_description() {
        let db = test_db().await;
        let pool = db.pool();

        create_university(pool, &sample("KBTU", Some(7.0))).await.unwrap();
        create_university(
            pool,
            &NewUniversity {
                name: "KazNU".to_string(),
                description: Some("Крупнейший национальный университет".to_string()),
                ..sample("ignored", Some(6.0))
            },
        )
        .await
        .unwrap();

        let by_name = search_universities(pool, "kbtu", 10).await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "KBTU");

        let by_description = search_universities(pool, "национальный", 10).await.unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "KazNU");
    }

    #[tokio::test]
    async fn test_get_by_ids_skips_missing() {
        let db = test_db().await;
        let pool = db.pool();

        let first = create_university(pool, &sample("One", Some(5.0))).await.unwrap();
        let second = create_university(pool, &sample("Two", Some(6.0))).await.unwrap();

        let found = get_universities_by_ids(pool, &[first, second, 12345])
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let none = get_universities_by_ids(pool, &[]).await.unwrap();
        assert!(none.is_empty());
    }
}
