//! Sample data seeding.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;
use crate::models::NewUniversity;
use crate::university::{count_universities, create_university};

/// Seed the catalog with sample universities.
///
/// Runs only when the table is empty, so calling it on every startup does
/// not duplicate data. Returns the number of records inserted.
pub async fn seed_sample_universities(pool: &SqlitePool) -> Result<usize> {
    let existing = count_universities(pool).await?;
    if existing > 0 {
        info!(existing, "Universities already present, skipping seed");
        return Ok(0);
    }

    let sample = sample_universities();
    let count = sample.len();

    for university in &sample {
        create_university(pool, university).await?;
    }

    info!(count, "Seeded sample universities");
    Ok(count)
}

fn sample_universities() -> Vec<NewUniversity> {
    vec![
        NewUniversity {
            name: "SDU University".to_string(),
            city: Some("Kaskelen".to_string()),
            kind: Some("private".to_string()),
            rating: Some(8.2),
            tuition_fee: Some(1_800_000),
            programs: vec![
                "Computer Science".to_string(),
                "Business Administration".to_string(),
                "Pedagogy".to_string(),
            ],
            languages: vec!["en".to_string(), "kz".to_string(), "ru".to_string()],
            international_score: Some(7.8),
            employment_rate: Some(0.87),
            reviews: vec![
                "Современный кампус, сильные IT и бизнес программы.".to_string(),
                "Много возможностей для студенческих проектов.".to_string(),
            ],
            image_url: Some("/static/universities/sdu.jpg".to_string()),
            description: Some("Современный кампус, сильные IT и бизнес программы.".to_string()),
        },
        NewUniversity {
            name: "IITU".to_string(),
            city: Some("Almaty".to_string()),
            kind: Some("private".to_string()),
            rating: Some(7.9),
            tuition_fee: Some(1_600_000),
            programs: vec![
                "Software Engineering".to_string(),
                "Cybersecurity".to_string(),
            ],
            languages: vec!["ru".to_string(), "en".to_string()],
            international_score: Some(6.5),
            employment_rate: Some(0.84),
            reviews: vec!["IT университет, готовящий программистов и инженеров.".to_string()],
            image_url: Some("/static/universities/iitu.jpg".to_string()),
            description: Some("IT университет, готовящий программистов и инженеров.".to_string()),
        },
        NewUniversity {
            name: "AITU".to_string(),
            city: Some("Astana".to_string()),
            kind: Some("public".to_string()),
            rating: Some(7.6),
            tuition_fee: Some(1_500_000),
            programs: vec!["IT".to_string(), "Data Science".to_string()],
            languages: vec!["en".to_string()],
            international_score: Some(7.1),
            employment_rate: Some(0.81),
            reviews: vec!["Международный IT университет в столице.".to_string()],
            image_url: Some("/static/universities/aitu.jpg".to_string()),
            description: Some("Международный IT университет в столице.".to_string()),
        },
        NewUniversity {
            name: "KBTU".to_string(),
            city: Some("Almaty".to_string()),
            kind: Some("private".to_string()),
            rating: Some(8.0),
            tuition_fee: Some(2_000_000),
            programs: vec![
                "Petroleum Engineering".to_string(),
                "Information Systems".to_string(),
            ],
            languages: vec!["en".to_string(), "ru".to_string()],
            international_score: Some(7.4),
            employment_rate: Some(0.89),
            reviews: vec!["Технологический университет с инженерными направлениями.".to_string()],
            image_url: Some("/static/universities/kbtu.jpg".to_string()),
            description: Some(
                "Технологический университет с инженерными направлениями.".to_string(),
            ),
        },
        NewUniversity {
            name: "KazNU".to_string(),
            city: Some("Almaty".to_string()),
            kind: Some("public".to_string()),
            rating: Some(7.3),
            tuition_fee: Some(1_100_000),
            programs: vec![
                "Law".to_string(),
                "Philology".to_string(),
                "Physics".to_string(),
            ],
            languages: vec!["kz".to_string(), "ru".to_string()],
            international_score: Some(6.9),
            employment_rate: Some(0.78),
            reviews: vec!["Крупнейший национальный университет Казахстана.".to_string()],
            image_url: Some("/static/universities/kaznu.jpg".to_string()),
            description: Some("Крупнейший национальный университет Казахстана.".to_string()),
        },
    ]
}
