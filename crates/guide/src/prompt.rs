//! Prompt builders and fallback texts.
//!
//! Every function here is a pure function of its inputs, so expected prompt
//! text can be asserted verbatim in tests.

use std::fmt::Write;

use chat_core::ChatMessage;
use database::University;
use tours::Tour;

/// Shown when a mini-info request arrives for a scene the tour does not have.
pub const MISSING_SCENE_FALLBACK: &str = "Описание места недоступно.";

/// Shown when both the original reply and the retry fail the language check.
pub const APOLOGY_FALLBACK: &str = "Прошу прощения, у меня возникла небольшая пауза. \
     Попробуйте повторить вопрос, и я с радостью продолжу экскурсию!";

/// Tour-guide fallback description for a scene with no stored text, used
/// when synthesis via the model fails.
pub fn synthesized_description_fallback(title: &str) -> String {
    format!(
        "Вы находитесь в локации «{title}». Это место является важной частью кампуса. \
         Здесь обычно проходят различные мероприятия или активность, связанная с этой зоной."
    )
}

/// Build the full tour-guide system prompt: every scene of the tour plus the
/// fixed rule set and the current scene pointer.
pub fn build_system_prompt(tour: &Tour, current_scene: &str) -> String {
    let mut scene_list = String::new();
    for (sid, scene) in &tour.scenes {
        let _ = writeln!(
            scene_list,
            "- id: {}\n  title: {}\n  description: {}",
            sid,
            scene.title,
            scene.description.as_deref().unwrap_or("")
        );
    }

    format!(
        "Ты — ИИ-гид в 3D-туре '{title}'.\n\
         \n\
         ТВОИ ВОЗМОЖНОСТИ:\n\
         • Кратко объяснять, где находится пользователь.\n\
         • Давать справочную информацию по локациям.\n\
         • Отвечать на вопросы в чате.\n\
         • Совершать переходы между сценами по запросу пользователя.\n\
         \n\
         === ЛОКАЦИИ ===\n\
         {scene_list}\
         \n\
         === ПРАВИЛА ===\n\
         1. Всегда отвечай только по-русски.\n\
         2. Кратко, дружелюбно, без воды.\n\
         3. Не придумывай сцен, которых нет.\n\
         4. JSON используй только для перехода между сценами, в формате \
         {{\"action\":\"goto\",\"scene\":\"id\"}}.\n\
         5. Если description пустое — придумай описание сам.\n\
         \n\
         Текущая сцена: {current_scene}\n",
        title = tour.title,
    )
}

/// Build the stricter, shorter retry prompt used when a reply fails the
/// language check.
pub fn build_strict_retry_prompt() -> String {
    "Ты — профессиональный экскурсовод в 3D-туре по университету. \
     Всегда отвечай ТОЛЬКО на чистом русском языке. \
     Запрещено использовать китайские, английские или другие языки. \
     Отвечай кратко (1–3 предложения), дружелюбно и без воды."
        .to_string()
}

/// Build the scene-description synthesis request: title only, no tour
/// context.
pub fn build_scene_description_prompt(title: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("Ты создаёшь короткие описания локаций для 3D-туров."),
        ChatMessage::user(format!("Опиши сцену '{title}' в 1–2 предложениях.")),
    ]
}

/// Normalize an employment rate for display: fractions in (0, 1] become
/// percentages, everything else is taken as a percentage already. Known
/// limitation: a true 100% stored as `1.0` and a 1% stored as `1.0` are
/// indistinguishable; the fraction reading wins.
pub fn employment_percent(rate: f64) -> i64 {
    let percent = if rate > 0.0 && rate <= 1.0 {
        rate * 100.0
    } else {
        rate
    };
    percent.round() as i64
}

/// How many reviews a university block quotes at most.
const MAX_QUOTED_REVIEWS: usize = 3;

/// Render one university as a labeled block of prompt lines.
pub fn format_university_block(university: &University) -> String {
    let mut lines = vec![
        format!("Название: {}", university.name),
        format!(
            "Город: {}",
            university.city.as_deref().unwrap_or("город не указан")
        ),
        format!(
            "Тип: {}",
            university.kind.as_deref().unwrap_or("тип не указан")
        ),
    ];

    if let Some(rating) = university.rating {
        lines.push(format!("Рейтинг (внутри платформы): {rating:.1} из 10"));
    }

    if let Some(tuition) = university.tuition_fee {
        lines.push(format!("Примерная стоимость обучения в год: {tuition} KZT"));
    }

    if !university.programs.is_empty() {
        lines.push(format!(
            "Основные программы: {}",
            university.programs.join(", ")
        ));
    }

    if !university.languages.is_empty() {
        lines.push(format!("Языки обучения: {}", university.languages.join(", ")));
    }

    if let Some(score) = university.international_score {
        lines.push(format!(
            "Международность (обмены, иностранные студенты): {score:.1} из 10"
        ));
    }

    if let Some(rate) = university.employment_rate {
        lines.push(format!(
            "Трудоустройство выпускников: ~{}%",
            employment_percent(rate)
        ));
    }

    if !university.reviews.is_empty() {
        lines.push("Отзывы студентов (выборочно):".to_string());
        for review in university.reviews.iter().take(MAX_QUOTED_REVIEWS) {
            lines.push(format!("- {review}"));
        }
    }

    lines.join("\n")
}

/// Build the full comparison request: system role plus the instruction
/// template, the optional applicant goal, and both university blocks.
pub fn build_comparison_messages(
    first: &University,
    second: &University,
    goal: Option<&str>,
) -> Vec<ChatMessage> {
    let mut instruction = String::from(
        "Ты — эксперт по высшему образованию в Казахстане.\n\
         Тебе даны данные о двух университетах.\n\
         Нужно коротко и понятно для абитуриента сравнить их и дать рекомендацию.\n\
         \n\
         Если указана цель абитуриента — учитывай её в выводе.\n\
         \n\
         Формат ответа:\n\
         1) Краткое сравнение по ключевым параметрам (стоимость, качество программ, \
         отзывы, международность, трудоустройство).\n\
         2) Плюсы и минусы каждого вуза отдельными списками.\n\
         3) Для кого лучше подойдёт Университет A, для кого Университет B.\n\
         4) Итоговая рекомендация в 1–2 предложениях.\n\
         \n\
         Пиши по-русски, без воды, понятным языком.\n\
         Избегай прямых оценок \"плохой/ужасный\", используй мягкие формулировки.\n",
    );

    if let Some(goal) = goal.map(str::trim).filter(|g| !g.is_empty()) {
        let _ = writeln!(instruction, "\nЦель абитуриента: {goal}");
    }

    let _ = write!(
        instruction,
        "\n\n=== Университет A ===\n{}\n\n=== Университет B ===\n{}",
        format_university_block(first),
        format_university_block(second),
    );

    vec![
        ChatMessage::system(
            "Ты профессиональный консультант по выбору университета в Казахстане. \
             Отвечай структурированно, с заголовками и маркированными списками.",
        ),
        ChatMessage::user(instruction),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tour() -> Tour {
        serde_json::from_str(
            r#"{
                "title": "Главный кампус",
                "startScene": "entrance",
                "scenes": {
                    "entrance": {"title": "Главный вход", "description": "Парадный вход."},
                    "library": {"title": "Библиотека"}
                }
            }"#,
        )
        .unwrap()
    }

    fn sample_university() -> University {
        University {
            id: 1,
            name: "KBTU".to_string(),
            city: Some("Almaty".to_string()),
            kind: Some("private".to_string()),
            rating: Some(8.0),
            tuition_fee: Some(2_000_000),
            programs: vec!["IS".to_string()],
            languages: vec!["en".to_string()],
            international_score: Some(7.4),
            employment_rate: Some(0.89),
            reviews: vec![
                "Первый".to_string(),
                "Второй".to_string(),
                "Третий".to_string(),
                "Четвёртый".to_string(),
            ],
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn test_system_prompt_lists_every_scene_and_current_pointer() {
        let prompt = build_system_prompt(&sample_tour(), "library");

        assert!(prompt.contains("'Главный кампус'"));
        assert!(prompt.contains("- id: entrance"));
        assert!(prompt.contains("  title: Главный вход"));
        assert!(prompt.contains("- id: library"));
        assert!(prompt.contains("Всегда отвечай только по-русски."));
        assert!(prompt.ends_with("Текущая сцена: library\n"));
    }

    #[test]
    fn test_system_prompt_is_deterministic() {
        let tour = sample_tour();
        assert_eq!(
            build_system_prompt(&tour, "entrance"),
            build_system_prompt(&tour, "entrance")
        );
    }

    #[test]
    fn test_scene_description_prompt_has_title_only() {
        let messages = build_scene_description_prompt("Библиотека");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(
            messages[1].content,
            "Опиши сцену 'Библиотека' в 1–2 предложениях."
        );
    }

    #[test]
    fn test_employment_percent_fraction_branch() {
        assert_eq!(employment_percent(0.89), 89);
        assert_eq!(employment_percent(0.005), 1);
        assert_eq!(employment_percent(1.0), 100);
    }

    #[test]
    fn test_employment_percent_percentage_branch() {
        assert_eq!(employment_percent(87.0), 87);
        assert_eq!(employment_percent(87.4), 87);
        assert_eq!(employment_percent(0.0), 0);
    }

    #[test]
    fn test_university_block_normalizes_rate_and_caps_reviews() {
        let block = format_university_block(&sample_university());

        assert!(block.contains("Трудоустройство выпускников: ~89%"));
        assert!(block.contains("- Третий"));
        assert!(!block.contains("Четвёртый"));
    }

    #[test]
    fn test_university_block_skips_absent_fields() {
        let university = University {
            rating: None,
            tuition_fee: None,
            programs: vec![],
            languages: vec![],
            international_score: None,
            employment_rate: None,
            reviews: vec![],
            city: None,
            ..sample_university()
        };

        let block = format_university_block(&university);
        assert!(block.contains("Город: город не указан"));
        assert!(!block.contains("Рейтинг"));
        assert!(!block.contains("Трудоустройство"));
        assert!(!block.contains("Отзывы"));
    }

    #[test]
    fn test_comparison_includes_goal_only_when_non_blank() {
        let first = sample_university();
        let second = sample_university();

        let with_goal = build_comparison_messages(&first, &second, Some("  IT карьера  "));
        assert!(with_goal[1].content.contains("Цель абитуриента: IT карьера"));

        let blank_goal = build_comparison_messages(&first, &second, Some("   "));
        assert!(!blank_goal[1].content.contains("Цель абитуриента"));

        let no_goal = build_comparison_messages(&first, &second, None);
        assert!(!no_goal[1].content.contains("Цель абитуриента"));
    }

    #[test]
    fn test_comparison_labels_both_blocks() {
        let messages = build_comparison_messages(&sample_university(), &sample_university(), None);
        let body = &messages[1].content;

        assert!(body.contains("=== Университет A ==="));
        assert!(body.contains("=== Университет B ==="));
        assert!(body.contains("4) Итоговая рекомендация"));
    }
}
