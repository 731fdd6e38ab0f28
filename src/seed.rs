//! Seed Data
//!
//! The fixed project list and table rows shipped with the page.

use crate::models::{Project, ProjectCategory, RowStatus, TableRow};

fn project(
    title: &str,
    description: &str,
    category: ProjectCategory,
    technologies: &[&str],
    url: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        category,
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        url: url.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    use ProjectCategory::*;
    vec![
        project(
            "School 2026",
            "Телеграм-бот для школьного расписания и объявлений.",
            Bot,
            &["Python", "python-telegram-bot", "SQLite"],
            "https://github.com/psibladdd/school_2026",
        ),
        project(
            "Dobro",
            "Сайт волонтёрского проекта с формой заявок.",
            Web,
            &["HTML", "CSS", "JavaScript", "Python"],
            "https://github.com/psibladdd/dobro",
        ),
        project(
            "Dobrodrug Bot",
            "Бот для поиска волонтёров и координации событий.",
            Bot,
            &["Python", "python-telegram-bot", "PostgreSQL"],
            "https://github.com/psibladdd/dobrodrug",
        ),
        project(
            "Vozhak Python",
            "Игровой бот с рейтингом участников.",
            Bot,
            &["Python", "aiogram", "Redis"],
            "https://github.com/psibladdd/vozhak_python",
        ),
        project(
            "12 Практика",
            "Адаптивный лендинг с анимациями.",
            Web,
            &["HTML", "CSS", "JavaScript"],
            "https://github.com/psibladdd/12prac",
        ),
        project(
            "Кастомный рандомайзер",
            "Лендинг со случайным выбором участников.",
            Web,
            &["HTML", "CSS", "JavaScript"],
            "https://github.com/psibladdd/vozhak_random",
        ),
        project(
            "3D Город",
            "Интерактивная 3D-сцена города.",
            Mobile,
            &["React", "Three.js", "JavaScript"],
            "https://github.com/psibladdd/13",
        ),
    ]
}

fn row(
    id: u32,
    name: &str,
    category: &str,
    technologies: &str,
    date: &str,
    status: RowStatus,
    url: &str,
) -> TableRow {
    TableRow {
        id,
        name: name.to_string(),
        category: category.to_string(),
        technologies: technologies.to_string(),
        date: date.to_string(),
        status,
        url: url.to_string(),
    }
}

pub fn table_rows() -> Vec<TableRow> {
    use RowStatus::*;
    vec![
        row(1, "School 2026", "Телеграм-бот", "Python, python-telegram-bot, SQLite", "2025-10-15", Completed, "https://github.com/psibladdd/school_2026"),
        row(2, "Dobro Bot", "Веб-сайт", "HTML, CSS, JavaScript, Python", "2025-11-20", Completed, "https://github.com/psibladdd/dobro"),
        row(3, "Dobrodrug Bot", "Телеграм-бот", "Python, python-telegram-bot, PostgreSQL", "2025-12-01", InProgress, "https://github.com/psibladdd/dobrodrug"),
        row(4, "Vozhak Python", "Игровой бот", "Python, aiogram, Redis", "2025-12-10", InProgress, "https://github.com/psibladdd/vozhak_python"),
        row(5, "12 Практика", "Лендинг", "HTML, CSS, JavaScript", "2025-12-16", InProgress, "https://github.com/psibladdd/12prac"),
        row(6, "Кастомный рандомайзер", "Лендинг", "HTML, CSS, JavaScript", "2024-11-22", InProgress, "https://github.com/psibladdd/vozhak_random"),
        row(7, "3D Город", "THREE JS", "REACT, JavaScript, HTML", "2025-07-15", InProgress, "https://github.com/psibladdd/13"),
    ]
}
