pub const CATEGORIES_URL: &str = "/categories";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(id: i32) -> String {
    format!("/questions/{id}")
}

pub fn category_questions_url(category_id: i32) -> String {
    format!("/categories/{category_id}/questions")
}

// Paging
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: i64 = 1;

// Quiz play
pub const ALL_CATEGORIES: i32 = 0;

// Question validation
pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

pub const DEFAULT_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// CORS
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
