use serde::Deserialize;

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// Form-encoded frontends send numeric fields as strings.
fn deserialize_string_or_i32<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i32;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i32, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// Body of `POST /questions`: a search when `searchTerm` is present, a create otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionRequest {
    Search(SearchRequest),
    Create(NewQuestion),
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_string_or_i32")]
    pub difficulty: i32,
    #[serde(deserialize_with = "deserialize_string_or_i32")]
    pub category: i32,
}

impl NewQuestion {
    /// Checks the fields the store does not: non-blank text and a known difficulty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.question.trim().is_empty() {
            return Err("question text is blank");
        }
        if self.answer.trim().is_empty() {
            return Err("answer text is blank");
        }
        if !(crate::names::MIN_DIFFICULTY..=crate::names::MAX_DIFFICULTY)
            .contains(&self.difficulty)
        {
            return Err("difficulty out of range");
        }
        Ok(())
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i32")]
    pub id: i32,
}
