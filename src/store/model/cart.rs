use crate::store::model::lesson::Lesson;
use serde::Serialize;

/// Reduced copy of a lesson held in the cart. Quantity is implicit,
/// adding the same lesson twice yields two entries.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CartItem {
    #[serde(rename = "_id")]
    pub lesson_id: String,
    pub subject: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Lesson> for CartItem {
    fn from(lesson: &Lesson) -> Self {
        Self {
            lesson_id: lesson.id.clone(),
            subject: lesson.subject.clone(),
            price: lesson.price.clone(),
            image: lesson.image.clone(),
        }
    }
}
