use anyhow::{anyhow, Context, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::metrics::track_db_operation;
use crate::models::{NewQuestion, Question};

const QUESTIONS_COLLECTION: &str = "questions";
const COUNTERS_COLLECTION: &str = "counters";
const QUESTION_ID_COUNTER: &str = "question_id";

/// Data access for the questions collection. Question ids are allocated from
/// an atomic counter document so they stay monotonic across inserts.
pub struct QuestionService {
    questions: Collection<Question>,
    counters: Collection<Document>,
}

impl QuestionService {
    pub fn new(mongo: &Database) -> Self {
        Self {
            questions: mongo.collection(QUESTIONS_COLLECTION),
            counters: mongo.collection(COUNTERS_COLLECTION),
        }
    }

    /// All questions, ascending by id.
    pub async fn list_all(&self) -> Result<Vec<Question>> {
        track_db_operation("find", QUESTIONS_COLLECTION, async {
            let cursor = self
                .questions
                .find(doc! {})
                .sort(doc! { "_id": 1 })
                .await
                .context("listing questions")?;
            cursor.try_collect().await.context("draining question cursor")
        })
        .await
    }

    /// Questions belonging to one category, ascending by id.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        track_db_operation("find", QUESTIONS_COLLECTION, async {
            let cursor = self
                .questions
                .find(doc! { "category": category_id })
                .sort(doc! { "_id": 1 })
                .await
                .context("listing questions by category")?;
            cursor.try_collect().await.context("draining question cursor")
        })
        .await
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let filter = doc! {
            "question": { "$regex": regex::escape(term), "$options": "i" }
        };
        track_db_operation("find", QUESTIONS_COLLECTION, async {
            let cursor = self
                .questions
                .find(filter)
                .sort(doc! { "_id": 1 })
                .await
                .context("searching questions")?;
            cursor.try_collect().await.context("draining question cursor")
        })
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Question>> {
        track_db_operation("find_one", QUESTIONS_COLLECTION, async {
            self.questions
                .find_one(doc! { "_id": id })
                .await
                .context("fetching question by id")
        })
        .await
    }

    /// Inserts a new question and returns it with its assigned id.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question> {
        let id = self.next_id().await?;
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };

        track_db_operation("insert_one", QUESTIONS_COLLECTION, async {
            self.questions
                .insert_one(&question)
                .await
                .context("inserting question")?;
            Ok(())
        })
        .await?;

        Ok(question)
    }

    /// Deletes one question. Returns false when no document matched the id.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        track_db_operation("delete_one", QUESTIONS_COLLECTION, async {
            let result = self
                .questions
                .delete_one(doc! { "_id": id })
                .await
                .context("deleting question")?;
            Ok(result.deleted_count == 1)
        })
        .await
    }

    /// Allocates the next question id from the counter document. The upsert
    /// makes the first insert on a fresh database start the sequence at 1.
    async fn next_id(&self) -> Result<i64> {
        let counter = track_db_operation("find_one_and_update", COUNTERS_COLLECTION, async {
            self.counters
                .find_one_and_update(
                    doc! { "_id": QUESTION_ID_COUNTER },
                    doc! { "$inc": { "seq": 1i64 } },
                )
                .upsert(true)
                .return_document(ReturnDocument::After)
                .await
                .context("allocating question id")
        })
        .await?
        .ok_or_else(|| anyhow!("counter document missing after upsert"))?;

        counter.get_i64("seq").context("reading counter sequence")
    }
}
