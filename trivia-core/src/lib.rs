//! trivia-core: question retrieval and quiz selection
//!
//! Everything here is independent of HTTP and of the concrete database:
//! - `model`: questions, categories, and insert validation
//! - `paginate`: fixed-size page slicing
//! - `filter`: substring search and category restriction
//! - `quiz`: exclusion-aware random question picker
//! - `store`: the data store gateway contract plus an in-memory implementation

pub mod config;
pub mod error;
pub mod filter;
pub mod memory;
pub mod model;
pub mod paginate;
pub mod quiz;
pub mod seed;
pub mod store;

pub use config::TriviaConfig;
pub use error::{StoreError, StoreResult};
pub use filter::{CategorySelector, SearchTerm};
pub use memory::MemoryStore;
pub use model::{Category, CategoryId, NewQuestion, Question, QuestionId, ValidationError};
pub use paginate::{paginate, Page, QUESTIONS_PER_PAGE};
pub use quiz::{QuizRequest, QuizSelector, RandomSource, SeededRandom, ThreadRandom};
pub use store::QuestionStore;
