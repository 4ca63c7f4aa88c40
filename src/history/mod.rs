pub mod storage;
pub mod store;
pub mod types;

pub use storage::{get_profile_path, load_profile, save_profile};
pub use store::{JsonFileStore, MemoryStore, ProfileStore};
pub use types::{NewQuizRecord, NewSavedCollege, ProfileHistory, QuizRecord, SavedCollege};
