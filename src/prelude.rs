pub use crate::cli::{command, run_app};
pub use crate::domain::{
    ContactStore,
    contact::{self, Contact},
};
pub use crate::errors::{AppError, Result};
pub use crate::storage::{
    self, DEFAULT_FILE_NAME, StorageBackend,
    stores::{JsonStorage, MemStorage},
};
