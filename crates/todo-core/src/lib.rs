//! Todo Core
//!
//! Browser-independent heart of the todo list:
//! - model: items and the ordered state
//! - action / reducer: the closed set of transitions and their semantics
//! - storage / sync: storage port and the load/save synchronizer
//! - store: dispatch runtime tying reducer and persistence together
//! - reorder: drag gesture to `setAllItems` translation
//! - filler: storage exhaustion helpers for manual testing

mod action;
mod filler;
mod id;
mod model;
mod reducer;
mod reorder;
mod storage;
mod store;
mod sync;


pub use action::{ActionError, TodoAction};
pub use filler::{clear_filler, fill_storage, filler_key, FillReport, DEFAULT_CHUNK_CHARS, MAX_CHUNK_CHARS};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use model::{NewTodoItem, TodoItem, TodoItemId, TodoItemsState};
pub use reducer::reduce;
pub use reorder::{reorder, ReorderIntent};
pub use storage::{MemoryStorage, StorageError, StoragePort, StorageResult, DEFAULT_STORAGE_KEY};
pub use store::{DispatchOutcome, TodoStore};
pub use sync::{PersistenceSynchronizer, SaveOutcome};
