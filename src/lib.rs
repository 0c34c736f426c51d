pub mod activity;
pub(crate) mod calculations;
pub mod catalog;
pub mod error;
pub mod frame;
pub mod graph;
pub mod import;
pub mod instant;
pub mod metadata;
pub mod schedule;
pub mod scheduler;
pub mod task;
pub(crate) mod task_validation;

pub use activity::Activity;
pub use catalog::Catalog;
pub use error::{ScheduleError, ScheduleResult};
pub use graph::DependencyGraph;
pub use import::{
    ImportError, ImportResult, load_catalog_from_csv, load_catalog_from_json,
    load_catalog_from_text, parse_catalog, read_catalog_csv, read_catalog_json,
};
pub use instant::{Instant, ParseInstantError};
pub use metadata::ProjectMetadata;
pub use schedule::{Schedule, ScheduleSummary};
pub use scheduler::{schedule, schedule_all};
pub use task::Task;
