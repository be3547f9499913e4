mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{
    CONFIG_VERSION, Config, CounterConfig, DEFAULT_RECENT_POINTS, StatsConfig, StoreConfig,
};
pub use validation::validate_config_semantics;
