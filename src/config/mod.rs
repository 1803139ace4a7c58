mod manager;

pub use manager::{
    CgenConfig, ConfigFile, ConfigManager, CustomTone, ImageConfig, ProviderConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
