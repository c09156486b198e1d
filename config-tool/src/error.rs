use thiserror::Error;

/// Errors from loading or running a fetched code fragment.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to load module '{module}': {source}")]
    LoadFailed {
        module: String,
        #[source]
        source: mlua::Error,
    },

    #[error("module '{module}' does not define a callable '{entry}'")]
    MissingEntryPoint { module: String, entry: String },

    #[error("entry point '{entry}' failed: {source}")]
    EntryPointFailed {
        entry: String,
        #[source]
        source: mlua::Error,
    },

    #[error(transparent)]
    Lua(#[from] mlua::Error),
}
