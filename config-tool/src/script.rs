//! Embedded script host for dynamically loaded configuration fragments.
//!
//! Each fragment executes in a fresh environment table whose lookups
//! fall through to the interpreter globals, so fragments see the full
//! standard library without seeing each other's definitions. Loaded
//! fragments are registered in `package.loaded` under their logical
//! name and can be resolved from other fragments with `require`.

use log::debug;
use mlua::{FromLua, Lua, Table, Value};

use crate::error::ScriptError;

pub struct ScriptHost {
    lua: Lua,
}

impl ScriptHost {
    pub fn new() -> Self {
        Self { lua: Lua::new() }
    }

    /// Compile and execute `code` in a fresh namespace registered under
    /// `name`. Re-registering a name replaces the previous entry.
    pub fn load_module(&self, name: &str, code: &[u8]) -> Result<Module, ScriptError> {
        let namespace = self.lua.create_table()?;
        let meta = self.lua.create_table()?;
        meta.set("__index", self.lua.globals())?;
        namespace.set_metatable(Some(meta));

        self.lua
            .load(code)
            .set_name(name)
            .set_environment(namespace.clone())
            .exec()
            .map_err(|source| ScriptError::LoadFailed {
                module: name.to_string(),
                source,
            })?;

        self.loaded_table()?.set(name, &namespace)?;
        debug!("registered module '{name}'");

        Ok(Module {
            lua: self.lua.clone(),
            name: name.to_string(),
            namespace,
        })
    }

    /// Look up a previously registered module by name.
    pub fn resolve(&self, name: &str) -> Result<Option<Module>, ScriptError> {
        match self.loaded_table()?.get::<Value>(name)? {
            Value::Table(namespace) => Ok(Some(Module {
                lua: self.lua.clone(),
                name: name.to_string(),
                namespace,
            })),
            _ => Ok(None),
        }
    }

    fn loaded_table(&self) -> Result<Table, ScriptError> {
        let package: Table = self.lua.globals().get("package")?;
        Ok(package.get("loaded")?)
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded fragment and its namespace.
#[derive(Debug)]
pub struct Module {
    lua: Lua,
    name: String,
    namespace: Table,
}

impl Module {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call `entry` in the module namespace with the dependency names
    /// as a single list argument.
    pub fn call_entry_point(&self, entry: &str, dependencies: &[&str]) -> Result<(), ScriptError> {
        let function = match self.namespace.get::<Value>(entry)? {
            Value::Function(function) => function,
            _ => {
                return Err(ScriptError::MissingEntryPoint {
                    module: self.name.clone(),
                    entry: entry.to_string(),
                });
            }
        };

        let args = self.lua.create_sequence_from(dependencies.iter().copied())?;
        function
            .call::<()>(args)
            .map_err(|source| ScriptError::EntryPointFailed {
                entry: entry.to_string(),
                source,
            })
    }

    /// Read a value out of the module namespace.
    pub fn get<T: FromLua>(&self, key: &str) -> Result<T, ScriptError> {
        Ok(self.namespace.get(key)?)
    }
}
