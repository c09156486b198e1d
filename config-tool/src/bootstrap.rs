use url::Url;

use crate::error::ScriptError;
use crate::fetch;
use crate::script::{Module, ScriptHost};

/// Where the remotely maintained configuration fragment lives.
pub const CONFIG_HELPER_URL: &str =
    "https://raw.github.com/steinwurf/steinwurf-labs/master/config_helper/config-impl.lua";

/// Logical name the fetched fragment is registered under.
pub const MODULE_NAME: &str = "config_helper";

/// Function the fetched fragment must define.
pub const ENTRY_POINT: &str = "config_tool";

pub const PROJECT_NAME: &str = "mts";

/// Dependency names handed to the configuration routine, in order.
pub const PROJECT_DEPENDENCIES: &[&str] = &["waf-tools", "gtest"];

/// One-shot fetch-and-run sequence.
///
/// Both failure domains are reported on stdout and swallowed: the tool
/// is a best-effort helper and never escalates into a failing exit
/// code.
pub async fn run(url: &Url, dependencies: &[&str]) {
    println!("Updating Smart Project Config Tool...");

    let code = match fetch::fetch_code(url).await {
        Ok(code) => code,
        Err(err) => {
            println!("Could not fetch code file from:\n\t{url}");
            println!("{err}");
            return;
        }
    };
    println!("Update complete. Code size: {}\n", code.len());

    if let Err(err) = configure(&code, dependencies) {
        println!("Unexpected error:");
        println!("{err}");
    }
}

/// Load the fetched fragment and invoke its configuration entry point
/// with the dependency list. Returns the loaded module so callers can
/// inspect the namespace.
pub fn configure(code: &[u8], dependencies: &[&str]) -> Result<Module, ScriptError> {
    let host = ScriptHost::new();
    let module = host.load_module(MODULE_NAME, code)?;
    module.call_entry_point(ENTRY_POINT, dependencies)?;
    Ok(module)
}
