// DIO-Replay-Plot: Visualizing RPL DIO Replay Mitigation from Simulation Logs
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Utility module collection of functions

use std::{env, path::Path};

/// Logging configuration, looked up in the current working directory.
pub const LOG_CONFIG: &str = "log4rs.yml";

/// Initialize logging from `log4rs.yml` if present, and fall back to `pretty_env_logger` (at level
/// `info` unless `RUST_LOG` says otherwise).
pub fn init_logging() {
    let fallback_reason = match init_log4rs(Path::new(LOG_CONFIG)) {
        Ok(true) => return,
        Ok(false) => None,
        Err(e) => Some(e),
    };
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    if let Some(e) = fallback_reason {
        log::warn!("Cannot load {LOG_CONFIG}: {e}. Falling back to RUST_LOG.");
    }
}

/// Install the log4rs configuration at `path`. Returns `Ok(false)` if there is no such file, in
/// which case no logger was installed.
fn init_log4rs(path: &Path) -> Result<bool, String> {
    if !path.exists() {
        return Ok(false);
    }
    log4rs::init_file(path, Default::default())
        .map(|()| true)
        .map_err(|e| e.to_string())
}
