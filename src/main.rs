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
use std::{path::PathBuf, process};

use clap::Parser;

use dio_replay::{prelude::*, util};

/// Visualize RPL DIO Replay Attack mitigation using ns-3 logs.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Path to the log file where mitigation was disabled.
    #[arg(long = "mitigation_false_log")]
    mitigation_false_log: PathBuf,
    /// Path to the log file where mitigation was enabled.
    #[arg(long = "mitigation_true_log")]
    mitigation_true_log: PathBuf,
}

fn main() {
    util::init_logging();

    let args = Args::parse();
    let config = SimulationConfig::default();

    if let Err(e) = compare_logs(
        &args.mitigation_false_log,
        &args.mitigation_true_log,
        &config,
        OUTPUT_FILENAME,
    ) {
        log::error!("{e}");
        if matches!(e, CompareError::NoAcceptedEvents(_)) {
            log::error!("Could not process one or both log files. Exiting.");
        }
        process::exit(1)
    }
}
