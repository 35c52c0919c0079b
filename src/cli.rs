// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::convert::convert_file;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::cmd::show::show_plan;
use crate::cmd::weeks::print_weeks;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Convert a plan text file into JSON.
    Convert {
        /// Path to the plan text file.
        file: String,
        /// Path to the output file. By default, `<file stem>.json` in the current directory.
        #[arg(long)]
        output: Option<String>,
    },
    /// List the week groups used by a plan.
    Weeks {
        /// Path to the plan text file.
        file: String,
    },
    /// Print a plan to the terminal.
    Show {
        /// Path to the plan text file.
        file: String,
        /// Only show instructions for this week group, e.g. `1e5`.
        #[arg(long)]
        week: Option<String>,
    },
    /// Serve the plans in a directory as JSON over HTTP.
    Serve {
        /// Path to the plans directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Convert { file, output } => convert_file(file, output),
        Command::Weeks { file } => print_weeks(file),
        Command::Show { file, week } => show_plan(file, week),
        Command::Serve {
            directory,
            host,
            port,
        } => {
            let config = ServerConfig {
                directory,
                host,
                port,
            };
            start_server(config).await
        }
    }
}
