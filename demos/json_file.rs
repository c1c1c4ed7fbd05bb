// Copyright 2024 FastLabs Developers
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

//! An example of switching the file sink to JSON lines at runtime and moving it to a new path.

use std::sync::Arc;
use std::thread;

use yagalog::Level;
use yagalog::Logger;

fn main() {
    let logger = Arc::new(Logger::new("app.log").unwrap());
    logger.set_level(Level::Info);
    logger.set_caller(true);
    logger.set_time_format("%Y-%m-%dT%H:%M:%S%.3f");
    logger.enable_json();

    let workers = (0..4)
        .map(|id| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..3 {
                    yagalog::info!(logger, "worker {id} finished job {i}");
                }
                yagalog::debug!(logger, "worker {id} is idle");
            })
        })
        .collect::<Vec<_>>();
    for worker in workers {
        worker.join().unwrap();
    }

    if let Err(err) = logger.enable_file("app-2.log") {
        yagalog::error!(logger, "cannot move the log file: {err}");
    }
    yagalog::warn!(logger, "<html> & friends are written raw");

    logger.close().unwrap();
}
