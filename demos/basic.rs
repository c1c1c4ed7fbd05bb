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

//! An example of logging to the console and a plain text file.

fn main() {
    let logger = yagalog::Logger::new("app.log").unwrap();

    yagalog::info!(logger, "Hello from yagalog {}", 1);
    yagalog::warn!(logger, "Be careful");
    yagalog::error!(logger, "Oops: {}", "something went wrong");

    logger.close().unwrap();
}
