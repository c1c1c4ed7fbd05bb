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

//! An example of routing the `log` crate's macros through yagalog.

use yagalog::ColorMode;
use yagalog::Level;
use yagalog::Logger;

fn main() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<yagalog::LevelFilter>().ok())
        .unwrap_or(Level::Debug.into());

    let logger = Logger::builder("app.log")
        .level(level)
        .caller(true)
        .color_mode(ColorMode::from_env())
        .build()
        .unwrap()
        .apply()
        .unwrap();

    log::error!("Hello bridged error!");
    log::warn!("Hello bridged warn!");
    log::info!("Hello bridged info!");
    log::debug!("Hello bridged debug!");
    log::trace!("Hello bridged trace!");

    logger.close().unwrap();
}
