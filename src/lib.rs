// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod document;
pub mod models;
pub mod extract;
pub mod filter;
pub mod utils;
pub mod commands;
