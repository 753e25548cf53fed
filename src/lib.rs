// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod utils;
pub mod validate;
