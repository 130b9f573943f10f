#![allow(dead_code)]

pub mod domain;

use std::error::Error;

pub type TestResult<T = Box<dyn Error + Send + Sync>> = Result<(), T>;
