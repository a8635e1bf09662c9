#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
pub mod report;
pub mod session;
pub mod settings;
