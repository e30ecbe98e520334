//! Desktop platform services

pub mod share;
