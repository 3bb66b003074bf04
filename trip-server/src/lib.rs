//! Trip planner server.
//!
//! A web application that answers: "How long will it take me to get from
//! here to there by car, bike, transit, shared ride or on foot?"

pub mod config;
pub mod domain;
pub mod engine;
pub mod planner;
pub mod session;
pub mod web;
