// Tournament Platform Testing Tools
//
// This crate provides end-to-end test-support utilities for the tournament
// platform API. Currently includes:
// - HTTP fixtures for stubbing organization resources
// - randomized payload generators for phase resources
// - fixture-test-client: smoke-test tool for running fixtures against a live backend

pub mod api_client;
pub mod auth;
pub mod config;
pub mod fixtures;
pub mod output;
pub mod random;
pub mod scenarios;
pub mod urls;
