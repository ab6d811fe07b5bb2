/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::prelude::*;

use crate::bodies::Body;

/// Crate-level error. Each domain reports through its own enum; composite
/// operations wrap the domain error with the action that was underway.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum AstroError {
    #[snafu(display("{action} encountered a time error: {source}"))]
    Time {
        action: &'static str,
        source: TimeError,
    },
    #[snafu(display("{action} encountered a math error: {source}"))]
    Math {
        action: &'static str,
        source: MathError,
    },
    #[snafu(display("{action} encountered a body error: {source}"))]
    BodyComputation {
        action: &'static str,
        source: BodyError,
    },
    #[snafu(display("{action} encountered a search error: {source}"))]
    Search {
        action: &'static str,
        source: SearchError,
    },
    #[snafu(display("{action} encountered a simulation error: {source}"))]
    Simulation {
        action: &'static str,
        source: SimulationError,
    },
    #[snafu(display("{action} encountered an event error: {source}"))]
    Event {
        action: &'static str,
        source: EventError,
    },
    /// If this is raised, please report a bug.
    #[snafu(display("internal error while {action} -- please report a bug"))]
    Internal { action: &'static str },
}

pub type AstroResult<T> = Result<T, AstroError>;

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum TimeError {
    #[snafu(display("calendar field {field}={value} is not finite or out of domain"))]
    InvalidDate { field: &'static str, value: f64 },
    #[snafu(display("{text_hint} cannot be parsed as a calendar instant"))]
    Unparseable { text_hint: &'static str },
}

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum MathError {
    #[snafu(display("prevented a division by zero when {action}"))]
    DivisionByZero { action: &'static str },
    #[snafu(display("{msg}: {value}"))]
    DomainError { value: f64, msg: &'static str },
    #[snafu(display("input vector is not finite while {action}"))]
    BadVector { action: &'static str },
    #[snafu(display("parameter {param}={value} is outside its domain"))]
    InvalidParameter { param: &'static str, value: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum BodyError {
    #[snafu(display("body {body} cannot be used for this computation"))]
    InvalidBody { body: Body },
    #[snafu(display("integer {code} does not identify a body"))]
    UnknownBodyCode { code: i32 },
    #[snafu(display("star slot {body} was used before being defined"))]
    UndefinedStar { body: Body },
}

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum SearchError {
    #[snafu(display("function does not change sign over the search bracket"))]
    NotBracketed,
    #[snafu(display("root finder failed to converge after {iter} iterations"))]
    NoConvergence { iter: usize },
    #[snafu(display("no event found within {limit_days} days of the start time"))]
    NotFound { limit_days: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum SimulationError {
    #[snafu(display("simulator accessed before initialization"))]
    NotInitialized,
    #[snafu(display("body {body} cannot serve as a simulation origin"))]
    InvalidOrigin { body: Body },
    #[snafu(display("state epoch {got} differs from simulator epoch {expected}"))]
    EpochMismatch { got: f64, expected: f64 },
    #[snafu(display("requested step of {days} days exceeds the safety bound"))]
    StepTooLarge { days: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum EventError {
    /// Raised when the geometry is degenerate, e.g. the shadow-axis sub-point
    /// of an eclipse whose axis misses the Earth.
    #[snafu(display("geometry is degenerate: {what}"))]
    IndeterminateResult { what: &'static str },
    #[snafu(display("no moon quarter occurs within the supplied window"))]
    NoMoonQuarter,
}
