//! Train ticket estimator.
//!
//! Prices a booking for one or more passengers: a base fare is fetched from
//! the pricing service, then adjusted per passenger by age, discount cards
//! and how close departure is, and finally by group discounts.

pub mod domain;
pub mod fares;
pub mod pricing;
pub mod web;
