#[cfg(test)]
mod common;

#[cfg(test)]
mod submission_flow_tests;

#[cfg(test)]
mod webhook_delivery_tests;

#[cfg(test)]
mod preference_tests;
