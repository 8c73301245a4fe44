pub mod arb;
pub mod errors;

#[cfg(test)]
mod laws;
#[cfg(test)]
mod scenarios;
