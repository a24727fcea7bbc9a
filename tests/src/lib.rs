//! End to end tests driving the full compile and runtime halves together.

#[cfg(test)]
mod utils;

#[cfg(test)]
mod compile_e2e;

#[cfg(test)]
mod runtime_e2e;
