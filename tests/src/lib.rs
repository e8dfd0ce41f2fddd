#![cfg(test)]

mod release;
mod scan;
mod util;
mod wake;
